use super::*;

#[test]
fn parse_complete_payload() {
    let json = serde_json::json!({
        "story": "Первый абзац.\n\nВторой абзац.",
        "diagram": {
            "nodes": [
                { "id": "a", "label": "Начало" },
                { "id": "b", "label": "Конец" }
            ],
            "edges": [
                { "from": "a", "to": "b", "label": "ведёт к" }
            ]
        },
        "practical_examples": "1. На работе.\n2. Дома."
    })
    .to_string();

    let resp = parse(&json).unwrap();
    assert_eq!(resp.story, "Первый абзац.\n\nВторой абзац.");
    let diagram = resp.diagram.unwrap();
    assert_eq!(diagram.nodes.len(), 2);
    assert_eq!(diagram.edges.len(), 1);
    assert_eq!(diagram.edges[0].label.as_deref(), Some("ведёт к"));
    assert_eq!(resp.examples.as_deref(), Some("1. На работе.\n2. Дома."));
}

#[test]
fn parse_tolerates_surrounding_whitespace() {
    let resp = parse("  \n {\"story\": \"Текст.\"} \n ").unwrap();
    assert_eq!(resp.story, "Текст.");
    assert!(resp.diagram.is_none());
    assert!(resp.examples.is_none());
}

#[test]
fn missing_story_falls_back() {
    let resp = parse("{}").unwrap();
    assert_eq!(resp.story, STORY_FALLBACK);
}

#[test]
fn empty_story_falls_back() {
    let resp = parse("{\"story\": \"\"}").unwrap();
    assert_eq!(resp.story, STORY_FALLBACK);
}

#[test]
fn empty_examples_become_none() {
    let resp = parse("{\"story\": \"x\", \"practical_examples\": \"\"}").unwrap();
    assert!(resp.examples.is_none());
}

#[test]
fn null_diagram_is_none() {
    let resp = parse("{\"story\": \"x\", \"diagram\": null}").unwrap();
    assert!(resp.diagram.is_none());
}

#[test]
fn diagram_without_nodes_is_none() {
    let json = serde_json::json!({
        "story": "x",
        "diagram": { "nodes": [], "edges": [{ "from": "a", "to": "b" }] }
    })
    .to_string();
    let resp = parse(&json).unwrap();
    assert!(resp.diagram.is_none());
}

#[test]
fn nodes_without_id_are_dropped() {
    let json = serde_json::json!({
        "story": "x",
        "diagram": {
            "nodes": [
                { "label": "без идентификатора" },
                { "id": "", "label": "пустой" },
                { "id": "ok", "label": "есть" }
            ],
            "edges": []
        }
    })
    .to_string();
    let diagram = parse(&json).unwrap().diagram.unwrap();
    assert_eq!(diagram.nodes.len(), 1);
    assert_eq!(diagram.nodes[0].id, "ok");
}

#[test]
fn duplicate_node_ids_keep_first() {
    let json = serde_json::json!({
        "story": "x",
        "diagram": {
            "nodes": [
                { "id": "a", "label": "первый" },
                { "id": "a", "label": "второй" }
            ],
            "edges": []
        }
    })
    .to_string();
    let diagram = parse(&json).unwrap().diagram.unwrap();
    assert_eq!(diagram.nodes.len(), 1);
    assert_eq!(diagram.nodes[0].label, "первый");
}

#[test]
fn node_without_label_gets_empty_label() {
    let json = serde_json::json!({
        "story": "x",
        "diagram": { "nodes": [{ "id": "a" }], "edges": [] }
    })
    .to_string();
    let diagram = parse(&json).unwrap().diagram.unwrap();
    assert_eq!(diagram.nodes[0].label, "");
}

#[test]
fn edges_missing_endpoints_are_dropped() {
    let json = serde_json::json!({
        "story": "x",
        "diagram": {
            "nodes": [{ "id": "a", "label": "A" }, { "id": "b", "label": "B" }],
            "edges": [
                { "from": "a" },
                { "to": "b" },
                { "from": "", "to": "b" },
                { "from": "a", "to": "b" }
            ]
        }
    })
    .to_string();
    let diagram = parse(&json).unwrap().diagram.unwrap();
    assert_eq!(diagram.edges.len(), 1);
}

#[test]
fn empty_edge_label_becomes_none() {
    let json = serde_json::json!({
        "story": "x",
        "diagram": {
            "nodes": [{ "id": "a", "label": "A" }, { "id": "b", "label": "B" }],
            "edges": [{ "from": "a", "to": "b", "label": "" }]
        }
    })
    .to_string();
    let diagram = parse(&json).unwrap().diagram.unwrap();
    assert!(diagram.edges[0].label.is_none());
}

#[test]
fn non_json_reply_errors() {
    assert!(parse("Вот ваш рассказ: ...").is_err());
}
