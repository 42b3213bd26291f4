use super::*;
use crate::story::catalog;

fn request(length_id: &str, diagram: bool, examples: bool) -> StoryRequest {
    StoryRequest {
        topic: "Квантовая запутанность".into(),
        genre: catalog::genre("sci-fi").unwrap(),
        length: catalog::story_length(length_id).unwrap(),
        include_diagram: diagram,
        include_examples: examples,
    }
}

#[test]
fn prompt_carries_request_parameters() {
    let prompt = build_prompt(&request("medium", false, false));
    assert!(prompt.starts_with("Ты — ИИ-рассказчик."));
    assert!(prompt.contains("- **Тема:** \"Квантовая запутанность\""));
    assert!(prompt.contains("- **Жанр:** \"Фантастика\""));
    assert!(prompt.contains("- **Длина рассказа:** \"Средний\""));
    assert!(prompt.ends_with("Не добавляй ничего кроме валидного JSON объекта.\n"));
}

#[test]
fn prompt_spells_out_paragraph_separator() {
    let prompt = build_prompt(&request("medium", false, false));
    // The model must see a literal '\n\n', not a real blank line.
    assert!(prompt.contains("(используй '\\n\\n' как разделитель)"));
}

#[test]
fn full_length_adds_decomposition_block() {
    let base = build_prompt(&request("medium", false, false));
    let full = build_prompt(&request("full", false, false));
    assert!(!base.contains("декомпозицию"));
    assert!(full.contains("обязательно проведи её декомпозицию"));
    assert!(full.contains("- Типичные ошибки и как их избежать."));
}

#[test]
fn diagram_flag_requests_three_to_eight_blocks() {
    let off = build_prompt(&request("medium", false, false));
    let on = build_prompt(&request("medium", true, false));
    assert!(!off.contains("блок-схему"));
    assert!(on.contains("от 3 до 8 блоков"));
}

#[test]
fn examples_flag_requests_practical_section() {
    let off = build_prompt(&request("medium", false, false));
    let on = build_prompt(&request("medium", false, true));
    assert!(!off.contains("Практическое применение"));
    assert!(on.contains("раздел \"Практическое применение\""));
}

#[test]
fn schema_matches_payload_shape() {
    let schema = response_schema();
    assert_eq!(schema["type"], "OBJECT");
    assert_eq!(schema["properties"]["story"]["type"], "STRING");
    assert_eq!(schema["properties"]["diagram"]["nullable"], true);
    assert_eq!(schema["properties"]["diagram"]["properties"]["nodes"]["type"], "ARRAY");
    assert_eq!(
        schema["properties"]["diagram"]["properties"]["edges"]["items"]["properties"]["label"]["nullable"],
        true
    );
    assert_eq!(schema["properties"]["practical_examples"]["nullable"], true);
}
