//! Prompt assembly and the JSON response schema sent with it.
//!
//! The prompt is Russian throughout; the model is instructed to answer with
//! nothing but a JSON object matching [`response_schema`]. Wording is
//! load-bearing — tuned against gemini-2.5-flash, change with care.

use serde_json::json;

use super::StoryRequest;

const TECHNICAL_DECOMPOSITION: &str = "\n\
    **Если тема техническая или научная, обязательно проведи её декомпозицию:**\n\
    - Что это такое (простое определение).\n\
    - Из чего состоит (ключевые части/структура).\n\
    - Как работает по шагам.\n\
    - Когда применяется и зачем.\n\
    - Основные методы/операции/подтипы.\n\
    - Сравнение с близкими понятиями.\n\
    - Достоинства и ограничения.\n\
    - Типичные ошибки и как их избежать.\n";

const DIAGRAM_INSTRUCTION: &str = "Если это уместно для темы, создай простую блок-схему или диаграмму для \
    визуализации ключевой концепции. Диаграмма должна быть на русском языке и содержать от 3 до 8 блоков.";

const EXAMPLES_INSTRUCTION: &str = "В конце добавь отдельный раздел \"Практическое применение\" с 2-3 короткими \
    примерами для работы, учебы и быта.";

/// Assemble the generation prompt for a request.
#[must_use]
pub fn build_prompt(request: &StoryRequest) -> String {
    let mut prompt = format!(
        "Ты — ИИ-рассказчик. Твоя задача — превратить любую тему в увлекательную и понятную историю на русском \
         языке. Твоя аудитория — люди без специальной подготовки, включая школьников и пожилых.\n\
         \n\
         **Основные правила:**\n\
         1.  **Язык:** Строго русский. Все термины объясняй простыми словами.\n\
         2.  **Стиль:** Простое, ясное повествование. Используй короткие предложения и избегай жаргона.\n\
         3.  **Фокус:** Не отклоняйся от заданной темы.\n\
         4.  **Аналогии:** Обязательно вплетай в рассказ сравнения и ассоциации из повседневной жизни, чтобы \
         помочь читателю запомнить материал.\n\
         5.  **Примеры:** Постоянно приводи конкретные, жизненные примеры.\n\
         6.  **Формат рассказа:** Вывод должен быть разбит на абзацы (используй '\\n\\n' как разделитель). В \
         итоговом тексте рассказа не должно быть никакого форматирования: ни заголовков, ни списков, ни жирного \
         шрифта, ни курсива.\n\
         \n\
         **Задание:**\n\
         - **Тема:** \"{topic}\"\n\
         - **Жанр:** \"{genre}\"\n\
         - **Длина рассказа:** \"{length}\"\n",
        topic = request.topic,
        genre = request.genre.label,
        length = request.length.label,
    );

    if request.length.id == "full" {
        prompt.push_str(TECHNICAL_DECOMPOSITION);
    }
    prompt.push_str("\n\nСоздай рассказ, который объясняет тему в соответствии с заданными параметрами.\n");
    if request.include_diagram {
        prompt.push_str(DIAGRAM_INSTRUCTION);
    }
    prompt.push('\n');
    if request.include_examples {
        prompt.push_str(EXAMPLES_INSTRUCTION);
    }
    prompt.push('\n');
    prompt.push_str("\nТвой ответ ДОЛЖЕН быть в формате JSON. Не добавляй ничего кроме валидного JSON объекта.\n");
    prompt
}

/// Structured-output schema for the story payload, in the Gemini REST
/// schema dialect (`OBJECT`/`STRING`/`ARRAY` type tags, `nullable` flags).
#[must_use]
pub fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "story": {
                "type": "STRING",
                "description": "Текст рассказа, разделенный на абзацы с помощью '\\n\\n'. Без markdown.",
            },
            "diagram": {
                "type": "OBJECT",
                "description": "Объект, описывающий диаграмму. Присутствует только если диаграмма была запрошена и релевантна.",
                "properties": {
                    "nodes": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "id": { "type": "STRING" },
                                "label": { "type": "STRING" },
                            },
                        },
                    },
                    "edges": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "from": { "type": "STRING" },
                                "to": { "type": "STRING" },
                                "label": { "type": "STRING", "nullable": true },
                            },
                        },
                    },
                },
                "nullable": true,
            },
            "practical_examples": {
                "type": "STRING",
                "description": "Текст с практическими примерами. Присутствует только если примеры были запрошены.",
                "nullable": true,
            },
        },
    })
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
