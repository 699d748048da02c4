// All LLM prompt templates for the generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Structured content prompt.
/// Placeholders: {title}, {description}, {category}, {url_line}, {json_only_instruction}
pub const CONTENT_PROMPT_TEMPLATE: &str = r#"Ты эксперт в области образовательных технологий и AI-инструментов для учителей.
Создай подробную инструкцию и примеры применения для AI-сервиса.

**Информация о сервисе:**
- Название: {title}
- Описание: {description}
- Категория: {category}
{url_line}

**Задача:**
Создай структурированный ответ в формате JSON со следующими полями:

1. **instructions** - Пошаговая инструкция по использованию сервиса (7-10 пунктов)
2. **examples** - Практические примеры применения в образовательном процессе, разделенные по тематикам с эмодзи
3. **tags** - Массив релевантных тегов на русском языке (5-8 тегов)

**Требования:**
- Инструкции должны быть конкретными и понятными для учителей
- Примеры должны быть практическими и применимыми в реальном учебном процессе
- Теги должны отражать предметную область и функциональность
- Текст должен быть на русском языке
- Учитывай специфику категории "{category}"

{json_only_instruction}
{
  "instructions": "текст инструкций",
  "examples": "текст примеров с эмодзи и разделами",
  "tags": ["тег1", "тег2", "тег3"]
}"#;

/// Description prompt.
/// Placeholders: {title}, {url}, {text_only_instruction}
pub const DESCRIPTION_PROMPT_TEMPLATE: &str = r#"Проанализируй URL и создай краткое описание AI-сервиса для каталога образовательных инструментов.

**Информация:**
- Название сервиса: {title}
- URL: {url}

**Задача:**
Создай краткое описание (2-3 предложения) на русском языке, которое:
- Объясняет назначение сервиса для учителей
- Описывает основные возможности
- Подчеркивает образовательную ценность

{text_only_instruction}"#;

/// Substitutes `{name}` placeholders in a single pass over `template`.
///
/// Inserted values are never rescanned, so user text containing `{title}` stays verbatim.
/// Braces that do not name a known placeholder are copied through.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substitution = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });

        match substitution {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
