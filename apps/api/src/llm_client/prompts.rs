// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to prompts that expect a JSON object back.
pub const JSON_ONLY_INSTRUCTION: &str = "**Формат ответа:** Только JSON без дополнительных комментариев, \
    без markdown-блоков и пояснений.";

/// Appended to prompts that expect plain prose back.
pub const TEXT_ONLY_INSTRUCTION: &str =
    "**Формат:** Только текст описания, без дополнительных комментариев.";
