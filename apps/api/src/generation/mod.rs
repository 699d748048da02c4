// Content generation for catalog entries.
// Implements: prompt building, JSON extraction, per-field validation, template fallback.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod extract;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
