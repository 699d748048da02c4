//! Content Generation — orchestrates prompt → model call → JSON extraction → validation.
//!
//! Flow: build prompt → TextGenerator (bounded by timeout) → extract_json_object →
//!       per-field validation → fallback for anything missing → GeneratedContent.
//!
//! CONTRACT: neither public operation can fail. Transport errors, timeouts, a missing
//! API key, unparseable output and malformed fields all degrade to fallback content.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::generation::extract::extract_json_object;
use crate::generation::fallback::{
    fallback_description, fallback_examples, fallback_instructions, fallback_tags,
};
use crate::generation::models::{GeneratedContent, GeneratedDescription, ServiceDescriptor};
use crate::generation::prompts::{
    render_template, CONTENT_PROMPT_TEMPLATE, DESCRIPTION_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, TEXT_ONLY_INSTRUCTION};
use crate::llm_client::{LlmError, TextGenerator};

pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Why a model response could not be used as a whole.
#[derive(Debug, Error)]
enum ResponseError {
    #[error("no JSON object found in model response")]
    NoJsonObject,

    #[error("model JSON is invalid: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("model JSON is not an object")]
    NotAnObject,
}

/// Which side produced a field. Logged only; not part of the result.
#[derive(Debug, Clone, Copy)]
enum Source {
    Model,
    Fallback,
}

impl Source {
    fn as_str(self) -> &'static str {
        match self {
            Source::Model => "model",
            Source::Fallback => "fallback",
        }
    }
}

/// Fields that survived validation. `None` means "use the fallback for this one".
#[derive(Debug, Default, PartialEq)]
struct ModelFields {
    instructions: Option<String>,
    examples: Option<String>,
    tags: Option<Vec<String>>,
}

/// Stateless per call; safe to share behind an `Arc` across concurrent requests.
pub struct ContentGenerator {
    llm: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl ContentGenerator {
    pub fn new(llm: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { llm, timeout }
    }

    /// Generates instructions, examples and tags for a catalog entry.
    pub async fn generate_structured_content(
        &self,
        service: &ServiceDescriptor,
    ) -> GeneratedContent {
        info!("Generating content for '{}'", service.title);
        let prompt = build_content_prompt(service);

        let fields = match self.call_llm(&prompt).await {
            Ok(text) => match parse_model_fields(&text) {
                Ok(fields) => fields,
                Err(e) => {
                    warn!("Unusable model response for '{}': {e}", service.title);
                    ModelFields::default()
                }
            },
            Err(e) => {
                warn!("Content generation failed for '{}': {e}", service.title);
                ModelFields::default()
            }
        };

        merge_with_fallback(fields, service)
    }

    /// Generates a 2–3 sentence description from the service URL and title.
    pub async fn generate_description(&self, url: &str, title: &str) -> GeneratedDescription {
        let prompt = build_description_prompt(url, title);

        let text = match self.call_llm(&prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!("Description generation failed for '{title}': {e}");
                String::new()
            }
        };

        if text.is_empty() {
            info!(source = Source::Fallback.as_str(), "Description for '{title}'");
            GeneratedDescription(fallback_description(url, title))
        } else {
            info!(source = Source::Model.as_str(), "Description for '{title}'");
            GeneratedDescription(text)
        }
    }

    async fn call_llm(&self, prompt: &str) -> Result<String, LlmError> {
        match tokio::time::timeout(self.timeout, self.llm.generate(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout(self.timeout)),
        }
    }
}

fn build_content_prompt(service: &ServiceDescriptor) -> String {
    let url_line = service
        .url
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .map(|u| format!("- URL: {u}"))
        .unwrap_or_default();

    render_template(
        CONTENT_PROMPT_TEMPLATE,
        &[
            ("json_only_instruction", JSON_ONLY_INSTRUCTION),
            ("url_line", url_line.as_str()),
            ("category", service.category.as_str()),
            ("description", service.description.as_str()),
            ("title", service.title.as_str()),
        ],
    )
}

fn build_description_prompt(url: &str, title: &str) -> String {
    render_template(
        DESCRIPTION_PROMPT_TEMPLATE,
        &[
            ("text_only_instruction", TEXT_ONLY_INSTRUCTION),
            ("url", url),
            ("title", title),
        ],
    )
}

/// Extracts the first JSON object from `text` and validates each field independently.
fn parse_model_fields(text: &str) -> Result<ModelFields, ResponseError> {
    let json = extract_json_object(text).ok_or(ResponseError::NoJsonObject)?;
    let value: Value = serde_json::from_str(json)?;
    let object = value.as_object().ok_or(ResponseError::NotAnObject)?;

    Ok(ModelFields {
        instructions: non_empty_string(object, "instructions"),
        examples: non_empty_string(object, "examples"),
        tags: string_list(object, "tags"),
    })
}

fn non_empty_string(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Every element must be a string; blank entries are dropped; an empty result is rejected.
fn string_list(object: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let items = object.get(key)?.as_array()?;
    let tags = items
        .iter()
        .map(|v| v.as_str().map(str::trim))
        .collect::<Option<Vec<&str>>>()?
        .into_iter()
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();

    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

fn merge_with_fallback(fields: ModelFields, service: &ServiceDescriptor) -> GeneratedContent {
    let (instructions, instructions_source) = match fields.instructions {
        Some(v) => (v, Source::Model),
        None => (fallback_instructions(&service.title), Source::Fallback),
    };
    let (examples, examples_source) = match fields.examples {
        Some(v) => (v, Source::Model),
        None => (
            fallback_examples(&service.title, &service.category),
            Source::Fallback,
        ),
    };
    let (tags, tags_source) = match fields.tags {
        Some(v) => (v, Source::Model),
        None => (fallback_tags(&service.category), Source::Fallback),
    };

    info!(
        instructions = instructions_source.as_str(),
        examples = examples_source.as_str(),
        tags = tags_source.as_str(),
        "Content for '{}' resolved",
        service.title
    );

    GeneratedContent {
        instructions,
        examples,
        tags,
    }
}
