//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::models::{lenient_string, lenient_string_list, ServiceDescriptor};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateContentRequest {
    #[serde(flatten)]
    pub service: ServiceDescriptor,
    /// Tags the contributor already entered; generated tags are merged after these.
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub existing_tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateContentResponse {
    pub instructions: String,
    pub examples: String,
    pub tags: Vec<String>,
    pub merged_tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateDescriptionRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateDescriptionResponse {
    pub description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generate/content
///
/// Always answers 200 with fully populated content for any JSON object body;
/// `null` or wrong-typed fields count as absent.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    payload: Result<Json<GenerateContentRequest>, JsonRejection>,
) -> Result<Json<GenerateContentResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let content = state
        .generator
        .generate_structured_content(&request.service)
        .await;
    let merged_tags = merge_tags(&request.existing_tags, &content.tags);

    Ok(Json(GenerateContentResponse {
        instructions: content.instructions,
        examples: content.examples,
        tags: content.tags,
        merged_tags,
    }))
}

/// POST /api/v1/generate/description
pub async fn handle_generate_description(
    State(state): State<AppState>,
    payload: Result<Json<GenerateDescriptionRequest>, JsonRejection>,
) -> Result<Json<GenerateDescriptionResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let description = state
        .generator
        .generate_description(&request.url, &request.title)
        .await;

    Ok(Json(GenerateDescriptionResponse {
        description: description.into_inner(),
    }))
}

/// Appends generated tags not already present, comparing trimmed and lower-cased.
fn merge_tags(existing: &[String], generated: &[String]) -> Vec<String> {
    let normalize = |t: &str| t.trim().to_lowercase();
    let mut merged = existing.to_vec();
    let mut seen: Vec<String> = existing.iter().map(|t| normalize(t.as_str())).collect();

    for tag in generated {
        let key = normalize(tag.as_str());
        if !seen.contains(&key) {
            seen.push(key);
            merged.push(tag.clone());
        }
    }

    merged
}
