use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A catalog entry as the contributor typed it. Nothing here is trusted.
///
/// Missing, `null` or wrong-typed fields deserialize to empty values: generation
/// degrades to fallback content instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceDescriptor {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub url: Option<String>,
}

/// Any non-string value (including `null`) becomes an empty string.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

/// Any non-string value (including `null`) becomes `None`.
pub fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Keeps the string elements of an array; anything else becomes an empty list.
pub fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Structured educational content for a catalog entry. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedContent {
    pub instructions: String,
    pub examples: String,
    /// Free-form, may contain duplicates. Dedup is the caller's job.
    pub tags: Vec<String>,
}

/// Short marketing description for a catalog entry. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeneratedDescription(pub String);

impl GeneratedDescription {
    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_tolerates_missing_fields() {
        let descriptor: ServiceDescriptor = serde_json::from_str("{}").unwrap();
        assert!(descriptor.title.is_empty());
        assert!(descriptor.category.is_empty());
        assert!(descriptor.url.is_none());
    }

    #[test]
    fn test_descriptor_treats_null_and_wrong_types_as_absent() {
        let json = r#"{"title": null, "description": 42, "category": "Математика", "url": null}"#;
        let descriptor: ServiceDescriptor = serde_json::from_str(json).unwrap();
        assert!(descriptor.title.is_empty());
        assert!(descriptor.description.is_empty());
        assert_eq!(descriptor.category, "Математика");
        assert!(descriptor.url.is_none());

        let descriptor: ServiceDescriptor =
            serde_json::from_str(r#"{"url": ["https://a.io"], "title": {"x": 1}}"#).unwrap();
        assert!(descriptor.url.is_none());
        assert!(descriptor.title.is_empty());
    }

    #[test]
    fn test_lenient_string_list_keeps_only_strings() {
        #[derive(Deserialize)]
        struct Tags {
            #[serde(default, deserialize_with = "lenient_string_list")]
            tags: Vec<String>,
        }

        let tags: Tags = serde_json::from_str(r#"{"tags": ["ai", null, 3, "школа"]}"#).unwrap();
        assert_eq!(tags.tags, vec!["ai", "школа"]);
        let tags: Tags = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(tags.tags.is_empty());
        let tags: Tags = serde_json::from_str("{}").unwrap();
        assert!(tags.tags.is_empty());
    }

    #[test]
    fn test_descriptor_full_deserializes() {
        let json = r#"{
            "title": "Mathly",
            "description": "Решает задачи",
            "category": "Математика",
            "url": "https://mathly.ai"
        }"#;
        let descriptor: ServiceDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.title, "Mathly");
        assert_eq!(descriptor.category, "Математика");
        assert_eq!(descriptor.url.as_deref(), Some("https://mathly.ai"));
    }

    #[test]
    fn test_description_serializes_as_plain_string() {
        let description = GeneratedDescription("Текст".to_string());
        assert_eq!(serde_json::to_string(&description).unwrap(), r#""Текст""#);
    }
}
