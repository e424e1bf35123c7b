//! Reader for admin-form submissions.
//!
//! The admin UI posts every create/edit form as `multipart/form-data`: scalar
//! fields arrive as text parts, array/object fields (links, skill tags, social
//! links) arrive JSON-encoded inside a text part, and file fields arrive as
//! binary parts. This collects the whole payload up front so handlers can do
//! plain field lookups instead of streaming.

use std::collections::HashMap;

use actix_multipart::Multipart;
use futures::{StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;

use crate::shared::content::error::ContentError;

/// Uploads beyond this are rejected before touching the asset store.
const MAX_PART_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("malformed multipart payload: {0}")]
    Malformed(String),

    #[error("uploaded file exceeds the {MAX_PART_BYTES} byte limit")]
    PartTooLarge,
}

impl From<FormError> for ContentError {
    fn from(e: FormError) -> Self {
        ContentError::Validation(e.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct FormData {
    texts: HashMap<String, String>,
    files: Vec<UploadedFile>,
}

impl FormData {
    pub async fn read(mut payload: Multipart) -> Result<Self, FormError> {
        let mut form = FormData::default();

        while let Some(mut field) = payload
            .try_next()
            .await
            .map_err(|e| FormError::Malformed(e.to_string()))?
        {
            let disposition = field.content_disposition();
            let name = disposition.get_name().unwrap_or_default().to_string();
            let file_name = disposition
                .get_filename()
                .filter(|f| !f.is_empty())
                .map(|f| f.to_string());
            let content_type = field
                .content_type()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            let mut data: Vec<u8> = Vec::new();
            while let Some(chunk) = field.next().await {
                let chunk = chunk.map_err(|e| FormError::Malformed(e.to_string()))?;
                if data.len() + chunk.len() > MAX_PART_BYTES {
                    return Err(FormError::PartTooLarge);
                }
                data.extend_from_slice(&chunk);
            }

            match file_name {
                Some(file_name) => form.files.push(UploadedFile {
                    field: name,
                    file_name,
                    content_type,
                    bytes: data,
                }),
                None => {
                    let text = String::from_utf8(data).map_err(|_| {
                        FormError::Malformed(format!("field {} is not valid UTF-8", name))
                    })?;
                    form.texts.insert(name, text);
                }
            }
        }

        Ok(form)
    }

    /// A text part, with blank submissions treated as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts
            .get(name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    pub fn owned_text(&self, name: &str) -> Option<String> {
        self.text(name).map(|s| s.to_string())
    }

    pub fn required_text(&self, name: &'static str) -> Result<String, FormError> {
        self.owned_text(name).ok_or(FormError::MissingField(name))
    }

    /// A JSON-encoded array/object part.
    pub fn json_field<T: DeserializeOwned>(
        &self,
        name: &'static str,
    ) -> Result<Option<T>, FormError> {
        match self.text(name) {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| FormError::InvalidField {
                    field: name,
                    reason: e.to_string(),
                }),
        }
    }

    pub fn int_field(&self, name: &'static str) -> Result<Option<i32>, FormError> {
        match self.text(name) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<i32>()
                .map(Some)
                .map_err(|_| FormError::InvalidField {
                    field: name,
                    reason: format!("expected a number, got '{}'", raw),
                }),
        }
    }

    pub fn bool_field(&self, name: &'static str) -> Result<Option<bool>, FormError> {
        match self.text(name) {
            None => Ok(None),
            Some("true") | Some("1") => Ok(Some(true)),
            Some("false") | Some("0") => Ok(Some(false)),
            Some(raw) => Err(FormError::InvalidField {
                field: name,
                reason: format!("expected true/false, got '{}'", raw),
            }),
        }
    }

    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.field == name)
    }

    #[cfg(test)]
    pub fn from_parts(texts: Vec<(&str, &str)>, files: Vec<UploadedFile>) -> Self {
        Self {
            texts: texts
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_counts_as_missing() {
        let form = FormData::from_parts(vec![("title", "   ")], vec![]);

        assert!(form.text("title").is_none());
        let err = form.required_text("title").unwrap_err();
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn json_field_decodes_arrays() {
        let form = FormData::from_parts(vec![("skillTags", r#"["Rust","Actix"]"#)], vec![]);

        let tags: Option<Vec<String>> = form.json_field("skillTags").unwrap();
        assert_eq!(tags.unwrap(), vec!["Rust", "Actix"]);
    }

    #[test]
    fn json_field_rejects_garbage() {
        let form = FormData::from_parts(vec![("skillTags", "not-json")], vec![]);

        let result: Result<Option<Vec<String>>, _> = form.json_field("skillTags");
        assert!(matches!(
            result,
            Err(FormError::InvalidField { field: "skillTags", .. })
        ));
    }

    #[test]
    fn int_and_bool_fields_parse() {
        let form = FormData::from_parts(
            vec![("completionYear", "2024"), ("showOnHome", "true")],
            vec![],
        );

        assert_eq!(form.int_field("completionYear").unwrap(), Some(2024));
        assert_eq!(form.bool_field("showOnHome").unwrap(), Some(true));
        assert_eq!(form.bool_field("pinned").unwrap(), None);
    }

    #[test]
    fn file_lookup_by_field_name() {
        let file = UploadedFile {
            field: "image".to_string(),
            file_name: "shot.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        };
        let form = FormData::from_parts(vec![], vec![file]);

        assert!(form.file("image").is_some());
        assert!(form.file("certificate").is_none());
    }
}
