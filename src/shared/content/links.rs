use serde::{Deserialize, Serialize};

/// An external link attached to a record (award posts, article mirrors).
/// Submitted JSON-encoded inside a form part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}
