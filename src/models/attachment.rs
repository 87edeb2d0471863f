use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAttachment {
    pub href: String,
    #[serde(default)]
    pub doc_name: String,
    #[serde(default)]
    pub doc_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
}
