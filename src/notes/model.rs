use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateNote {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteNoteResponse {
    pub message: String,
}
