use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

use super::Db;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn not_found() -> Error {
    Error::NotFound("Note not found".into())
}

impl Db {
    /// All notes owned by `owner_id`, in insertion order. Ordering and
    /// filtering beyond ownership is the caller's concern.
    pub fn list_notes(&self, owner_id: i64) -> Vec<Note> {
        self.lock()
            .notes
            .iter()
            .filter(|n| n.user_id == owner_id)
            .cloned()
            .collect()
    }

    /// A note that exists but belongs to someone else is reported exactly
    /// like a note that does not exist, so ids cannot be probed.
    pub fn get_note(&self, id: i64, owner_id: i64) -> Result<Note> {
        self.lock()
            .notes
            .iter()
            .find(|n| n.id == id && n.user_id == owner_id)
            .cloned()
            .ok_or_else(not_found)
    }

    pub fn create_note(&self, owner_id: i64, title: &str, content: &str) -> Result<Note> {
        if title.is_empty() || content.is_empty() {
            return Err(Error::Validation("Title and content are required".into()));
        }

        let mut store = self.lock();
        let now = Utc::now();
        let note = Note {
            id: store.next_note_id(),
            user_id: owner_id,
            title: title.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        };
        store.notes.push(note.clone());

        Ok(note)
    }

    /// Partial update: absent or empty fields keep their current value.
    /// The update timestamp is refreshed either way.
    pub fn update_note(
        &self,
        id: i64,
        owner_id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Note> {
        let mut store = self.lock();
        let note = store
            .notes
            .iter_mut()
            .find(|n| n.id == id && n.user_id == owner_id)
            .ok_or_else(not_found)?;

        if let Some(title) = title.filter(|t| !t.is_empty()) {
            note.title = title;
        }
        if let Some(content) = content.filter(|c| !c.is_empty()) {
            note.content = content;
        }
        note.updated_at = Utc::now();

        Ok(note.clone())
    }

    pub fn delete_note(&self, id: i64, owner_id: i64) -> Result<()> {
        let mut store = self.lock();
        let index = store
            .notes
            .iter()
            .position(|n| n.id == id && n.user_id == owner_id)
            .ok_or_else(not_found)?;
        store.notes.remove(index);

        Ok(())
    }
}
