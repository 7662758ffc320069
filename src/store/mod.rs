mod notes;
mod users;

pub use notes::Note;
pub use users::{User, UserPublic};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to the process-memory store. Cheap to clone; all clones see
/// the same collections. Everything is gone on restart.
#[derive(Clone, Debug, Default)]
pub struct Db(Arc<Mutex<Store>>);

#[derive(Debug, Default)]
struct Store {
    users: Vec<User>,
    notes: Vec<Note>,
    note_id_counter: i64,
}

impl Store {
    fn next_note_id(&mut self) -> i64 {
        self.note_id_counter += 1;
        self.note_id_counter
    }
}

impl Db {
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn counts(&self) -> (usize, usize) {
        let store = self.lock();
        (store.users.len(), store.notes.len())
    }
}
