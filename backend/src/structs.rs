use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
}

pub type NoteVector = Vec<Note>;

/// Body accepted by `POST` and `PUT`. Both fields are optional on the wire so
/// that a missing title can be reported as a validation error instead of a
/// parse failure.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct NotePayload {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

/// Fields to change on an existing note, `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    pub fn apply(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
    }
}
