//! Creation form page.

use crate::form::draft::{BookDraft, BookField};
use std::fmt::{Display, Formatter};

/// Label of the submit button.
pub const SUBMIT_LABEL: &str = "Add Book";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBookView {
    pub draft: BookDraft,
}

impl AddBookView {
    pub fn build(draft: &BookDraft) -> Self {
        Self {
            draft: draft.clone(),
        }
    }
}

impl Display for AddBookView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for field in BookField::ALL {
            writeln!(f, "{:<12} [{}]", field.label(), self.draft.get(field))?;
        }
        writeln!(f, "[{SUBMIT_LABEL}]")
    }
}
