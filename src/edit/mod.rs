//! Text edits that toggle or remove annotations, and their application

mod applier;
mod mutator;
mod text_edit;

pub use applier::EditApplier;
pub use mutator::Mutator;
pub use text_edit::{EditBatch, EditError, TextEdit, apply_to_content};
