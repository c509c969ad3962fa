//! Host-facing provider: cached scan results, mutations, and tree items

mod notifier;
mod presentation;
mod todo_provider;

pub use notifier::ChangeNotifier;
pub use presentation::{
    Collapsible, ItemCommand, ItemKind, TOGGLE_COMMAND, TreeItem, to_tree_items,
};
pub use todo_provider::{MutationOutcome, TodoProvider};
