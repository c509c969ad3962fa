//! Core types: Status, Tag, Location, TodoRecord, GroupNode, ScanResult

mod location;
mod record;
mod status;
mod tag;
mod tree;

pub use location::{Location, ParseLocationError};
pub use record::TodoRecord;
pub use status::{ParseStatusError, Status};
pub use tag::{ParseTagError, Tag};
pub use tree::{GroupNode, ScanResult, TreeNode};
