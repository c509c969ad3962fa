//! Maps the grouping tree onto the node shape a tree view renders.

use serde::Serialize;

use crate::domain::{GroupNode, Location, ScanResult, Status, Tag, TodoRecord, TreeNode};

/// Command id bound to a task's default (click) action.
pub const TOGGLE_COMMAND: &str = "todoly.toggleTodo";

/// Whether an item is a folder or a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Folder,
    Task,
}

impl ItemKind {
    /// Context value hosts use to pick menus for an item.
    pub fn context_value(self) -> &'static str {
        match self {
            ItemKind::Folder => "todoFolder",
            ItemKind::Task => "todoTask",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collapsible {
    None,
    Expanded,
}

/// Default action attached to a task item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCommand {
    pub id: &'static str,
    pub title: &'static str,
    pub target: Location,
}

/// One node as a tree view expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeItem {
    pub label: String,
    pub kind: ItemKind,
    pub context_value: &'static str,
    pub collapsible: Collapsible,
    pub icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<ItemCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeItem>,
}

impl TreeItem {
    pub fn folder(group: &GroupNode) -> Self {
        Self {
            label: group.label().to_string(),
            kind: ItemKind::Folder,
            context_value: ItemKind::Folder.context_value(),
            collapsible: Collapsible::Expanded,
            icon: "folder",
            description: None,
            command: None,
            status: None,
            location: None,
            tags: Vec::new(),
            children: group.children().iter().map(TreeItem::from).collect(),
        }
    }

    pub fn task(record: &TodoRecord) -> Self {
        let done = record.is_done();
        Self {
            label: record.message().to_string(),
            kind: ItemKind::Task,
            context_value: ItemKind::Task.context_value(),
            collapsible: Collapsible::None,
            icon: if done { "todo-done" } else { "todo-empty" },
            description: done.then_some("done"),
            command: Some(ItemCommand {
                id: TOGGLE_COMMAND,
                title: "Toggle",
                target: record.location().clone(),
            }),
            status: Some(record.status()),
            location: Some(record.location().clone()),
            tags: record.tags().to_vec(),
            children: Vec::new(),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }
}

impl From<&TreeNode> for TreeItem {
    fn from(node: &TreeNode) -> Self {
        match node {
            TreeNode::Group(group) => TreeItem::folder(group),
            TreeNode::Task(record) => TreeItem::task(record),
        }
    }
}

/// Converts a scan result into top-level tree items: folders, then loose tasks.
pub fn to_tree_items(result: &ScanResult) -> Vec<TreeItem> {
    result
        .groups()
        .iter()
        .map(TreeItem::folder)
        .chain(result.ungrouped().iter().map(TreeItem::task))
        .collect()
}
