//! Two-level grouping tree produced by a scan.

use serde::Serialize;

use super::TodoRecord;

/// A node of the grouping tree: either a tag folder or a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    Group(GroupNode),
    Task(TodoRecord),
}

impl TreeNode {
    /// Returns the child nodes; tasks have none.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Group(group) => group.children(),
            TreeNode::Task(_) => &[],
        }
    }

    pub fn as_group(&self) -> Option<&GroupNode> {
        match self {
            TreeNode::Group(group) => Some(group),
            TreeNode::Task(_) => None,
        }
    }

    pub fn as_task(&self) -> Option<&TodoRecord> {
        match self {
            TreeNode::Group(_) => None,
            TreeNode::Task(record) => Some(record),
        }
    }
}

/// A folder named after a tag.
///
/// Top-level groups are keyed by main tag and may hold records directly as
/// well as subgroups keyed by sub tag. Subgroups only ever hold records, so
/// the tree is never deeper than two group levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupNode {
    label: String,
    children: Vec<TreeNode>,
}

impl GroupNode {
    /// Creates a subgroup holding only records.
    pub(crate) fn leaf(label: impl Into<String>, records: Vec<TodoRecord>) -> Self {
        Self {
            label: label.into(),
            children: records.into_iter().map(TreeNode::Task).collect(),
        }
    }

    /// Creates a top-level group: direct records first, then subgroups.
    pub(crate) fn main(
        label: impl Into<String>,
        records: Vec<TodoRecord>,
        subgroups: Vec<GroupNode>,
    ) -> Self {
        let mut children: Vec<TreeNode> = records.into_iter().map(TreeNode::Task).collect();
        children.extend(subgroups.into_iter().map(TreeNode::Group));
        Self {
            label: label.into(),
            children,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Subgroups directly below this group.
    pub fn subgroups(&self) -> impl Iterator<Item = &GroupNode> {
        self.children.iter().filter_map(TreeNode::as_group)
    }

    /// Records directly below this group (not inside subgroups).
    pub fn records(&self) -> impl Iterator<Item = &TodoRecord> {
        self.children.iter().filter_map(TreeNode::as_task)
    }

    /// Every record in this group and its subgroups, depth first.
    pub fn all_records(&self) -> Vec<&TodoRecord> {
        let mut out = Vec::new();
        for child in &self.children {
            match child {
                TreeNode::Task(record) => out.push(record),
                TreeNode::Group(group) => out.extend(group.all_records()),
            }
        }
        out
    }
}

/// The result of one full scan.
///
/// Groups are sorted by label; ungrouped records keep file enumeration
/// order, then line order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    groups: Vec<GroupNode>,
    ungrouped: Vec<TodoRecord>,
}

impl ScanResult {
    pub(crate) fn new(groups: Vec<GroupNode>, ungrouped: Vec<TodoRecord>) -> Self {
        Self { groups, ungrouped }
    }

    pub fn groups(&self) -> &[GroupNode] {
        &self.groups
    }

    pub fn ungrouped(&self) -> &[TodoRecord] {
        &self.ungrouped
    }

    /// Top-level nodes as a host would render them: groups, then ungrouped records.
    pub fn roots(&self) -> Vec<TreeNode> {
        self.groups
            .iter()
            .cloned()
            .map(TreeNode::Group)
            .chain(self.ungrouped.iter().cloned().map(TreeNode::Task))
            .collect()
    }

    /// Every record in the result, in tree order.
    pub fn records(&self) -> Vec<&TodoRecord> {
        self.groups
            .iter()
            .flat_map(GroupNode::all_records)
            .chain(self.ungrouped.iter())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.ungrouped.is_empty()
    }

    /// Finds the record at an exact location.
    pub fn find(&self, location: &super::Location) -> Option<&TodoRecord> {
        self.records()
            .into_iter()
            .find(|record| record.location() == location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Location, Status, Tag};
    use pretty_assertions::assert_eq;

    fn record(line: usize, tags: &[&str]) -> TodoRecord {
        TodoRecord::new(
            Location::new("a.ts", line),
            Status::Open,
            tags.iter().map(|t| Tag::new(t).unwrap()).collect(),
            format!("item {}", line),
        )
    }

    #[test]
    fn main_group_lists_records_before_subgroups() {
        let group = GroupNode::main(
            "ui",
            vec![record(0, &["ui"])],
            vec![GroupNode::leaf("layout", vec![record(1, &["ui", "layout"])])],
        );
        assert!(matches!(group.children()[0], TreeNode::Task(_)));
        assert!(matches!(group.children()[1], TreeNode::Group(_)));
        assert_eq!(group.records().count(), 1);
        assert_eq!(group.subgroups().count(), 1);
        assert_eq!(group.all_records().len(), 2);
    }

    #[test]
    fn roots_put_groups_before_ungrouped() {
        let result = ScanResult::new(
            vec![GroupNode::main("ui", vec![record(0, &["ui"])], vec![])],
            vec![record(1, &[])],
        );
        let roots = result.roots();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].as_group().map(GroupNode::label), Some("ui"));
        assert!(roots[1].as_task().is_some());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn find_matches_exact_location() {
        let result = ScanResult::new(vec![], vec![record(4, &[])]);
        assert!(result.find(&Location::new("a.ts", 4)).is_some());
        assert!(result.find(&Location::new("a.ts", 5)).is_none());
    }

    #[test]
    fn task_nodes_have_no_children() {
        let node = TreeNode::Task(record(0, &[]));
        assert!(node.children().is_empty());
    }

    #[test]
    fn empty_result() {
        let result = ScanResult::default();
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert!(result.roots().is_empty());
    }
}
