//! Hierarchy builder: folds flat sequence records into a rooted tree.
//!
//! Every path from the root to a leaf corresponds to one input record.
//! Internal nodes are deduplicated by name among siblings; leaves never are,
//! so two records with the same full path produce two sibling leaves.

use std::fmt;

use super::aggregate::aggregate;
use super::record::{Metric, Metrics, SequenceRecord};

pub const ROOT_NAME: &str = "root";
pub const DEFAULT_DELIMITER: char = '~';

/// A node of the sequence tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Terminal step of one record, carrying that record's metrics.
    Leaf { name: String, metrics: Metrics },
    /// Shared prefix step; children kept in first-encounter order.
    Internal { name: String, children: Vec<TreeNode> },
}

impl TreeNode {
    pub fn leaf(name: impl Into<String>, metrics: Metrics) -> Self {
        TreeNode::Leaf {
            name: name.into(),
            metrics,
        }
    }

    pub fn internal(name: impl Into<String>) -> Self {
        TreeNode::Internal {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::Leaf { name, .. } | TreeNode::Internal { name, .. } => name,
        }
    }

    /// Children of an internal node; empty for a leaf.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Leaf { .. } => &[],
            TreeNode::Internal { children, .. } => children,
        }
    }

    pub fn metrics(&self) -> Option<&Metrics> {
        match self {
            TreeNode::Leaf { metrics, .. } => Some(metrics),
            TreeNode::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    pub fn child(&self, index: usize) -> Option<&TreeNode> {
        self.children().get(index)
    }

    /// Number of edges on the longest downward path to a leaf.
    pub fn height(&self) -> usize {
        self.children()
            .iter()
            .map(|c| c.height() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Internal { children, .. } => children.iter().map(TreeNode::leaf_count).sum(),
        }
    }

    /// Pre-order walk yielding each node with its index path.
    pub fn descendants(&self) -> Vec<(NodePath, &TreeNode)> {
        let mut out = Vec::new();
        let mut stack = vec![(NodePath::root(), self)];
        while let Some((path, node)) = stack.pop() {
            for (i, child) in node.children().iter().enumerate().rev() {
                stack.push((path.child(i), child));
            }
            out.push((path, node));
        }
        out
    }

    fn is_internal_named(&self, step: &str) -> bool {
        matches!(self, TreeNode::Internal { name, .. } if name == step)
    }
}

/// Address of a node as child indices from the root. Empty means the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        NodePath(Vec::new())
    }

    pub fn new(indices: Vec<usize>) -> Self {
        NodePath(indices)
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        NodePath(indices)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// True when `self` is `other` or one of its ancestors.
    pub fn is_prefix_of(&self, other: &NodePath) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(usize::to_string).collect();
        write!(f, "/{}", parts.join("/"))
    }
}

/// Fold records into a tree rooted at an internal node named `root`.
pub fn build(records: &[SequenceRecord], delimiter: char) -> TreeNode {
    let mut root_children = Vec::new();

    for record in records {
        let steps: Vec<&str> = record.steps(delimiter).collect();
        let Some((last, prefix)) = steps.split_last() else {
            continue;
        };

        let mut children = &mut root_children;
        for step in prefix {
            children = descend(children, step);
        }
        children.push(TreeNode::leaf(*last, record.metrics));
    }

    TreeNode::Internal {
        name: ROOT_NAME.to_string(),
        children: root_children,
    }
}

/// Find the internal child named `step`, creating it if absent, and return
/// its children. Leaf siblings with the same name are passed over.
fn descend<'a>(children: &'a mut Vec<TreeNode>, step: &str) -> &'a mut Vec<TreeNode> {
    let index = match children.iter().position(|c| c.is_internal_named(step)) {
        Some(i) => i,
        None => {
            children.push(TreeNode::internal(step));
            children.len() - 1
        }
    };
    match &mut children[index] {
        TreeNode::Internal { children, .. } => children,
        TreeNode::Leaf { .. } => unreachable!("descend only selects internal nodes"),
    }
}

/// The built tree plus the grand total of `size`, fixed at construction.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    root: TreeNode,
    grand_total_size: f64,
    delimiter: char,
}

impl Hierarchy {
    pub fn from_records(records: &[SequenceRecord], delimiter: char) -> Self {
        let root = build(records, delimiter);
        let grand_total_size = aggregate(&root, Metric::Size);
        tracing::info!(
            records = records.len(),
            leaves = root.leaf_count(),
            grand_total_size,
            "built hierarchy"
        );
        Self {
            root,
            grand_total_size,
            delimiter,
        }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn grand_total_size(&self) -> f64 {
        self.grand_total_size
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn node(&self, path: &NodePath) -> Option<&TreeNode> {
        path.indices()
            .iter()
            .try_fold(&self.root, |node, &i| node.child(i))
    }

    /// Nodes from the root's child down to `path` inclusive.
    pub fn chain(&self, path: &NodePath) -> Option<Vec<&TreeNode>> {
        let mut node = &self.root;
        let mut chain = Vec::with_capacity(path.depth());
        for &i in path.indices() {
            node = node.child(i)?;
            chain.push(node);
        }
        Some(chain)
    }

    /// Resolve a delimiter-joined name path such as `Male~Automotive`.
    /// Intermediate steps only match internal siblings, as in `build`; the
    /// final step matches the first sibling of that name. An empty string
    /// resolves to the root.
    pub fn find(&self, names: &str) -> Option<NodePath> {
        if names.is_empty() {
            return Some(NodePath::root());
        }
        let steps: Vec<&str> = names.split(self.delimiter).collect();
        let (last, prefix) = steps.split_last()?;

        let mut node = &self.root;
        let mut path = NodePath::root();
        for step in prefix {
            let index = node.children().iter().position(|c| c.is_internal_named(step))?;
            node = &node.children()[index];
            path = path.child(index);
        }
        let index = node.children().iter().position(|c| c.name() == *last)?;
        Some(path.child(index))
    }
}
