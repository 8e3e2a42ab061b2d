//! Subtree aggregation over a chosen metric.
//!
//! Nothing is cached on the nodes: each call walks the subtree again, so
//! the same node can be queried with different metrics in any order.

use super::hierarchy::TreeNode;
use super::record::Metric;

/// Sum of `metric` over every leaf in the subtree rooted at `node`.
pub fn aggregate(node: &TreeNode, metric: Metric) -> f64 {
    let mut total = 0.0;
    let mut stack = vec![node];
    while let Some(n) = stack.pop() {
        match n {
            TreeNode::Leaf { metrics, .. } => total += metrics.get(metric),
            TreeNode::Internal { children, .. } => stack.extend(children.iter()),
        }
    }
    total
}

/// Children paired with their original index, ordered by descending
/// aggregate of `metric`. Ties keep encounter order.
pub fn children_by_value(node: &TreeNode, metric: Metric) -> Vec<(usize, &TreeNode, f64)> {
    let mut ranked: Vec<(usize, &TreeNode, f64)> = node
        .children()
        .iter()
        .enumerate()
        .map(|(i, c)| (i, c, aggregate(c, metric)))
        .collect();
    ranked.sort_by(|a, b| b.2.total_cmp(&a.2));
    ranked
}
