//! Radial partition layout.
//!
//! The angle axis spans `[0, 2π]` and the radial axis spans `[0, r²]`, so
//! rings are equal in area rather than width. Every depth gets a band of the
//! same height; siblings split their parent's angle in proportion to their
//! `size` aggregate.

use std::f64::consts::TAU;

use super::aggregate::{aggregate, children_by_value};
use super::chart_config::ChartConfig;
use super::hierarchy::{Hierarchy, NodePath, TreeNode};
use super::record::Metric;

/// Geometric extent of one node.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc<'a> {
    pub path: NodePath,
    pub node: &'a TreeNode,
    pub depth: usize,
    /// Start and end angle in radians, clockwise from 12 o'clock.
    pub x0: f64,
    pub x1: f64,
    /// Inner and outer squared radius.
    pub y0: f64,
    pub y1: f64,
    pub value: f64,
}

impl Arc<'_> {
    pub fn name(&self) -> &str {
        self.node.name()
    }

    pub fn inner_radius(&self) -> f64 {
        self.y0.sqrt()
    }

    pub fn outer_radius(&self) -> f64 {
        self.y1.sqrt()
    }
}

/// Lay out every node whose angular extent exceeds `config.min_angle`.
/// The root is included at depth 0 and always spans the full circle.
pub fn partition<'a>(hierarchy: &'a Hierarchy, config: &ChartConfig) -> Vec<Arc<'a>> {
    let root = hierarchy.root();
    let radius = config.radius();
    let band = radius * radius / (root.height() + 1) as f64;

    let mut arcs = Vec::new();
    let mut stack = vec![(NodePath::root(), root, 0.0, TAU, aggregate(root, Metric::Size))];

    while let Some((path, node, x0, x1, value)) = stack.pop() {
        let depth = path.depth();
        if depth > 0 && x1 - x0 <= config.min_angle {
            continue;
        }

        let ordered: Vec<(usize, &TreeNode, f64)> = if config.sort_by_value {
            children_by_value(node, Metric::Size)
        } else {
            node.children()
                .iter()
                .enumerate()
                .map(|(i, c)| (i, c, aggregate(c, Metric::Size)))
                .collect()
        };

        let scale = if value > 0.0 { (x1 - x0) / value } else { 0.0 };
        let mut start = x0;
        let mut placed = Vec::with_capacity(ordered.len());
        for (index, child, child_value) in ordered {
            let end = start + child_value * scale;
            placed.push((path.child(index), child, start, end, child_value));
            start = end;
        }
        stack.extend(placed.into_iter().rev());

        arcs.push(Arc {
            path,
            node,
            depth,
            x0,
            x1,
            y0: depth as f64 * band,
            y1: (depth + 1) as f64 * band,
            value,
        });
    }

    arcs
}
