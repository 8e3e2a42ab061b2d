//! Selection controller: statistics and ancestor chain for a chosen node.

use super::aggregate::aggregate;
use super::error::SeqburstError;
use super::format::{currency, percentage, share_label, whole_ratio};
use super::hierarchy::{Hierarchy, NodePath, TreeNode};
use super::record::Metric;
use crate::ports::display_port::DisplayPort;

/// Raw numbers behind a [`SelectionSummary`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionStats {
    pub size: f64,
    pub deals: f64,
    pub amount: f64,
    pub equity: f64,
    pub valuation: f64,
    /// Percentage of the grand total `size`, unclamped.
    pub total_share: f64,
    /// Percentage of this node's `size` that became deals.
    pub deal_share: f64,
    pub avg_deal_amount: i64,
    /// Average equity per deal, in percent; zero when there are no deals.
    pub avg_equity: f64,
    pub avg_valuation: i64,
}

impl SelectionStats {
    pub fn compute(node: &TreeNode, grand_total_size: f64) -> Self {
        let size = aggregate(node, Metric::Size);
        let deals = aggregate(node, Metric::Deals);
        let amount = aggregate(node, Metric::Amount);
        let equity = aggregate(node, Metric::Equity);
        let valuation = aggregate(node, Metric::Valuation);

        let avg_equity = if deals == 0.0 {
            0.0
        } else {
            100.0 * equity / deals
        };

        SelectionStats {
            size,
            deals,
            amount,
            equity,
            valuation,
            total_share: 100.0 * size / grand_total_size,
            deal_share: 100.0 * deals / size,
            avg_deal_amount: whole_ratio(amount, deals),
            avg_equity,
            avg_valuation: whole_ratio(valuation, deals),
        }
    }
}

/// What the display sink receives for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSummary<'a> {
    pub path: NodePath,
    /// From the root's child down to the selected node, inclusive.
    pub ancestor_chain: Vec<&'a TreeNode>,
    pub total_share: String,
    pub deal_share: String,
    pub avg_deal_amount: String,
    pub avg_equity: String,
    pub avg_valuation: String,
    pub stats: SelectionStats,
}

impl SelectionSummary<'_> {
    pub fn names(&self) -> Vec<&str> {
        self.ancestor_chain.iter().map(|n| n.name()).collect()
    }

    /// Trailing breadcrumb label.
    pub fn end_label(&self) -> String {
        format!("{} of total pitches", self.total_share)
    }
}

/// Summarise the node at `path`.
pub fn select<'a>(
    hierarchy: &'a Hierarchy,
    path: &NodePath,
) -> Result<SelectionSummary<'a>, SeqburstError> {
    let unknown = || SeqburstError::UnknownPath {
        path: path.to_string(),
    };
    let node = hierarchy.node(path).ok_or_else(unknown)?;
    let ancestor_chain = hierarchy.chain(path).ok_or_else(unknown)?;
    let stats = SelectionStats::compute(node, hierarchy.grand_total_size());

    Ok(SelectionSummary {
        path: path.clone(),
        ancestor_chain,
        total_share: share_label(stats.total_share),
        deal_share: percentage(stats.deal_share),
        avg_deal_amount: currency(stats.avg_deal_amount),
        avg_equity: percentage_or_zero(stats.avg_equity, stats.deals),
        avg_valuation: currency(stats.avg_valuation),
        stats,
    })
}

/// Resolve a delimiter-joined name path and summarise it.
pub fn select_by_names<'a>(
    hierarchy: &'a Hierarchy,
    names: &str,
) -> Result<SelectionSummary<'a>, SeqburstError> {
    let path = hierarchy
        .find(names)
        .ok_or_else(|| SeqburstError::UnknownPath {
            path: names.to_string(),
        })?;
    select(hierarchy, &path)
}

fn percentage_or_zero(value: f64, deals: f64) -> String {
    if deals == 0.0 {
        "0%".to_string()
    } else {
        percentage(value)
    }
}

/// Tracks the current selection and forwards changes to a display sink.
pub struct Selection<'a, D: DisplayPort> {
    hierarchy: &'a Hierarchy,
    display: D,
    current: Option<SelectionSummary<'a>>,
}

impl<'a, D: DisplayPort> Selection<'a, D> {
    pub fn new(hierarchy: &'a Hierarchy, display: D) -> Self {
        Self {
            hierarchy,
            display,
            current: None,
        }
    }

    /// Select the node at `path` and push its summary to the display.
    pub fn enter(&mut self, path: &NodePath) -> Result<&SelectionSummary<'a>, SeqburstError> {
        let summary = select(self.hierarchy, path)?;
        tracing::debug!(path = %summary.path, share = %summary.total_share, "selected");
        self.display.show(&summary)?;
        Ok(self.current.insert(summary))
    }

    /// Drop the selection and tell the display to reset.
    pub fn leave(&mut self) -> Result<(), SeqburstError> {
        self.current = None;
        self.display.clear()
    }

    pub fn current(&self) -> Option<&SelectionSummary<'a>> {
        self.current.as_ref()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }
}
