//! Breadcrumb trail, legend and centre explanation.

use std::fmt::Write;

use super::escape_xml;
use crate::domain::chart_config::{BreadcrumbDims, LegendDims};
use crate::domain::palette::{LegendEntry, Palette};
use crate::domain::selection::SelectionSummary;

/// Polygon points of one breadcrumb. Every crumb after the first has a
/// notch on its left edge.
pub fn breadcrumb_points(dims: &BreadcrumbDims, index: usize) -> String {
    let w = dims.width;
    let h = dims.height;
    let t = dims.tip;
    let mut points = vec![
        "0,0".to_string(),
        format!("{w},0"),
        format!("{},{}", w + t, h / 2.0),
        format!("{w},{h}"),
        format!("0,{h}"),
    ];
    if index > 0 {
        points.push(format!("{t},{}", h / 2.0));
    }
    points.join(" ")
}

pub fn render_trail(summary: &SelectionSummary<'_>, dims: &BreadcrumbDims, palette: &Palette) -> String {
    let step = dims.width + dims.spacing;
    let mut out = String::new();

    for (i, node) in summary.ancestor_chain.iter().enumerate() {
        let _ = writeln!(
            out,
            r#"<g transform="translate({}, 0)"><polygon points="{}" style="fill:{}"/><text x="{}" y="{}" dy="0.35em" text-anchor="middle">{}</text></g>"#,
            i as f64 * step,
            breadcrumb_points(dims, i),
            palette.color_or_fallback(node.name()),
            (dims.width + dims.tip) / 2.0,
            dims.height / 2.0,
            escape_xml(node.name()),
        );
    }

    let _ = writeln!(
        out,
        r#"<text id="endlabel" x="{}" y="{}" dy="0.35em" text-anchor="middle" style="fill:#000">{}</text>"#,
        (summary.ancestor_chain.len() as f64 + 0.5) * step,
        dims.height / 2.0,
        escape_xml(&summary.end_label()),
    );
    out
}

pub fn render_legend(entries: &[LegendEntry], dims: &LegendDims) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            r#"<g transform="translate(0,{})"><rect rx="{r}" ry="{r}" width="{}" height="{}" style="fill:{}"/><text x="{}" y="{}" dy="0.35em" text-anchor="middle">{}</text></g>"#,
            i as f64 * (dims.height + dims.spacing),
            dims.width,
            dims.height,
            entry.color,
            dims.width / 2.0,
            dims.height / 2.0,
            escape_xml(&entry.label),
            r = dims.radius,
        );
    }
    out
}

/// Text shown in the hole of the sunburst while a node is selected.
pub fn render_explanation(summary: &SelectionSummary<'_>) -> String {
    let lines = [
        ("percentage", summary.deal_share.as_str(), "of pitches got a deal"),
        ("dealAmount", summary.avg_deal_amount.as_str(), "average deal amount"),
        ("dealEquity", summary.avg_equity.as_str(), "average equity"),
        ("dealValuation", summary.avg_valuation.as_str(), "average valuation"),
    ];
    let mut out = String::from(r#"<g id="explanation" text-anchor="middle">"#);
    out.push('\n');
    for (i, (id, value, caption)) in lines.iter().enumerate() {
        let y = (i as f64 - 1.5) * 36.0;
        let _ = writeln!(
            out,
            r#"<text id="{id}" y="{y}" style="font-size:1.4em">{}</text><text y="{}" style="font-size:0.7em">{caption}</text>"#,
            escape_xml(value),
            y + 14.0,
        );
    }
    out.push_str("</g>\n");
    out
}
