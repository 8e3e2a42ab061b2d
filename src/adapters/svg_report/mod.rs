//! SVG sunburst report.
//!
//! Reads an SVG template (the built-in default or a custom file via
//! `[report] template_path`), resolves every `{{PLACEHOLDER}}` using the
//! helpers in `sunburst` and `trail`, and writes the page. As a display sink
//! it rewrites the file on every selection change.

pub mod default_template;
pub mod sunburst;
pub mod trail;

use std::fs;
use std::path::PathBuf;

use crate::domain::chart_config::ChartConfig;
use crate::domain::error::SeqburstError;
use crate::domain::hierarchy::Hierarchy;
use crate::domain::palette::Palette;
use crate::domain::partition::{partition, Arc};
use crate::domain::selection::SelectionSummary;
use crate::ports::display_port::DisplayPort;

/// Gap between the breadcrumb row and the chart.
const TRAIL_MARGIN: f64 = 20.0;
const LEGEND_MARGIN: f64 = 20.0;

/// Context for resolving template placeholders.
pub struct ReportContext<'a> {
    pub config: &'a ChartConfig,
    pub palette: &'a Palette,
    pub arcs: &'a [Arc<'a>],
    pub selection: Option<&'a SelectionSummary<'a>>,
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Resolve all `{{PLACEHOLDER}}`s in `template`.
pub fn resolve(template: &str, ctx: &ReportContext) -> String {
    let config = ctx.config;
    let trail_height = config.breadcrumb.height + TRAIL_MARGIN;
    let legend_x = config.width + LEGEND_MARGIN;

    let (trail, explanation) = match ctx.selection {
        Some(summary) => (
            trail::render_trail(summary, &config.breadcrumb, ctx.palette),
            trail::render_explanation(summary),
        ),
        None => (String::new(), String::new()),
    };
    let highlight = ctx.selection.map(|s| &s.path);

    let replacements = [
        ("{{PAGE_WIDTH}}", (legend_x + config.legend.width).to_string()),
        ("{{PAGE_HEIGHT}}", (trail_height + config.height).to_string()),
        ("{{TRAIL_HEIGHT}}", trail_height.to_string()),
        ("{{CENTER_X}}", (config.width / 2.0).to_string()),
        ("{{CENTER_Y}}", (trail_height + config.height / 2.0).to_string()),
        ("{{RADIUS}}", config.radius().to_string()),
        ("{{LEGEND_X}}", legend_x.to_string()),
        (
            "{{TRAIL_VISIBILITY}}",
            if ctx.selection.is_some() { "visible" } else { "hidden" }.to_string(),
        ),
        ("{{TRAIL}}", trail),
        ("{{SUNBURST}}", sunburst::render_arcs(ctx.arcs, ctx.palette, highlight)),
        ("{{EXPLANATION}}", explanation),
        ("{{LEGEND}}", trail::render_legend(ctx.palette.legend(), &config.legend)),
    ];

    let mut output = template.to_string();
    for (marker, value) in &replacements {
        output = output.replace(marker, value);
    }
    output
}

/// Display sink that renders the whole chart to an SVG file.
pub struct SvgReport<'a> {
    hierarchy: &'a Hierarchy,
    config: ChartConfig,
    palette: Palette,
    template: String,
    output: PathBuf,
}

impl<'a> SvgReport<'a> {
    pub fn new(
        hierarchy: &'a Hierarchy,
        config: ChartConfig,
        palette: Palette,
        template: Option<String>,
        output: PathBuf,
    ) -> Self {
        Self {
            hierarchy,
            config,
            palette,
            template: template.unwrap_or_else(|| default_template::template().to_string()),
            output,
        }
    }

    pub fn output(&self) -> &PathBuf {
        &self.output
    }

    pub fn render(&self, selection: Option<&SelectionSummary<'_>>) -> String {
        let arcs = partition(self.hierarchy, &self.config);
        let ctx = ReportContext {
            config: &self.config,
            palette: &self.palette,
            arcs: &arcs,
            selection,
        };
        resolve(&self.template, &ctx)
    }

    fn write(&self, selection: Option<&SelectionSummary<'_>>) -> Result<(), SeqburstError> {
        fs::write(&self.output, self.render(selection))?;
        tracing::debug!(file = %self.output.display(), "wrote svg report");
        Ok(())
    }
}

impl DisplayPort for SvgReport<'_> {
    fn show(&mut self, summary: &SelectionSummary<'_>) -> Result<(), SeqburstError> {
        self.write(Some(summary))
    }

    fn clear(&mut self) -> Result<(), SeqburstError> {
        self.write(None)
    }
}
