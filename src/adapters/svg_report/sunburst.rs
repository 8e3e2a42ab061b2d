//! Sunburst arcs as SVG paths.

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use super::escape_xml;
use crate::domain::hierarchy::NodePath;
use crate::domain::palette::Palette;
use crate::domain::partition::Arc;

/// Opacity of arcs outside the selected ancestor chain.
pub const FADED_OPACITY: f64 = 0.3;

const FULL_TURN_EPSILON: f64 = 1e-9;

fn point(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// Path data for an annular sector between angles `x0..x1` and radii
/// `r0..r1`. A full turn becomes a ring drawn for the even-odd fill rule.
pub fn arc_path(x0: f64, x1: f64, r0: f64, r1: f64) -> String {
    let span = x1 - x0;

    if span >= TAU - FULL_TURN_EPSILON {
        let mut d = format!(
            "M0,{:.3}A{r1:.3},{r1:.3},0,1,1,0,{r1:.3}A{r1:.3},{r1:.3},0,1,1,0,{:.3}",
            -r1, -r1
        );
        if r0 > 0.0 {
            let _ = write!(
                d,
                "M0,{:.3}A{r0:.3},{r0:.3},0,1,0,0,{r0:.3}A{r0:.3},{r0:.3},0,1,0,0,{:.3}",
                -r0, -r0
            );
        }
        d.push('Z');
        return d;
    }

    let large = if span > PI { 1 } else { 0 };
    let (ox0, oy0) = point(r1, x0);
    let (ox1, oy1) = point(r1, x1);
    let mut d = format!("M{ox0:.3},{oy0:.3}A{r1:.3},{r1:.3},0,{large},1,{ox1:.3},{oy1:.3}");
    if r0 > 0.0 {
        let (ix1, iy1) = point(r0, x1);
        let (ix0, iy0) = point(r0, x0);
        let _ = write!(
            d,
            "L{ix1:.3},{iy1:.3}A{r0:.3},{r0:.3},0,{large},0,{ix0:.3},{iy0:.3}"
        );
    } else {
        d.push_str("L0,0");
    }
    d.push('Z');
    d
}

/// Render every arc except the root. When `highlight` is given, arcs on the
/// path from the root to that node stay opaque and the rest are faded.
pub fn render_arcs(arcs: &[Arc<'_>], palette: &Palette, highlight: Option<&NodePath>) -> String {
    let mut out = String::new();
    for arc in arcs.iter().filter(|a| a.depth > 0) {
        let opacity = match highlight {
            Some(selected) if !arc.path.is_prefix_of(selected) => FADED_OPACITY,
            _ => 1.0,
        };
        let _ = writeln!(
            out,
            r#"<path d="{}" fill-rule="evenodd" style="fill:{};opacity:{}"><title>{}</title></path>"#,
            arc_path(arc.x0, arc.x1, arc.inner_radius(), arc.outer_radius()),
            palette.color_or_fallback(arc.name()),
            opacity,
            escape_xml(arc.name()),
        );
    }
    out
}
