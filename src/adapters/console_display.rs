//! Plain-text display sink.

use std::io::Write;

use crate::domain::error::SeqburstError;
use crate::domain::selection::SelectionSummary;
use crate::ports::display_port::DisplayPort;

pub const TRAIL_SEPARATOR: &str = " > ";

/// Writes the breadcrumb trail and the four statistics to `out`.
pub struct ConsoleDisplay<W: Write> {
    out: W,
    visible: bool,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `Male > Automotive    12.5% of total pitches`
pub fn format_trail(summary: &SelectionSummary<'_>) -> String {
    let trail = summary.names().join(TRAIL_SEPARATOR);
    if trail.is_empty() {
        summary.end_label()
    } else {
        format!("{trail}    {}", summary.end_label())
    }
}

impl<W: Write> DisplayPort for ConsoleDisplay<W> {
    fn show(&mut self, summary: &SelectionSummary<'_>) -> Result<(), SeqburstError> {
        writeln!(self.out, "{}", format_trail(summary))?;
        writeln!(self.out, "Deal rate:        {}", summary.deal_share)?;
        writeln!(self.out, "Avg deal amount:  {}", summary.avg_deal_amount)?;
        writeln!(self.out, "Avg equity:       {}", summary.avg_equity)?;
        writeln!(self.out, "Avg valuation:    {}", summary.avg_valuation)?;
        self.visible = true;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SeqburstError> {
        self.visible = false;
        self.out.flush()?;
        Ok(())
    }
}
