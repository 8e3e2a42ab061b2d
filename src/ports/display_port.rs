//! Display sink port trait.

use crate::domain::error::SeqburstError;
use crate::domain::selection::SelectionSummary;

/// Receives selection updates.
pub trait DisplayPort {
    fn show(&mut self, summary: &SelectionSummary<'_>) -> Result<(), SeqburstError>;

    /// The selection was dropped.
    fn clear(&mut self) -> Result<(), SeqburstError>;
}
