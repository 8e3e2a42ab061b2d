//! Record source port trait.

use crate::domain::error::SeqburstError;
use crate::domain::record::RawRecord;

pub trait RecordPort {
    /// Every row in source order, unparsed.
    fn load_records(&self) -> Result<Vec<RawRecord>, SeqburstError>;

    /// Human-readable name of the source, used in messages.
    fn describe(&self) -> String;
}
