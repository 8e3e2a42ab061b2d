//! Headerless CSV record source.
//!
//! Rows are `path,size,deals,amount,equity,valuation`. Short rows are
//! accepted; missing cells come through empty.

use crate::domain::error::SeqburstError;
use crate::domain::record::RawRecord;
use crate::ports::record_port::RecordPort;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    path: PathBuf,
}

impl CsvAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Parse CSV text directly. `source` names the input in errors.
    pub fn parse_str(content: &str, source: &str) -> Result<Vec<RawRecord>, SeqburstError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut records = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| SeqburstError::Csv {
                file: source.to_string(),
                reason: e.to_string(),
            })?;
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            records.push(RawRecord::from_cells(record.iter()));
        }
        Ok(records)
    }
}

impl RecordPort for CsvAdapter {
    fn load_records(&self) -> Result<Vec<RawRecord>, SeqburstError> {
        let content = fs::read_to_string(&self.path).map_err(|e| SeqburstError::Csv {
            file: self.describe(),
            reason: format!("failed to read: {e}"),
        })?;
        let records = Self::parse_str(&content, &self.describe())?;
        tracing::debug!(file = %self.path.display(), rows = records.len(), "read csv");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
