#![allow(dead_code)]

use seqburst::domain::error::SeqburstError;
use seqburst::domain::record::RawRecord;
use seqburst::domain::selection::SelectionSummary;
use seqburst::ports::display_port::DisplayPort;
use seqburst::ports::record_port::RecordPort;

pub struct MockRecordPort {
    pub rows: Vec<RawRecord>,
    pub error: Option<String>,
}

impl MockRecordPort {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            error: None,
        }
    }

    pub fn with_row(mut self, cells: &[&str]) -> Self {
        self.rows.push(RawRecord::from_cells(cells.iter().copied()));
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl RecordPort for MockRecordPort {
    fn load_records(&self) -> Result<Vec<RawRecord>, SeqburstError> {
        if let Some(reason) = &self.error {
            return Err(SeqburstError::Csv {
                file: self.describe(),
                reason: reason.clone(),
            });
        }
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

/// What a display sink was told, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    Show {
        trail: Vec<String>,
        total_share: String,
    },
    Clear,
}

#[derive(Default)]
pub struct RecordingDisplay {
    pub events: Vec<DisplayEvent>,
}

impl DisplayPort for RecordingDisplay {
    fn show(&mut self, summary: &SelectionSummary<'_>) -> Result<(), SeqburstError> {
        self.events.push(DisplayEvent::Show {
            trail: summary.names().into_iter().map(String::from).collect(),
            total_share: summary.total_share.clone(),
        });
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SeqburstError> {
        self.events.push(DisplayEvent::Clear);
        Ok(())
    }
}

/// A small pitch dataset covering every step level.
pub fn pitch_port() -> MockRecordPort {
    MockRecordPort::new()
        .with_row(&["Sequence", "Count", "Deals", "Amount", "Equity", "Valuation"])
        .with_row(&["Male~Automotive~>$1M~0%-25%~<$1M", "10", "2", "500000", "10", "2000000"])
        .with_row(&["Male~Automotive~$0-$250k~25%-50%~<$1M", "6", "3", "300000", "90", "900000"])
        .with_row(&["Male~Travel~$0-$250k~0%-25%~$1M-$10M", "4", "0", "0", "0", "0"])
        .with_row(&["Female~Healthcare~$250k-$500k~25%-50%~$1M-$10M", "5", "1", "250000", "30", "800000"])
        .with_row(&["Mixed Team~Software / Tech~>$1M~0%-25%~>$20M", "N/A", "1", "1", "1", "1"])
}
