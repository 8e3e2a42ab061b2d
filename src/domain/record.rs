//! Sequence records and the five metrics carried by each leaf.

/// Selector for one of the five numeric metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Size,
    Deals,
    Amount,
    Equity,
    Valuation,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Size,
        Metric::Deals,
        Metric::Amount,
        Metric::Equity,
        Metric::Valuation,
    ];
}

/// Metric values contributed by a single record.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub size: f64,
    pub deals: f64,
    pub amount: f64,
    pub equity: f64,
    pub valuation: f64,
}

impl Metrics {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Size => self.size,
            Metric::Deals => self.deals,
            Metric::Amount => self.amount,
            Metric::Equity => self.equity,
            Metric::Valuation => self.valuation,
        }
    }
}

/// One row as delivered by a record source, cells still unparsed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecord {
    pub path: String,
    pub size: String,
    pub deals: String,
    pub amount: String,
    pub equity: String,
    pub valuation: String,
}

impl RawRecord {
    /// Build from positional cells; missing trailing cells become empty.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut it = cells.into_iter().map(Into::<String>::into);
        let mut next = || it.next().unwrap_or_default();
        RawRecord {
            path: next(),
            size: next(),
            deals: next(),
            amount: next(),
            equity: next(),
            valuation: next(),
        }
    }
}

/// A typed record ready for the hierarchy builder.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRecord {
    pub path: String,
    pub metrics: Metrics,
}

impl SequenceRecord {
    pub fn new(path: impl Into<String>, metrics: Metrics) -> Self {
        Self {
            path: path.into(),
            metrics,
        }
    }

    /// Split the path into step names on `delimiter`.
    pub fn steps(&self, delimiter: char) -> impl Iterator<Item = &str> {
        self.path.split(delimiter)
    }
}

/// Parse a raw row. Returns `None` when `size` is not a number (header or
/// malformed row); secondary metrics fall back to zero.
pub fn parse_record(raw: &RawRecord, row: usize) -> Option<SequenceRecord> {
    let Some(size) = parse_number(&raw.size) else {
        tracing::debug!(row, size = %raw.size, "skipping row with non-numeric size");
        return None;
    };

    let secondary = |column: &str, cell: &str| -> f64 {
        if cell.trim().is_empty() {
            return 0.0;
        }
        parse_number(cell).unwrap_or_else(|| {
            tracing::warn!(row, column, cell, "non-numeric metric treated as zero");
            0.0
        })
    };

    Some(SequenceRecord {
        path: raw.path.clone(),
        metrics: Metrics {
            size,
            deals: secondary("deals", &raw.deals),
            amount: secondary("amount", &raw.amount),
            equity: secondary("equity", &raw.equity),
            valuation: secondary("valuation", &raw.valuation),
        },
    })
}

/// Parse every row, dropping the ones `parse_record` rejects.
pub fn parse_records(raw: &[RawRecord]) -> Vec<SequenceRecord> {
    raw.iter()
        .enumerate()
        .filter_map(|(row, r)| parse_record(r, row))
        .collect()
}

fn parse_number(cell: &str) -> Option<f64> {
    let value: f64 = cell.trim().parse().ok()?;
    if value.is_nan() { None } else { Some(value) }
}
