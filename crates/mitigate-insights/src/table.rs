//! Result tables returned by the insight queries.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// A typed output row rendered as cells aligned with [`InsightRow::COLUMNS`].
pub trait InsightRow {
    /// Column headers, in cell order.
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<Value>;
}

/// The dimension a query can be narrowed by, with every value available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionFilter {
    /// Query parameter name (`state` or `vaccine`).
    pub name: &'static str,
    /// Sorted distinct values across the whole collection, whether or not they
    /// appear in the rows.
    pub options: Vec<String>,
    /// The value the rows were filtered by, if any.
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightTable<R: InsightRow> {
    pub title: &'static str,
    pub columns: &'static [&'static str],
    #[serde(serialize_with = "serialize_rows")]
    pub rows: Vec<R>,
    pub filter: DimensionFilter,
}

impl<R: InsightRow> InsightTable<R> {
    #[must_use]
    pub const fn new(title: &'static str, rows: Vec<R>, filter: DimensionFilter) -> Self {
        Self {
            title,
            columns: R::COLUMNS,
            rows,
            filter,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn serialize_rows<R: InsightRow, S: Serializer>(rows: &[R], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(rows.iter().map(InsightRow::cells))
}
