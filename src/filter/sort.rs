use crate::models::PropertyRecord;
use serde::{Deserialize, Serialize};

/// Tri-state id sort toggled by a single control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Original fetch order
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortOrder {
    /// Unsorted → Ascending → Descending → Unsorted
    pub fn advance(self) -> Self {
        match self {
            SortOrder::Unsorted => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Unsorted,
        }
    }
}

/// Stable sort by id, compared as strings
pub fn sort_by_id(records: &mut [&PropertyRecord], order: SortOrder) {
    match order {
        SortOrder::Unsorted => {}
        SortOrder::Ascending => records.sort_by(|a, b| a.id.cmp(&b.id)),
        SortOrder::Descending => records.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}
