//! Stock-status classification.

use serde::{Deserialize, Serialize};

/// Stock level of a product relative to its reorder threshold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Critical,
    Low,
    Normal,
}

impl StockStatus {
    /// English label, as printed in the CSV export's `Status` column.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Critical => "Critical",
            StockStatus::Low => "Low",
            StockStatus::Normal => "Normal",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify stock on hand against the reorder threshold.
///
/// Business rule (tie-breaks are intentional and confirmed with
/// stakeholders, do not "fix" them):
/// - `current <= minimum` is `Critical` (at-or-below the threshold),
/// - `current <= 1.5 * minimum` is `Low`,
/// - anything above is `Normal`.
///
/// With `minimum == 0` only an empty shelf is `Critical`; a single unit
/// already classifies as `Normal` because it exceeds `1.5 * 0`.
pub fn classify_stock(current_stock: u32, minimum_stock: u32) -> StockStatus {
    if current_stock <= minimum_stock {
        return StockStatus::Critical;
    }
    // 1.5x threshold in integer arithmetic: c <= 1.5 * m  <=>  2c <= 3m.
    if u64::from(current_stock) * 2 <= u64::from(minimum_stock) * 3 {
        return StockStatus::Low;
    }
    StockStatus::Normal
}
