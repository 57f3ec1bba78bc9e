//! Stock movements posted by the mobile scanning client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockdash_core::{DomainError, DomainResult, MovementId, ProductCode};

/// Kind of stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Goods received; adds to stock.
    Inbound,
    /// Goods issued; subtracts from stock.
    Outbound,
    /// Absolute restatement after a physical count; replaces stock.
    Adjustment,
}

/// One recorded movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: MovementId,
    pub product_code: ProductCode,
    pub kind: MovementKind,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub recorded_by: String,
    pub occurred_at: DateTime<Utc>,
}

/// Apply a movement to a stock level, returning the new level.
///
/// Quantity must be positive for `Inbound`/`Outbound` (a no-op movement is
/// a client bug, reject it); an `Adjustment` may restate to zero. Stock can
/// never go negative and never silently wraps.
pub fn apply_movement(
    current_stock: u32,
    kind: MovementKind,
    quantity: u32,
) -> DomainResult<u32> {
    match kind {
        MovementKind::Inbound | MovementKind::Outbound if quantity == 0 => {
            Err(DomainError::validation("quantity must be positive"))
        }
        MovementKind::Inbound => current_stock
            .checked_add(quantity)
            .ok_or_else(|| DomainError::invariant("stock overflow")),
        MovementKind::Outbound => current_stock
            .checked_sub(quantity)
            .ok_or_else(|| DomainError::invariant("stock cannot go negative")),
        MovementKind::Adjustment => Ok(quantity),
    }
}

/// Outcome of comparing a physical count against the system stock level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountOutcome {
    pub system_stock: u32,
    pub counted_stock: u32,
    /// `counted - system`; positive means the shelf holds more than booked.
    pub difference: i64,
    /// Movement that would reconcile the book stock, `None` when they match.
    pub adjustment: Option<MovementKind>,
}

/// Compare a physical count with the booked stock level.
pub fn count_difference(system_stock: u32, counted_stock: u32) -> CountOutcome {
    let difference = i64::from(counted_stock) - i64::from(system_stock);
    let adjustment = match difference {
        0 => None,
        d if d > 0 => Some(MovementKind::Inbound),
        _ => Some(MovementKind::Outbound),
    };
    CountOutcome {
        system_stock,
        counted_stock,
        difference,
        adjustment,
    }
}
