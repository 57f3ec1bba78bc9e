//! Movement log: append-only record of scanner-posted stock movements.

use std::sync::{Arc, RwLock};

use stockdash_core::ProductCode;
use stockdash_inventory::StockMovement;

use crate::repository::StoreError;

/// Append-only movement history.
pub trait MovementLog: Send + Sync {
    fn append(&self, movement: StockMovement) -> Result<(), StoreError>;

    /// Most recent movements for one product, newest first.
    fn history(
        &self,
        code: &ProductCode,
        limit: usize,
    ) -> Result<Vec<StockMovement>, StoreError>;
}

impl<L> MovementLog for Arc<L>
where
    L: MovementLog + ?Sized,
{
    fn append(&self, movement: StockMovement) -> Result<(), StoreError> {
        (**self).append(movement)
    }

    fn history(
        &self,
        code: &ProductCode,
        limit: usize,
    ) -> Result<Vec<StockMovement>, StoreError> {
        (**self).history(code, limit)
    }
}

/// In-memory log. Movements arrive in wall-clock order from a single
/// process, so insertion order doubles as chronological order.
#[derive(Debug, Default)]
pub struct InMemoryMovementLog {
    inner: RwLock<Vec<StockMovement>>,
}

impl InMemoryMovementLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MovementLog for InMemoryMovementLog {
    fn append(&self, movement: StockMovement) -> Result<(), StoreError> {
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        guard.push(movement);
        Ok(())
    }

    fn history(
        &self,
        code: &ProductCode,
        limit: usize,
    ) -> Result<Vec<StockMovement>, StoreError> {
        let guard = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard
            .iter()
            .rev()
            .filter(|m| &m.product_code == code)
            .take(limit)
            .cloned()
            .collect())
    }
}
