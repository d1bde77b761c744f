use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::grocery_item::model::{GroceryItem, NewGroceryItem};
use business::domain::grocery_item::repository::GroceryItemRepository;

struct Ledger {
    items: BTreeMap<u64, GroceryItem>,
    next_id: u64,
}

/// Process-local grocery item store. Ids start at 1 and are never handed out twice,
/// even after the item holding them is removed.
pub struct GroceryItemRepositoryInMemory {
    ledger: RwLock<Ledger>,
}

impl GroceryItemRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            ledger: RwLock::new(Ledger {
                items: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for GroceryItemRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GroceryItemRepository for GroceryItemRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<GroceryItem>, RepositoryError> {
        let ledger = self.ledger.read().await;
        Ok(ledger.items.values().cloned().collect())
    }

    async fn insert(&self, item: NewGroceryItem) -> Result<GroceryItem, RepositoryError> {
        let mut ledger = self.ledger.write().await;
        let id = ledger.next_id;
        ledger.next_id = id.checked_add(1).ok_or(RepositoryError::Persistence)?;

        let stored = item.with_id(id);
        ledger.items.insert(id, stored.clone());
        Ok(stored)
    }

    async fn toggle_completed(&self, id: u64) -> Result<GroceryItem, RepositoryError> {
        let mut ledger = self.ledger.write().await;
        let slot = ledger.items.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        *slot = slot.clone().toggled();
        Ok(slot.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), RepositoryError> {
        let mut ledger = self.ledger.write().await;
        ledger
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
