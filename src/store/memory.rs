use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::models::{Investment, NewInvestment, UpdateInvestment};
use super::InvestmentStore;

/// Process-local store used by tests and `STORAGE_BACKEND=memory`.
/// Records are kept in insertion order; ids start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryInvestmentStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    owners: HashSet<i32>,
    investments: Vec<Investment>,
    last_id: i32,
}

impl InMemoryInvestmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_owners(owner_ids: impl IntoIterator<Item = i32>) -> Self {
        let store = Self::new();
        for id in owner_ids {
            store.add_owner(id);
        }
        store
    }

    pub fn add_owner(&self, owner_id: i32) {
        self.inner.write().owners.insert(owner_id);
    }

    #[cfg(test)]
    pub fn investment_count(&self) -> usize {
        self.inner.read().investments.len()
    }
}

#[async_trait]
impl InvestmentStore for InMemoryInvestmentStore {
    async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Investment>, sqlx::Error> {
        let inner = self.inner.read();
        Ok(inner
            .investments
            .iter()
            .filter(|i| i.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_one(&self, id: i32) -> Result<Option<Investment>, sqlx::Error> {
        Ok(self.inner.read().investments.iter().find(|i| i.id == id).cloned())
    }

    async fn owner_exists(&self, owner_id: i32) -> Result<bool, sqlx::Error> {
        Ok(self.inner.read().owners.contains(&owner_id))
    }

    async fn insert(&self, input: NewInvestment) -> Result<Investment, sqlx::Error> {
        let mut inner = self.inner.write();
        inner.last_id += 1;
        let investment = Investment {
            id: inner.last_id,
            name: input.name,
            amount: input.amount,
            interest_rate: Some(input.interest_rate),
            investment_period: Some(input.investment_period),
            created_at: Utc::now(),
            user_id: input.user_id,
        };
        inner.investments.push(investment.clone());
        Ok(investment)
    }

    async fn update(
        &self,
        id: i32,
        input: UpdateInvestment,
    ) -> Result<Option<Investment>, sqlx::Error> {
        let mut inner = self.inner.write();
        let Some(existing) = inner.investments.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        existing.name = input.name;
        existing.amount = input.amount;
        if let Some(rate) = input.interest_rate {
            existing.interest_rate = rate;
        }
        if let Some(period) = input.investment_period {
            existing.investment_period = period;
        }
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: i32) -> Result<Option<Investment>, sqlx::Error> {
        let mut inner = self.inner.write();
        let position = inner.investments.iter().position(|i| i.id == id);
        Ok(position.map(|idx| inner.investments.remove(idx)))
    }
}
