use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::{investment_queries, user_queries};
use crate::models::{Investment, NewInvestment, UpdateInvestment};

pub mod memory;

pub use memory::InMemoryInvestmentStore;

/// Persistence operations the investment repository depends on.
///
/// `update` and `delete` return `None` when no row matched the id; the caller
/// decides how that surfaces.
#[async_trait]
pub trait InvestmentStore: Send + Sync {
    async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Investment>, sqlx::Error>;

    async fn find_one(&self, id: i32) -> Result<Option<Investment>, sqlx::Error>;

    async fn owner_exists(&self, owner_id: i32) -> Result<bool, sqlx::Error>;

    async fn insert(&self, input: NewInvestment) -> Result<Investment, sqlx::Error>;

    async fn update(
        &self,
        id: i32,
        input: UpdateInvestment,
    ) -> Result<Option<Investment>, sqlx::Error>;

    async fn delete(&self, id: i32) -> Result<Option<Investment>, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgInvestmentStore {
    pool: PgPool,
}

impl PgInvestmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvestmentStore for PgInvestmentStore {
    async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Investment>, sqlx::Error> {
        investment_queries::fetch_by_user(&self.pool, owner_id).await
    }

    async fn find_one(&self, id: i32) -> Result<Option<Investment>, sqlx::Error> {
        investment_queries::fetch_one(&self.pool, id).await
    }

    async fn owner_exists(&self, owner_id: i32) -> Result<bool, sqlx::Error> {
        user_queries::exists(&self.pool, owner_id).await
    }

    async fn insert(&self, input: NewInvestment) -> Result<Investment, sqlx::Error> {
        investment_queries::insert(&self.pool, input).await
    }

    async fn update(
        &self,
        id: i32,
        input: UpdateInvestment,
    ) -> Result<Option<Investment>, sqlx::Error> {
        investment_queries::update(&self.pool, id, input).await
    }

    async fn delete(&self, id: i32) -> Result<Option<Investment>, sqlx::Error> {
        investment_queries::delete(&self.pool, id).await
    }
}
