use std::sync::Arc;

use tracing::debug;

use crate::errors::AppError;
use crate::models::{CreateInvestment, Investment, InvestmentWithProjection, UpdateInvestment};
use crate::services::projection::ProjectionSettings;
use crate::store::InvestmentStore;

/// Data access for investment records.
///
/// Each method performs one storage call (two for `create`) and propagates
/// storage failures unchanged. Amounts and rates are not range-checked:
/// negative values are stored as given.
#[derive(Clone)]
pub struct InvestmentRepository {
    store: Arc<dyn InvestmentStore>,
    projection: ProjectionSettings,
}

impl InvestmentRepository {
    pub fn new(store: Arc<dyn InvestmentStore>, projection: ProjectionSettings) -> Self {
        Self { store, projection }
    }

    /// All investments owned by `owner_id`, each with its projected future value.
    /// Order is whatever storage returns.
    pub async fn list_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Vec<InvestmentWithProjection>, AppError> {
        let investments = self.store.find_by_owner(owner_id).await?;
        debug!("Loaded {} investments for user {}", investments.len(), owner_id);

        Ok(investments
            .into_iter()
            .map(|investment| {
                let future_value = self
                    .projection
                    .project(investment.amount, investment.interest_rate);
                InvestmentWithProjection { investment, future_value }
            })
            .collect())
    }

    /// Not scoped to an owner: any existing id is returned.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Investment>, AppError> {
        Ok(self.store.find_one(id).await?)
    }

    pub async fn create(&self, input: CreateInvestment) -> Result<Investment, AppError> {
        let new_investment = input.into_new().map_err(AppError::Validation)?;

        if !self.store.owner_exists(new_investment.user_id).await? {
            return Err(AppError::NotFound(format!(
                "User {} does not exist",
                new_investment.user_id
            )));
        }

        let investment = self.store.insert(new_investment).await?;
        debug!("Created investment {} for user {}", investment.id, investment.user_id);
        Ok(investment)
    }

    /// Overwrites name, amount, rate and period. Ownership never changes.
    pub async fn update(&self, id: i32, input: UpdateInvestment) -> Result<Investment, AppError> {
        self.store
            .update(id, input)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Investment {} not found", id)))
    }

    /// Hard delete. Returns the record as it was before removal.
    pub async fn delete(&self, id: i32) -> Result<Investment, AppError> {
        self.store
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Investment {} not found", id)))
    }
}
