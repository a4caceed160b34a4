use crate::services::investment_repository::InvestmentRepository;

#[derive(Clone)]
pub struct AppState {
    pub investments: InvestmentRepository,
}
