mod investment;

pub use investment::{CreateInvestment, Investment, InvestmentWithProjection, NewInvestment, UpdateInvestment};
