pub mod investment_queries;
pub mod user_queries;
