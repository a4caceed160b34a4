pub mod investment_repository;
pub mod projection;
