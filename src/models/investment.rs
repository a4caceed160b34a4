use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// A principal amount placed under an annual interest rate, owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: i32,
    pub name: String,
    pub amount: f64,
    /// Annual rate in percent.
    pub interest_rate: Option<f64>,
    pub investment_period: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub user_id: i32,
}

/// Listing row: the stored record plus its compound-interest projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentWithProjection {
    #[serde(flatten)]
    pub investment: Investment,
    pub future_value: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvestment {
    pub name: String,
    pub amount: f64,
    pub interest_rate: Option<f64>,
    pub investment_period: Option<i32>,
    pub user_id: i32,
}

/// Update payload. For rate and period, a missing key keeps the stored value
/// (`None`), while an explicit `null` clears it (`Some(None)`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvestment {
    pub name: String,
    pub amount: f64,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub investment_period: Option<Option<i32>>,
}

// Only called when the key is present, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// Validated insert payload. Only built once the required fields are known to be present.
#[derive(Debug, Clone)]
pub struct NewInvestment {
    pub name: String,
    pub amount: f64,
    pub interest_rate: f64,
    pub investment_period: i32,
    pub user_id: i32,
}

impl CreateInvestment {
    pub fn into_new(self) -> Result<NewInvestment, String> {
        let (interest_rate, investment_period) = match (self.interest_rate, self.investment_period) {
            (Some(rate), Some(period)) => (rate, period),
            _ => return Err("interestRate and investmentPeriod are required".to_string()),
        };
        Ok(NewInvestment {
            name: self.name,
            amount: self.amount,
            interest_rate,
            investment_period,
            user_id: self.user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_distinguishes_missing_from_null() {
        let missing: UpdateInvestment =
            serde_json::from_str(r#"{"name":"Bond","amount":10.0}"#).unwrap();
        assert_eq!(missing.interest_rate, None);
        assert_eq!(missing.investment_period, None);

        let cleared: UpdateInvestment = serde_json::from_str(
            r#"{"name":"Bond","amount":10.0,"interestRate":null,"investmentPeriod":null}"#,
        )
        .unwrap();
        assert_eq!(cleared.interest_rate, Some(None));
        assert_eq!(cleared.investment_period, Some(None));

        let set: UpdateInvestment = serde_json::from_str(
            r#"{"name":"Bond","amount":10.0,"interestRate":4.5,"investmentPeriod":2}"#,
        )
        .unwrap();
        assert_eq!(set.interest_rate, Some(Some(4.5)));
        assert_eq!(set.investment_period, Some(Some(2)));
    }

    #[test]
    fn test_create_requires_rate_and_period() {
        let input = CreateInvestment {
            name: "Bond".to_string(),
            amount: 10.0,
            interest_rate: Some(1.0),
            investment_period: None,
            user_id: 1,
        };
        assert!(input.into_new().is_err());
    }
}
