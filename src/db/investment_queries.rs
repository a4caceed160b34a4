use sqlx::PgPool;
use crate::models::{Investment, NewInvestment, UpdateInvestment};

pub async fn fetch_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<Investment>, sqlx::Error> {
    sqlx::query_as::<_, Investment>(
        "SELECT id, name, amount, interest_rate, investment_period, created_at, user_id
         FROM investments
         WHERE user_id = $1"
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, id: i32) -> Result<Option<Investment>, sqlx::Error> {
    sqlx::query_as::<_, Investment>(
        "SELECT id, name, amount, interest_rate, investment_period, created_at, user_id
         FROM investments
         WHERE id = $1"
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn insert(pool: &PgPool, input: NewInvestment) -> Result<Investment, sqlx::Error> {
    sqlx::query_as::<_, Investment>(
        "INSERT INTO investments (name, amount, interest_rate, investment_period, user_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, name, amount, interest_rate, investment_period, created_at, user_id"
    )
    .bind(input.name)
    .bind(input.amount)
    .bind(input.interest_rate)
    .bind(input.investment_period)
    .bind(input.user_id)
    .fetch_one(pool)
    .await
}

/// Rate and period are only written when present in `input`.
pub async fn update(
    pool: &PgPool,
    id: i32,
    input: UpdateInvestment,
) -> Result<Option<Investment>, sqlx::Error> {
    sqlx::query_as::<_, Investment>(
        "UPDATE investments
         SET name = $1,
             amount = $2,
             interest_rate = CASE WHEN $3::BOOLEAN THEN $4::DOUBLE PRECISION ELSE interest_rate END,
             investment_period = CASE WHEN $5::BOOLEAN THEN $6::INTEGER ELSE investment_period END
         WHERE id = $7
         RETURNING id, name, amount, interest_rate, investment_period, created_at, user_id"
    )
    .bind(input.name)
    .bind(input.amount)
    .bind(input.interest_rate.is_some())
    .bind(input.interest_rate.flatten())
    .bind(input.investment_period.is_some())
    .bind(input.investment_period.flatten())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<Investment>, sqlx::Error> {
    sqlx::query_as::<_, Investment>(
        "DELETE FROM investments
         WHERE id = $1
         RETURNING id, name, amount, interest_rate, investment_period, created_at, user_id"
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed_user(pool: &PgPool) -> i32 {
        sqlx::query_scalar::<_, i32>(
            "INSERT INTO users (name, email) VALUES ('Ana', 'ana@example.com') RETURNING id"
        )
        .fetch_one(pool)
        .await
        .unwrap()
    }

    fn bond(user_id: i32) -> NewInvestment {
        NewInvestment {
            name: "Bond A".to_string(),
            amount: 1000.0,
            interest_rate: 5.0,
            investment_period: 3,
            user_id,
        }
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL pointing at a Postgres server"]
    async fn test_crud_against_postgres(pool: PgPool) {
        let user_id = seed_user(&pool).await;
        assert!(crate::db::user_queries::exists(&pool, user_id).await.unwrap());
        assert!(!crate::db::user_queries::exists(&pool, user_id + 1).await.unwrap());

        let created = insert(&pool, bond(user_id)).await.unwrap();
        assert_eq!(fetch_one(&pool, created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(fetch_by_user(&pool, user_id).await.unwrap(), vec![created.clone()]);

        let partial = UpdateInvestment {
            name: "Bond A2".to_string(),
            amount: 1200.0,
            interest_rate: None,
            investment_period: Some(None),
        };
        let updated = update(&pool, created.id, partial).await.unwrap().unwrap();
        assert_eq!(updated.name, "Bond A2");
        assert_eq!(updated.interest_rate, Some(5.0));
        assert_eq!(updated.investment_period, None);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.user_id, user_id);

        let deleted = delete(&pool, created.id).await.unwrap();
        assert_eq!(deleted, Some(updated));
        assert_eq!(fetch_one(&pool, created.id).await.unwrap(), None);
        assert!(update(&pool, created.id, UpdateInvestment {
            name: "Gone".to_string(),
            amount: 0.0,
            interest_rate: None,
            investment_period: None,
        }).await.unwrap().is_none());
    }
}
