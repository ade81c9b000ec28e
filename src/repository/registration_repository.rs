use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::{
    domain::{NewRegistration, PaymentStatus, Registration},
    error::{AppError, Result},
    repository::RegistrationRepository,
};

#[derive(FromRow)]
struct RegistrationRow {
    id: String,
    full_name: String,
    email: String,
    whatsapp: String,
    plan: String,
    description: String,
    monthly_rate: i64,
    first_payment: i64,
    utr_dupr: Option<String>,
    payment_status: String,
    currency: String,
    yoco_checkout_id: Option<String>,
    confirmed_at: Option<NaiveDateTime>,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

pub struct SqliteRegistrationRepository {
    pool: SqlitePool,
}

impl SqliteRegistrationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_registration(row: RegistrationRow) -> Result<Registration> {
        Ok(Registration {
            id: Uuid::parse_str(&row.id).map_err(|e| AppError::Database(e.to_string()))?,
            full_name: row.full_name,
            email: row.email,
            whatsapp: row.whatsapp,
            plan: row.plan,
            description: row.description,
            monthly_rate: row.monthly_rate,
            first_payment: row.first_payment,
            utr_dupr: row.utr_dupr,
            payment_status: parse_payment_status(&row.payment_status)?,
            currency: row.currency,
            yoco_checkout_id: row.yoco_checkout_id,
            confirmed_at: row.confirmed_at.map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc)),
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
            updated_at: DateTime::from_naive_utc_and_offset(row.updated_at, Utc),
        })
    }
}

pub(crate) fn parse_payment_status(s: &str) -> Result<PaymentStatus> {
    match s {
        "pending" => Ok(PaymentStatus::Pending),
        "confirmed" => Ok(PaymentStatus::Confirmed),
        "paid" => Ok(PaymentStatus::Paid),
        _ => Err(AppError::Database(format!("Invalid payment status: {}", s))),
    }
}

#[async_trait]
impl RegistrationRepository for SqliteRegistrationRepository {
    async fn create(&self, registration: NewRegistration) -> Result<Registration> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            INSERT INTO membership_registrations (
                id, full_name, email, whatsapp, plan, description,
                monthly_rate, first_payment, utr_dupr, payment_status,
                currency, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(&id_str)
        .bind(&registration.full_name)
        .bind(&registration.email)
        .bind(&registration.whatsapp)
        .bind(&registration.plan)
        .bind(&registration.description)
        .bind(registration.monthly_rate)
        .bind(registration.first_payment)
        .bind(&registration.utr_dupr)
        .bind(PaymentStatus::Pending.as_str())
        .bind(&registration.currency)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve created registration".to_string())
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Registration>> {
        let id_str = id.to_string();
        let row = sqlx::query_as::<_, RegistrationRow>(
            r#"
            SELECT id, full_name, email, whatsapp, plan, description,
                   monthly_rate, first_payment, utr_dupr, payment_status,
                   currency, yoco_checkout_id, confirmed_at, created_at, updated_at
            FROM membership_registrations
            WHERE id = ?
            "#
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_registration(r)?)),
            None => Ok(None),
        }
    }

    async fn mark_confirmed(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            UPDATE membership_registrations
            SET payment_status = ?,
                confirmed_at = ?,
                updated_at = ?
            WHERE id = ?
            "#
        )
        .bind(PaymentStatus::Confirmed.as_str())
        .bind(now)
        .bind(now)
        .bind(&id_str)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    async fn set_checkout_id(&self, id: Uuid, checkout_id: &str) -> Result<()> {
        let id_str = id.to_string();
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            UPDATE membership_registrations
            SET yoco_checkout_id = ?,
                updated_at = ?
            WHERE id = ?
            "#
        )
        .bind(checkout_id)
        .bind(now)
        .bind(&id_str)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }
}
