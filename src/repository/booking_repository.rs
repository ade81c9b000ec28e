use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::{
    domain::{Booking, NewBooking, PaymentStatus},
    error::{AppError, Result},
    repository::{registration_repository::parse_payment_status, BookingRepository},
};

#[derive(FromRow)]
struct BookingRow {
    id: String,
    court_id: String,
    court_name: String,
    booking_time: String,
    sport: String,
    user_id: String,
    user_email: String,
    payment_status: String,
    amount: i64,
    currency: String,
    yoco_checkout_id: Option<String>,
    yoco_payment_id: Option<String>,
    confirmed_at: Option<NaiveDateTime>,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

pub struct SqliteBookingRepository {
    pool: SqlitePool,
}

impl SqliteBookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: BookingRow) -> Result<Booking> {
        Ok(Booking {
            id: Uuid::parse_str(&row.id).map_err(|e| AppError::Database(e.to_string()))?,
            court_id: row.court_id,
            court_name: row.court_name,
            booking_time: row.booking_time,
            sport: row.sport,
            user_id: row.user_id,
            user_email: row.user_email,
            payment_status: parse_payment_status(&row.payment_status)?,
            amount: row.amount,
            currency: row.currency,
            yoco_checkout_id: row.yoco_checkout_id,
            yoco_payment_id: row.yoco_payment_id,
            confirmed_at: row.confirmed_at.map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc)),
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
            updated_at: DateTime::from_naive_utc_and_offset(row.updated_at, Utc),
        })
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepository {
    async fn create(&self, booking: NewBooking) -> Result<Booking> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, court_id, court_name, booking_time, sport,
                user_id, user_email, payment_status, amount, currency,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(&id_str)
        .bind(&booking.court_id)
        .bind(&booking.court_name)
        .bind(&booking.booking_time)
        .bind(&booking.sport)
        .bind(&booking.user_id)
        .bind(&booking.user_email)
        .bind(PaymentStatus::Pending.as_str())
        .bind(booking.amount)
        .bind(&booking.currency)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve created booking".to_string())
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>> {
        let id_str = id.to_string();
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, court_id, court_name, booking_time, sport,
                   user_id, user_email, payment_status, amount, currency,
                   yoco_checkout_id, yoco_payment_id, confirmed_at,
                   created_at, updated_at
            FROM bookings
            WHERE id = ?
            "#
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_booking(r)?)),
            None => Ok(None),
        }
    }

    async fn set_checkout_id(&self, id: Uuid, checkout_id: &str) -> Result<()> {
        let id_str = id.to_string();
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            UPDATE bookings
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

    async fn mark_paid(&self, id: Uuid, payment_id: &str) -> Result<bool> {
        let id_str = id.to_string();
        let now = Utc::now().naive_utc();

        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET payment_status = ?,
                yoco_payment_id = ?,
                confirmed_at = ?,
                updated_at = ?
            WHERE id = ?
            "#
        )
        .bind(PaymentStatus::Paid.as_str())
        .bind(payment_id)
        .bind(now)
        .bind(now)
        .bind(&id_str)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
