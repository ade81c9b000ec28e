use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::*;
use crate::error::Result;

pub mod booking_repository;
pub mod registration_repository;

pub use booking_repository::SqliteBookingRepository;
pub use registration_repository::SqliteRegistrationRepository;

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn create(&self, registration: NewRegistration) -> Result<Registration>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Registration>>;
    /// Confirms a free registration: status -> `confirmed`, confirmation
    /// timestamp stamped.
    async fn mark_confirmed(&self, id: Uuid) -> Result<()>;
    async fn set_checkout_id(&self, id: Uuid, checkout_id: &str) -> Result<()>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: NewBooking) -> Result<Booking>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>>;
    async fn set_checkout_id(&self, id: Uuid, checkout_id: &str) -> Result<()>;
    /// Marks a booking paid with the provider payment id and a confirmation
    /// timestamp. Returns false when no booking matched the id; the webhook
    /// only transitions existing rows, it never creates them.
    async fn mark_paid(&self, id: Uuid, payment_id: &str) -> Result<bool>;
}
