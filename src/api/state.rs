use std::sync::Arc;
use crate::{
    config::Settings,
    payments::CheckoutProvider,
    repository::{BookingRepository, RegistrationRepository},
};

#[derive(Clone)]
pub struct AppState {
    pub registrations: Arc<dyn RegistrationRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub checkout: Arc<dyn CheckoutProvider>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(
        registrations: Arc<dyn RegistrationRepository>,
        bookings: Arc<dyn BookingRepository>,
        checkout: Arc<dyn CheckoutProvider>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            registrations,
            bookings,
            checkout,
            settings,
        }
    }
}
