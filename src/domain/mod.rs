pub mod booking;
pub mod payment;
pub mod pricing;
pub mod registration;

pub use booking::*;
pub use payment::*;
pub use pricing::*;
pub use registration::*;
