//! Core types shared by the miqat crates.

pub mod error;
pub mod method;
pub mod types;

pub use error::{MiqatError, MAX_UTC_OFFSET_MINUTES};
pub use method::{CalculationMethod, IshaRule, MethodParameters};
pub use types::{GeoCoordinate, Location, Madhab, PrayerName};
