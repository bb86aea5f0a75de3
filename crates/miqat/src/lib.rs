//! # Miqat
//!
//! Islamic prayer times and Qibla direction from sun-position astronomy.
//!
//! This crate is a facade that re-exports functionality from the `miqat` ecosystem.
//!
//! ## Modules
//!
//! - `types`: Core types (CalculationMethod, Madhab, GeoCoordinate, etc.)
//! - `astronomy`: Julian Day, solar position, angle solvers, Qibla bearing
//! - `prayer`: Orchestration of the six daily times
//! - `request` / `result`: Configuration and output types
//!
//! ## Usage
//!
//! ```rust
//! use miqat::prelude::*;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
//! let london = GeoCoordinate::new(51.5074, -0.1278).unwrap();
//! let day = compute(london, date, CalculationMethod::Mwl, Madhab::Shafi, false);
//! assert_eq!(day.prayers.len(), 6);
//! ```

pub use miqat_core::*;
