//! Velocity, redshift and frequency conversions for HI 21 cm observations.
//!
//! Provides [`HiConverter`], a small immutable value that maps between
//! radial velocity (km/s), redshift and observed frequency (MHz) of the HI
//! line under a fixed Doppler convention. Every conversion accepts a scalar
//! or a sequence and returns the same shape (see [`Elementwise`]).
//!
//! # Quick start
//!
//! ```rust
//! use hi_frame::HiConverter;
//!
//! let conv = HiConverter::from_name("optical").expect("known convention");
//! let z = conv.frequency_to_redshift(1400.0_f64);
//! let v = conv.frequency_to_velocity(vec![1400.0_f64, 1410.0]);
//! assert!(z > 0.0);
//! assert_eq!(v.len(), 2);
//! ```

pub mod converter;
pub mod elementwise;

pub use converter::HiConverter;
pub use elementwise::Elementwise;

// Re-export the convention and constants so callers need only `hi_frame`.
pub use hi_doppler::{
    ALL_CONVENTIONS, DopplerConvention, DopplerError, HI_REST_FREQUENCY_MHZ, SPEED_OF_LIGHT_KM_S,
};
