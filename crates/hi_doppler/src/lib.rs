//! Doppler conventions and closed-form redshift formulas for the HI line.
//!
//! Provides the physical constants (speed of light, HI rest frequency),
//! the three Doppler conventions used in radio astronomy, and scalar
//! conversions between radial velocity, redshift and observed frequency.

pub mod constants;
pub mod convention;
pub mod error;
pub mod formulas;

pub use constants::{HI_REST_FREQUENCY_MHZ, M_PER_KM, SPEED_OF_LIGHT_KM_S, SPEED_OF_LIGHT_M_S};
pub use convention::{ALL_CONVENTIONS, DopplerConvention};
pub use error::DopplerError;
pub use formulas::{
    beta, frequency_from_redshift, optical_frequency, optical_velocity, radio_frequency,
    radio_velocity, redshift_from_frequency, relativistic_frequency, relativistic_redshift,
    relativistic_velocity, relativistic_velocity_from_redshift,
};
