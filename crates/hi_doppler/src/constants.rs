//! Physical constants for HI line conversions.

/// Speed of light in vacuum, m/s (exact, SI definition).
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Metres per kilometre.
pub const M_PER_KM: f64 = 1.0e3;

/// Speed of light in vacuum, km/s.
pub const SPEED_OF_LIGHT_KM_S: f64 = SPEED_OF_LIGHT_M_S / M_PER_KM;

/// Rest frequency of the HI 21 cm hyperfine transition, MHz.
pub const HI_REST_FREQUENCY_MHZ: f64 = 1420.4058;
