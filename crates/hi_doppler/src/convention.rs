//! Doppler conventions relating observed frequency to radial velocity.
//!
//! The three conventions agree to first order in β and diverge as the
//! velocity approaches c. Redshift itself is convention free; only the
//! velocity assigned to a given frequency depends on the choice.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::DopplerError;
use crate::formulas::{
    optical_frequency, optical_velocity, radio_frequency, radio_velocity, relativistic_frequency,
    relativistic_velocity,
};

/// Doppler convention used to map frequency to velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DopplerConvention {
    /// Full special-relativistic Doppler shift.
    #[default]
    Relativistic,
    /// Radio definition, linear in frequency: `v = c (1 − ν/ν₀)`.
    Radio,
    /// Optical definition, linear in wavelength: `v = c z`.
    Optical,
}

/// All conventions, in canonical order.
pub const ALL_CONVENTIONS: [DopplerConvention; 3] = [
    DopplerConvention::Relativistic,
    DopplerConvention::Radio,
    DopplerConvention::Optical,
];

impl DopplerConvention {
    /// All conventions in canonical order.
    pub const fn all() -> &'static [DopplerConvention] {
        &ALL_CONVENTIONS
    }

    /// Canonical lower-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Relativistic => "relativistic",
            Self::Radio => "radio",
            Self::Optical => "optical",
        }
    }

    /// Radial velocity (km/s) of a line with rest frequency `nu0` observed at `nu`.
    pub fn velocity_from_frequency(self, nu: f64, nu0: f64) -> f64 {
        match self {
            Self::Relativistic => relativistic_velocity(nu, nu0),
            Self::Radio => radio_velocity(nu, nu0),
            Self::Optical => optical_velocity(nu, nu0),
        }
    }

    /// Observed frequency of a line with rest frequency `nu0` at velocity `velocity_km_s`.
    pub fn frequency_from_velocity(self, velocity_km_s: f64, nu0: f64) -> f64 {
        match self {
            Self::Relativistic => relativistic_frequency(velocity_km_s, nu0),
            Self::Radio => radio_frequency(velocity_km_s, nu0),
            Self::Optical => optical_frequency(velocity_km_s, nu0),
        }
    }
}

impl Display for DopplerConvention {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DopplerConvention {
    type Err = DopplerError;

    /// Case-insensitive; no whitespace trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CONVENTIONS
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DopplerError::InvalidConvention(s.to_string()))
    }
}
