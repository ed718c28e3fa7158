//! The HI velocity/redshift/frequency converter.

use std::str::FromStr;

use hi_doppler::{
    DopplerConvention, DopplerError, HI_REST_FREQUENCY_MHZ, frequency_from_redshift,
    redshift_from_frequency, relativistic_redshift, relativistic_velocity_from_redshift,
};

use crate::elementwise::Elementwise;

/// Converter between radial velocity (km/s), redshift and HI frequency (MHz).
///
/// The Doppler convention is fixed at construction. It governs only the
/// velocity ↔ frequency pair; velocity ↔ redshift always uses the
/// relativistic relation, whatever the convention.
///
/// Immutable and `Copy`; safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiConverter {
    convention: DopplerConvention,
    rest_frequency_mhz: f64,
}

impl HiConverter {
    /// Create a converter for the given convention.
    pub fn new(convention: DopplerConvention) -> Self {
        log::debug!("HI converter using {convention} convention");
        Self {
            convention,
            rest_frequency_mhz: HI_REST_FREQUENCY_MHZ,
        }
    }

    /// Create a converter from a convention name (case-insensitive).
    ///
    /// Accepts `relativistic`, `radio` or `optical`; anything else yields
    /// [`DopplerError::InvalidConvention`].
    pub fn from_name(name: &str) -> Result<Self, DopplerError> {
        match name.parse::<DopplerConvention>() {
            Ok(convention) => Ok(Self::new(convention)),
            Err(e) => {
                log::warn!("rejected Doppler convention {name:?}");
                Err(e)
            }
        }
    }

    /// The Doppler convention fixed at construction.
    pub fn convention(&self) -> DopplerConvention {
        self.convention
    }

    /// HI rest frequency ν₀ in MHz.
    pub fn rest_frequency_mhz(&self) -> f64 {
        self.rest_frequency_mhz
    }

    /// Radial velocity (km/s) to redshift, relativistic in every convention.
    pub fn velocity_to_redshift<T: Elementwise>(&self, velocity_km_s: T) -> T::Output {
        velocity_km_s.map_elements(relativistic_redshift)
    }

    /// Redshift to radial velocity (km/s), relativistic in every convention.
    pub fn redshift_to_velocity<T: Elementwise>(&self, z: T) -> T::Output {
        z.map_elements(relativistic_velocity_from_redshift)
    }

    /// Redshift to observed HI frequency (MHz): `ν = ν₀ / (1 + z)`.
    pub fn redshift_to_frequency<T: Elementwise>(&self, z: T) -> T::Output {
        let nu0 = self.rest_frequency_mhz;
        z.map_elements(|z| frequency_from_redshift(z, nu0))
    }

    /// Observed HI frequency (MHz) to redshift: `z = ν₀/ν − 1`.
    pub fn frequency_to_redshift<T: Elementwise>(&self, frequency_mhz: T) -> T::Output {
        let nu0 = self.rest_frequency_mhz;
        frequency_mhz.map_elements(|nu| redshift_from_frequency(nu, nu0))
    }

    /// Observed HI frequency (MHz) to radial velocity (km/s) under the
    /// configured convention.
    pub fn frequency_to_velocity<T: Elementwise>(&self, frequency_mhz: T) -> T::Output {
        let (convention, nu0) = (self.convention, self.rest_frequency_mhz);
        frequency_mhz.map_elements(|nu| convention.velocity_from_frequency(nu, nu0))
    }

    /// Radial velocity (km/s) to observed HI frequency (MHz) under the
    /// configured convention.
    pub fn velocity_to_frequency<T: Elementwise>(&self, velocity_km_s: T) -> T::Output {
        let (convention, nu0) = (self.convention, self.rest_frequency_mhz);
        velocity_km_s.map_elements(|v| convention.frequency_from_velocity(v, nu0))
    }
}

impl Default for HiConverter {
    fn default() -> Self {
        Self::new(DopplerConvention::default())
    }
}

impl From<DopplerConvention> for HiConverter {
    fn from(convention: DopplerConvention) -> Self {
        Self::new(convention)
    }
}

impl FromStr for HiConverter {
    type Err = DopplerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
