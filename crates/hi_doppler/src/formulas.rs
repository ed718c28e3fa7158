//! Closed-form velocity, redshift and frequency relations.
//!
//! Velocities are radial velocities in km/s (positive = receding),
//! frequencies share the unit of the supplied rest frequency (MHz for HI).
//!
//! Nothing here checks its domain. `|v| ≥ c`, `ν = 0` or `z = −1` give
//! `inf` or `NaN` exactly as IEEE arithmetic does.

use crate::constants::{M_PER_KM, SPEED_OF_LIGHT_KM_S, SPEED_OF_LIGHT_M_S};

/// β = v/c for a velocity in km/s.
pub fn beta(velocity_km_s: f64) -> f64 {
    velocity_km_s * M_PER_KM / SPEED_OF_LIGHT_M_S
}

/// Relativistic redshift of a radial velocity (km/s).
///
/// `z = sqrt((1 + β) / (1 − β)) − 1`
pub fn relativistic_redshift(velocity_km_s: f64) -> f64 {
    let b = beta(velocity_km_s);
    ((1.0 + b) / (1.0 - b)).sqrt() - 1.0
}

/// Radial velocity (km/s) from redshift, inverse of [`relativistic_redshift`].
///
/// `v = c · (z² + 2z) / (z² + 2z + 2)`
pub fn relativistic_velocity_from_redshift(z: f64) -> f64 {
    let q = z * z + 2.0 * z;
    SPEED_OF_LIGHT_M_S * q / (q + 2.0) / M_PER_KM
}

/// Observed frequency of a line at rest frequency `nu0` seen at redshift `z`.
pub fn frequency_from_redshift(z: f64, nu0: f64) -> f64 {
    nu0 / (1.0 + z)
}

/// Redshift of a line at rest frequency `nu0` observed at `nu`.
pub fn redshift_from_frequency(nu: f64, nu0: f64) -> f64 {
    nu0 / nu - 1.0
}

/// Relativistic velocity (km/s): `v = c · (ν₀² − ν²) / (ν₀² + ν²)`.
pub fn relativistic_velocity(nu: f64, nu0: f64) -> f64 {
    let (nu_sq, nu0_sq) = (nu * nu, nu0 * nu0);
    SPEED_OF_LIGHT_KM_S * (nu0_sq - nu_sq) / (nu0_sq + nu_sq)
}

/// Relativistic frequency: `ν = ν₀ · sqrt((1 − β) / (1 + β))`.
pub fn relativistic_frequency(velocity_km_s: f64, nu0: f64) -> f64 {
    let b = beta(velocity_km_s);
    nu0 * ((1.0 - b) / (1.0 + b)).sqrt()
}

/// Radio-convention velocity (km/s): `v = c · (ν₀ − ν) / ν₀`.
pub fn radio_velocity(nu: f64, nu0: f64) -> f64 {
    SPEED_OF_LIGHT_KM_S * (nu0 - nu) / nu0
}

/// Radio-convention frequency: `ν = ν₀ · (1 − β)`.
pub fn radio_frequency(velocity_km_s: f64, nu0: f64) -> f64 {
    nu0 * (1.0 - beta(velocity_km_s))
}

/// Optical-convention velocity (km/s): `v = c · (ν₀ − ν) / ν`, i.e. `c·z`.
pub fn optical_velocity(nu: f64, nu0: f64) -> f64 {
    SPEED_OF_LIGHT_KM_S * (nu0 - nu) / nu
}

/// Optical-convention frequency: `ν = ν₀ / (1 + β)`.
pub fn optical_frequency(velocity_km_s: f64, nu0: f64) -> f64 {
    nu0 / (1.0 + beta(velocity_km_s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HI_REST_FREQUENCY_MHZ as NU0;

    const EPS: f64 = 1e-9;

    #[test]
    fn beta_of_light_speed_is_one() {
        assert!((beta(SPEED_OF_LIGHT_KM_S) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn redshift_of_1000_km_s() {
        let z = relativistic_redshift(1000.0);
        assert!((z - 0.003_341_222_805_847_144).abs() < 1e-14, "z = {z}");
    }

    #[test]
    fn redshift_sign_follows_velocity() {
        assert!(relativistic_redshift(500.0) > 0.0);
        assert!(relativistic_redshift(-500.0) < 0.0);
        assert_eq!(relativistic_redshift(0.0), 0.0);
    }

    #[test]
    fn velocity_from_redshift_inverts() {
        for v in [-20_000.0, -150.0, 0.0, 42.0, 3_000.0, 90_000.0] {
            let back = relativistic_velocity_from_redshift(relativistic_redshift(v));
            assert!((back - v).abs() < 1e-6, "v = {v}, back = {back}");
        }
    }

    #[test]
    fn rest_frequency_at_zero_redshift() {
        assert_eq!(frequency_from_redshift(0.0, NU0), NU0);
        assert_eq!(redshift_from_frequency(NU0, NU0), 0.0);
    }

    #[test]
    fn all_conventions_agree_at_rest() {
        assert_eq!(relativistic_velocity(NU0, NU0), 0.0);
        assert_eq!(radio_velocity(NU0, NU0), 0.0);
        assert_eq!(optical_velocity(NU0, NU0), 0.0);
        assert_eq!(relativistic_frequency(0.0, NU0), NU0);
        assert_eq!(radio_frequency(0.0, NU0), NU0);
        assert_eq!(optical_frequency(0.0, NU0), NU0);
    }

    #[test]
    fn half_rest_frequency() {
        // ν = ν₀/2: radio gives c/2, optical gives c, relativistic 3c/5
        let nu = NU0 / 2.0;
        assert!((radio_velocity(nu, NU0) - SPEED_OF_LIGHT_KM_S / 2.0).abs() < EPS);
        assert!((optical_velocity(nu, NU0) - SPEED_OF_LIGHT_KM_S).abs() < EPS);
        assert!((relativistic_velocity(nu, NU0) - 0.6 * SPEED_OF_LIGHT_KM_S).abs() < EPS);
    }

    #[test]
    fn frequency_inverts_velocity_per_convention() {
        for nu in [700.0, 1300.0, 1400.0, 1420.0, 1450.0] {
            let rel = relativistic_frequency(relativistic_velocity(nu, NU0), NU0);
            let rad = radio_frequency(radio_velocity(nu, NU0), NU0);
            let opt = optical_frequency(optical_velocity(nu, NU0), NU0);
            assert!((rel - nu).abs() < EPS, "relativistic: {nu} -> {rel}");
            assert!((rad - nu).abs() < EPS, "radio: {nu} -> {rad}");
            assert!((opt - nu).abs() < EPS, "optical: {nu} -> {opt}");
        }
    }

    #[test]
    fn light_speed_is_singular() {
        assert!(relativistic_redshift(SPEED_OF_LIGHT_KM_S).is_infinite());
        assert!(relativistic_redshift(2.0 * SPEED_OF_LIGHT_KM_S).is_nan());
        assert!(optical_frequency(-SPEED_OF_LIGHT_KM_S, NU0).is_infinite());
    }

    #[test]
    fn zero_frequency_is_singular() {
        assert!(redshift_from_frequency(0.0, NU0).is_infinite());
        assert!(optical_velocity(0.0, NU0).is_infinite());
        assert!(frequency_from_redshift(-1.0, NU0).is_infinite());
    }
}
