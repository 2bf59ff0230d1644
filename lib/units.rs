#![allow(non_upper_case_globals)]

//! Conversion between physical units and the natural units used by the
//! solvers.
//!
//! Solvers work with *ħ* = *m* = 1 and an arbitrary length scale *a*, so that
//! energies are measured in units of *ħ*² / *m a*². Concrete physical
//! constants are taken from NIST.
//!
//! ```
//! use fdbox::units::{ self, Units };
//!
//! // electron in a 5 nm box, with the box width as the length scale
//! let uu = Units::from_mks(units::me, 5e-9);
//! let e1_nat = std::f64::consts::PI.powi(2) / 2.0;
//! let e1_ev = uu.from_nat_energy(e1_nat) / units::e;
//! assert!((e1_ev - 0.01504).abs() < 1e-4);
//! ```

use std::f64::consts::PI;
use crate::error::ParamError;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// elementary charge (C); also the number of joules in one electronvolt
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// Hartree energy (J)
pub const Eh: f64 = 4.3597447222071e-18;
//              +/- 0.0000000000085e-18

/// A collection of natural unit scaling factors relative to some base unit
/// system.
///
/// Constructor methods produce scaling constants whose numerical values are
/// represented in the base unit system.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Units {
    /// Particle mass.
    pub m: f64,
    /// Base length scale.
    pub a: f64,
    /// Associated energy scale, *ħ*² / *m a*².
    pub e: f64,
    /// Associated time scale, *ħ* / *e*.
    pub t: f64,
}

impl Units {
    /// Construct from a mass and length scale given in meters/kilograms/seconds
    /// (MKS) units.
    pub fn from_mks(mass: f64, a: f64) -> Self {
        let e_unit = hbar.powi(2) / mass / a.powi(2);
        Self { m: mass, a, e: e_unit, t: hbar / e_unit }
    }

    /// Like [`Self::from_mks`], but first checks that the mass and length scale
    /// are positive and finite.
    pub fn try_from_mks(mass: f64, a: f64) -> Result<Self, ParamError> {
        ParamError::check_mass(mass)?;
        ParamError::check_length(a)?;
        Ok(Self::from_mks(mass, a))
    }

    /// Construct from a mass and length scale in atomic units (electron masses
    /// and Bohr radii). Energy and time scales are given in Hartrees and
    /// atomic time units.
    pub fn from_au(mass: f64, a: f64) -> Self {
        let e_unit = (mass * a.powi(2)).recip();
        Self { m: mass, a, e: e_unit, t: e_unit.recip() }
    }

    /// Convert a length in the base unit system to natural units.
    pub fn to_nat_length(&self, x: f64) -> f64 { x / self.a }

    /// Convert a length in natural units to the base unit system.
    pub fn from_nat_length(&self, x: f64) -> f64 { x * self.a }

    /// Convert an energy in the base unit system to natural units.
    pub fn to_nat_energy(&self, x: f64) -> f64 { x / self.e }

    /// Convert an energy in natural units to the base unit system.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_nat_energy(&self, x: f64) -> f64 { x * self.e }

    /// Convert a time in natural units to the base unit system.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_nat_time(&self, x: f64) -> f64 { x * self.t }

    /// Convert a wavefunction amplitude (dimensions of length^-1/2) in natural
    /// units to the base unit system.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_nat_amplitude(&self, q: f64) -> f64 { q / self.a.sqrt() }

    /// Convert a probability density (dimensions of length^-1) in natural
    /// units to the base unit system.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_nat_density(&self, p: f64) -> f64 { p / self.a }
}
