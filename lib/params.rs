//! Explicit configuration for a discretized box.
//!
//! ```
//! use fdbox::params::{ Origin, Params };
//!
//! let params = Params::default().with_n(200).with_origin(Origin::Left);
//! assert!(params.validate().is_ok());
//! assert_eq!(params.bounds(), (0.0, 100.0));
//! ```

use crate::error::ParamError;

/// Placement of the grid relative to the coordinate origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Origin {
    /// Grid covers `[-L/2, L/2]`.
    #[default]
    Centered,
    /// Grid covers `[0, L]`.
    Left,
}

/// Grid size, interval length, particle mass, and potential coupling for a
/// single solver run.
///
/// The default values correspond to a free particle of unit mass on a
/// 100-point grid of length 100, centered on the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Params {
    /// Number of grid points.
    pub n: usize,
    /// Interval length.
    pub length: f64,
    /// Particle mass.
    pub mass: f64,
    /// Scale factor applied to the potential, i.e. `q` in `q V(x)`.
    pub charge: f64,
    /// Placement of the interval.
    pub origin: Origin,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            n: 100,
            length: 100.0,
            mass: 1.0,
            charge: 1.0,
            origin: Origin::Centered,
        }
    }
}

impl Params {
    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_charge(mut self, charge: f64) -> Self {
        self.charge = charge;
        self
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Check every parameter, failing on the first invalid one.
    pub fn validate(&self) -> Result<(), ParamError> {
        ParamError::check_grid_size(self.n)?;
        ParamError::check_length(self.length)?;
        ParamError::check_mass(self.mass)?;
        ParamError::check_charge(self.charge)?;
        Ok(())
    }

    /// Return the (inclusive) endpoints of the interval.
    pub fn bounds(&self) -> (f64, f64) {
        match self.origin {
            Origin::Centered => (-self.length / 2.0, self.length / 2.0),
            Origin::Left => (0.0, self.length),
        }
    }

    /// Grid spacing implied by these parameters.
    pub fn spacing(&self) -> f64 {
        self.length / (self.n as f64 - 1.0)
    }
}
