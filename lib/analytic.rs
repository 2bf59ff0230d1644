//! Closed-form eigenstates of the infinite square well.
//!
//! For a box `[x0, x0 + L]` with infinitely high walls, the `n`-th level
//! (`n = 1, 2, ...`) has
//! ```text
//!        n² π² ħ²                 ⎛2⎞½     ⎛n π (x - x0)⎞
//! E[n] = --------      ψ[n](x) = ⎜-⎟  sin ⎜------------⎟
//!         2 m L²                  ⎝L⎠      ⎝      L     ⎠
//! ```
//! with *ħ* = 1 throughout. The wavefunction vanishes outside the box.
//!
//! ```
//! use fdbox::analytic::Well;
//!
//! let well = Well::new(0.0, 1.0, 1.0).unwrap();
//! let e1 = well.energy(1).unwrap();
//! let e3 = well.energy(3).unwrap();
//! assert!((e3 / e1 - 9.0).abs() < 1e-12);
//! assert!(well.wavefunction(2, 0.5).unwrap().abs() < 1e-12);
//! ```

use std::f64::consts::PI;
use ndarray as nd;
use crate::{
    Arr1,
    error::ParamError,
    grid::Grid,
    params::Params,
};

/// An infinite square well.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Well {
    x0: f64,
    length: f64,
    mass: f64,
}

impl Well {
    /// Create a new well covering `[x0, x0 + length]` for a particle of mass
    /// `mass`.
    pub fn new(x0: f64, length: f64, mass: f64) -> Result<Self, ParamError> {
        ParamError::check_length(length)?;
        ParamError::check_mass(mass)?;
        Ok(Self { x0, length, mass })
    }

    /// The well whose walls sit at the ends of the interval described by a set
    /// of [`Params`].
    pub fn from_params(params: &Params) -> Result<Self, ParamError> {
        params.validate()?;
        let (start, _) = params.bounds();
        Self::new(start, params.length, params.mass)
    }

    /// The well whose walls sit one grid spacing beyond either end of `grid`.
    ///
    /// A finite-difference Hamiltonian on `grid` forces the wavefunction to
    /// zero at exactly these points, so this is the continuum limit its
    /// spectrum approaches.
    pub fn dirichlet(grid: &Grid, mass: f64) -> Result<Self, ParamError> {
        let dx = grid.spacing();
        Self::new(grid.start() - dx, grid.span() + 2.0 * dx, mass)
    }

    /// Left wall position.
    pub fn x0(&self) -> f64 { self.x0 }

    /// Width of the well.
    pub fn length(&self) -> f64 { self.length }

    /// Particle mass.
    pub fn mass(&self) -> f64 { self.mass }

    /// Energy of the `n`-th level.
    pub fn energy(&self, n: usize) -> Result<f64, ParamError> {
        ParamError::check_level(n)?;
        Ok(energy(n, self.length, self.mass))
    }

    /// Value of the `n`-th wavefunction at `x`.
    pub fn wavefunction(&self, n: usize, x: f64) -> Result<f64, ParamError> {
        ParamError::check_level(n)?;
        Ok(wavefunction(n, self.length, self.x0, x))
    }

    /// Probability density of the `n`-th level at `x`.
    pub fn density(&self, n: usize, x: f64) -> Result<f64, ParamError> {
        self.wavefunction(n, x).map(|q| q * q)
    }

    /// Sample the `n`-th wavefunction over an array of positions.
    pub fn sample_wf<S>(&self, n: usize, x: &Arr1<S>)
        -> Result<nd::Array1<f64>, ParamError>
    where S: nd::Data<Elem = f64>
    {
        ParamError::check_level(n)?;
        Ok(x.mapv(|xk| wavefunction(n, self.length, self.x0, xk)))
    }

    /// Sample the `n`-th probability density over an array of positions.
    pub fn sample_density<S>(&self, n: usize, x: &Arr1<S>)
        -> Result<nd::Array1<f64>, ParamError>
    where S: nd::Data<Elem = f64>
    {
        self.sample_wf(n, x).map(|q| q.mapv(|qk| qk * qk))
    }
}

/// Energy of the `n`-th level of a well of width `length`, with *ħ* = 1.
///
/// Level `n = 0` is not a state and gives zero.
pub fn energy(n: usize, length: f64, mass: f64) -> f64 {
    (n as f64 * PI / length).powi(2) / (2.0 * mass)
}

/// Value of the `n`-th wavefunction of a well covering `[x0, x0 + length]`.
pub fn wavefunction(n: usize, length: f64, x0: f64, x: f64) -> f64 {
    let u = x - x0;
    if (0.0..=length).contains(&u) {
        (2.0 / length).sqrt() * (n as f64 * PI * u / length).sin()
    } else {
        0.0
    }
}

/// Probability density of the `n`-th level of a well covering
/// `[x0, x0 + length]`.
pub fn density(n: usize, length: f64, x0: f64, x: f64) -> f64 {
    wavefunction(n, length, x0, x).powi(2)
}
