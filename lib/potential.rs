//! Potential energy functions.
//!
//! Anything implementing [`Potential`] can be sampled onto a grid and handed to
//! a solver; closures `Fn(f64) -> f64` qualify automatically.
//!
//! ```
//! use ndarray as nd;
//! use fdbox::potential::{ Harmonic, Potential };
//!
//! let x: nd::Array1<f64> = nd::Array1::linspace(-1.0, 1.0, 3);
//! let v = Harmonic { k: 2.0, x0: 0.0 }.sample(x.view());
//! assert_eq!(v, nd::array![1.0, 0.0, 1.0]);
//!
//! let w = (|x: f64| x.abs()).sample(x.view());
//! assert_eq!(w, nd::array![1.0, 0.0, 1.0]);
//! ```

use ndarray as nd;

/// A position-dependent energy.
pub trait Potential {
    /// Evaluate the potential at a single position.
    fn eval(&self, x: f64) -> f64;

    /// Evaluate the potential over an array of positions.
    fn sample(&self, x: nd::ArrayView1<f64>) -> nd::Array1<f64> {
        x.mapv(|xk| self.eval(xk))
    }
}

impl<F> Potential for F
where F: Fn(f64) -> f64
{
    fn eval(&self, x: f64) -> f64 { self(x) }
}

/// Identically zero; a free particle between infinite walls.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Free;

impl Potential for Free {
    fn eval(&self, _x: f64) -> f64 { 0.0 }

    fn sample(&self, x: nd::ArrayView1<f64>) -> nd::Array1<f64> {
        nd::Array1::zeros(x.len())
    }
}

/// `k (x - x0)² / 2`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Harmonic {
    /// Spring constant.
    pub k: f64,
    /// Position of the minimum.
    pub x0: f64,
}

impl Harmonic {
    /// Construct from a particle mass and angular trap frequency, so that
    /// `k = m ω²`.
    pub fn from_frequency(mass: f64, omega: f64, x0: f64) -> Self {
        Self { k: mass * omega.powi(2), x0 }
    }
}

impl Potential for Harmonic {
    fn eval(&self, x: f64) -> f64 { 0.5 * self.k * (x - self.x0).powi(2) }
}

/// `height` for `x ≥ x0`, zero otherwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    /// Position of the step edge.
    pub x0: f64,
    /// Energy offset to the right of the edge.
    pub height: f64,
}

impl Potential for Step {
    fn eval(&self, x: f64) -> f64 {
        if x >= self.x0 { self.height } else { 0.0 }
    }
}

/// `height` on the closed interval `[x0 - width/2, x0 + width/2]`, zero
/// otherwise. A negative height makes a finite well.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Barrier {
    /// Center of the barrier.
    pub x0: f64,
    /// Full width of the barrier.
    pub width: f64,
    /// Energy inside the barrier.
    pub height: f64,
}

impl Potential for Barrier {
    fn eval(&self, x: f64) -> f64 {
        if (x - self.x0).abs() <= self.width / 2.0 { self.height } else { 0.0 }
    }
}
