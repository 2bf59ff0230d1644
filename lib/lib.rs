#![allow(non_snake_case)]

//! Provides functions and higher-level constructs for solution of the
//! one-dimensional, time-independent Schrödinger equation by direct
//! diagonalization of a finite-difference Hamiltonian, along with closed-form
//! references for the infinite square well.
//!
//! Provides implementations for the following:
//! - Finite-difference (three-point stencil) Hamiltonian assembly for
//!   arbitrary [potentials][potential::Potential]
//! - Full-spectrum eigensolving via LAPACK, with energies sorted in ascending
//!   order and wavefunctions normalized on the grid
//! - Probability densities, node counting, and position expectation values
//! - Analytic particle-in-a-box energies and wavefunctions
//! - Conversion to and from physical units
//!
//! See [`docs`] for theoretical background.
//!
//! ```
//! use fdbox::{ analytic::Well, params::Params, potential::Free, solve::System };
//!
//! let params = Params::default();
//! let sys = System::new(&params, &Free).unwrap();
//! let ground = &sys.solve(true).unwrap()[0];
//! let exact = Well::from_params(&params).unwrap().energy(1).unwrap();
//! assert!(((ground.e - exact) / exact).abs() < 0.05);
//! ```

pub mod analytic;
pub mod error;
pub mod grid;
pub mod hamiltonian;
pub mod params;
pub mod potential;
pub mod solve;
pub mod units;
pub mod utils;

pub mod docs;

// relative magnitude below which eigenvector components are ignored when
// fixing the overall sign
pub(crate) const DEF_PHASE_EPSILON: f64 = 1e-8;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
