//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Discretization](#discretization)
//! - [Normalization](#normalization)
//! - [Units](#units)
//!
//! # Background
//! Solution of the one-dimensional time-independent Schrödinger equation (TISE)
//! amounts to finding eigenpairs of the Hamiltonian operator
//! ```text
//!       ħ²  ∂²
//! H = - --- --- + V(x)
//!       2 m ∂x²
//! ```
//! for some (conservative) potential *V*(*x*) and particle mass *m*. Since *H*
//! is Hermitian, its eigenvalues are real, and for real *V* the associated
//! wavefunctions may be chosen real-valued as well.
//!
//! For a particle confined to an interval of length *L* by infinitely high
//! walls (*V* = 0 inside, ∞ outside), the solutions are known in closed form;
//! see [`analytic`][crate::analytic]. For anything else, a numerical method is
//! needed.
//!
//! # Discretization
//! Sampling the interval on a uniform grid
//! ```text
//! x[i] = x₀ + i a, i ∊ {0, ..., N - 1}
//! ```
//! and replacing the second derivative with the three-point central difference
//! turns *H* into an *N*×*N* real symmetric tridiagonal matrix
//! ```text
//! H[i, i]     = -2 t + V(x[i])
//! H[i, i ± 1] = t,        t = - ħ² / (2 m a²)
//! ```
//! with all other elements zero. Truncating the stencil at either end of the
//! grid is equivalent to imposing *ψ* = 0 at *x*₀ - *a* and *x*₀ + *N a*,
//! i.e. placing hard walls one spacing beyond the grid. For *V* = 0 the
//! eigenvalues are then known exactly,
//! ```text
//!        1 - cos(k π / (N + 1))
//! E[k] = ----------------------,   k = 1, ..., N
//!                m a²
//! ```
//! which approach the continuum values *k*²*π*²*ħ*²/2*m*((*N* + 1)*a*)² as the
//! grid is refined. The discretization error in each level grows roughly as
//! (*k a*)².
//!
//! All *N* eigenpairs are computed at once with LAPACK's symmetric eigensolver
//! and then sorted so that the ground state comes first.
//!
//! # Normalization
//! The eigensolver returns unit vectors *v* with Σ *v*[*i*]² = 1. Dividing by
//! √*a* gives a sampled wavefunction whose Riemann sum approximates the
//! continuum normalization:
//! ```text
//! ψ[i] = v[i] / √a   ⇒   Σ |ψ[i]|² a = 1
//! ```
//! Accordingly, two distinct quantities can be formed from each state:
//! - the probability *density* |*ψ*\[*i*\]|², with dimensions of inverse
//!   length, which is the discrete analogue of |*ψ*(*x*)|²; and
//! - the probability *mass* *a* |*ψ*\[*i*\]|², the dimensionless probability of
//!   finding the particle in the cell around *x*\[*i*\], which sums to 1.
//!
//! [`Solution::density`][crate::solve::Solution::density] returns the former
//! and [`Solution::probability_mass`][crate::solve::Solution::probability_mass]
//! the latter.
//!
//! # Units
//! Everything here works with *ħ* = 1. Choosing the particle mass as the unit
//! of mass and some length *a* as the unit of length fixes the unit of energy
//! to *ħ*²/*m a*² and the unit of time to *ħ*/*E*. For example, an electron in
//! a 5 nm box, measured in units of the box width, has a ground state energy
//! of *π*²/2 natural units, or about 15 meV; see [`units`][crate::units].
