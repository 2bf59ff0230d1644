//! Functions to compute solutions to the one-dimensional, time-independent
//! Schrödinger equation (TISE) by direct diagonalization of the
//! finite-difference [`Hamiltonian`].
//!
//! ```
//! use fdbox::{ params::Params, potential::Free, solve::System };
//!
//! let sys = System::new(&Params::default(), &Free).unwrap();
//! let sols = sys.solve(true).unwrap();
//! assert!(sols.windows(2).all(|w| w[0].e <= w[1].e));
//! let p0 = sols[0].density().unwrap();
//! assert!((p0.sum() * sys.get_dx() - 1.0).abs() < 1e-6);
//! ```

use std::cmp;
use ndarray as nd;
use tracing::{ trace, warn };
use crate::{
    Arr1,
    error::{ LengthError, ParamError, XError },
    grid::Grid,
    hamiltonian::Hamiltonian,
    params::Params,
    potential::Potential,
    utils::{ node_count, wf_expect, wf_norm },
    DEF_PHASE_EPSILON,
};

pub type XResult<T> = Result<T, XError>;

/// A single solution to the TISE.
///
/// This struct is usually only returned by a solver function; you probably
/// won't ever instantiate it yourself. The wavefunction is allowed to be
/// missing in the case that `compute_wf = false` is passed to a solver
/// function. When present, it is normalized such that `Σ |wf|² dx = 1`.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Energy
    pub e: f64,
    /// Wavefunction
    pub wf: Option<nd::Array1<f64>>,
}

impl Solution {
    /// Compare two `Solution`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }

    /// Probability density `|wf|²`.
    pub fn density(&self) -> Option<nd::Array1<f64>> {
        self.wf.as_ref().map(|wf| wf.mapv(|q| q * q))
    }

    /// Probability per grid cell, `dx |wf|²`, which sums to 1.
    pub fn probability_mass(&self, dx: f64) -> Option<nd::Array1<f64>> {
        self.wf.as_ref().map(|wf| wf.mapv(|q| dx * q * q))
    }

    /// Discrete norm `Σ |wf|² dx`.
    pub fn norm(&self, dx: f64) -> Option<f64> {
        self.wf.as_ref().map(|wf| wf_norm(wf, dx))
    }

    /// Number of nodes in the classically allowed region of `V`.
    pub fn node_count<S>(&self, V: &Arr1<S>) -> Option<usize>
    where S: nd::Data<Elem = f64>
    {
        self.wf.as_ref().map(|wf| node_count(wf, V, self.e))
    }

    /// Expectation value of position.
    pub fn expect_x<S>(&self, x: &Arr1<S>, dx: f64) -> Option<f64>
    where S: nd::Data<Elem = f64>
    {
        self.wf.as_ref().map(|wf| wf_expect(x, wf, dx))
    }
}

// flip the sign of an eigenvector so that its first non-negligible component
// is positive
fn fix_phase(v: &mut nd::Array1<f64>) {
    let vmax = v.iter().fold(0.0_f64, |acc, vk| acc.max(vk.abs()));
    let lead
        = v.iter()
        .find(|vk| vk.abs() > DEF_PHASE_EPSILON * vmax)
        .copied()
        .unwrap_or(0.0);
    if lead < 0.0 { v.map_inplace(|vk| { *vk = -*vk; }); }
}

// sort eigenpairs by ascending energy and convert unit-norm eigenvectors into
// wavefunctions normalized on the grid
fn collect_sorted(
    dx: f64,
    evals: nd::Array1<f64>,
    evecs: Option<nd::Array2<f64>>,
) -> Vec<Solution>
{
    let mut order: Vec<usize> = (0..evals.len()).collect();
    order.sort_by(|&i, &j| evals[i].total_cmp(&evals[j]));
    trace!(?order, "sorted eigenvalues");
    let scale = dx.sqrt().recip();
    order.into_iter()
        .map(|k| {
            let wf
                = evecs.as_ref()
                .map(|vecs| {
                    let mut wf: nd::Array1<f64>
                        = vecs.column(k).mapv(|vk| scale * vk);
                    fix_phase(&mut wf);
                    wf
                });
            Solution { e: evals[k], wf }
        })
        .collect()
}

/// Compute the (grid resolution-limited) spectrum of bound states for a
/// particle of mass `mass` in a potential `V`, by direct diagonalization of
/// the finite-difference Hamiltonian.
///
/// Assumes that `V` is sampled over even intervals `dx` and already includes
/// any coupling constant.
///
/// Solutions are returned in order of non-decreasing energy. Pass
/// `compute_wf = false` to only calculate energies.
pub fn solve_fd<S>(dx: f64, V: &Arr1<S>, mass: f64, compute_wf: bool)
    -> XResult<Vec<Solution>>
where S: nd::Data<Elem = f64>
{
    let H = Hamiltonian::new(dx, V, mass)?;
    let (evals, evecs) = H.diagonalize(compute_wf)?;
    Ok(collect_sorted(dx, evals, evecs))
}

/// Collect the wavefunctions of several solutions into a single array, one
/// state per row.
///
/// Returns `None` if any solution lacks a wavefunction or if the solutions
/// disagree on grid size.
pub fn wavefunctions(sols: &[Solution]) -> Option<nd::Array2<f64>> {
    let views: Vec<nd::ArrayView1<f64>>
        = sols.iter()
        .map(|sol| sol.wf.as_ref().map(|wf| wf.view()))
        .collect::<Option<_>>()?;
    nd::stack(nd::Axis(0), &views).ok()
}

/// Like [`wavefunctions`], but for probability densities.
pub fn densities(sols: &[Solution]) -> Option<nd::Array2<f64>> {
    wavefunctions(sols).map(|wfs| wfs.mapv(|q| q * q))
}

/// Record of coordinate and potential arrays, along with a particle mass.
///
/// Arrays borrowed from this type are guaranteed to have the same length and
/// to be sampled (or generated) for a coordinate grid with uniform spacing.
#[derive(Clone, Debug)]
pub struct System {
    // coordinate grid
    grid: Grid,
    // potential array, including coupling
    V: nd::Array1<f64>,
    // particle mass
    mass: f64,
}

impl System {
    /// Create a new `System` from a set of parameters and a potential.
    ///
    /// The potential is sampled on the grid and multiplied by
    /// [`Params::charge`].
    pub fn new<P>(params: &Params, V: &P) -> XResult<Self>
    where P: Potential + ?Sized
    {
        let grid = Grid::from_params(params)?;
        let q = params.charge;
        let V: nd::Array1<f64>
            = V.sample(grid.get_x().view()).mapv(|Vk| q * Vk);
        ParamError::check_potential(&V)?;
        Ok(Self { grid, V, mass: params.mass })
    }

    /// Create a new `System` from bare coordinate and potential arrays.
    pub fn from_arrays(x: nd::Array1<f64>, V: nd::Array1<f64>, mass: f64)
        -> XResult<Self>
    {
        LengthError::check(&x, &V)?;
        ParamError::check_mass(mass)?;
        ParamError::check_potential(&V)?;
        let grid = Grid::from_array(x)?;
        Ok(Self { grid, V, mass })
    }

    /// Get a reference to the coordinate grid.
    pub fn grid(&self) -> &Grid { &self.grid }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { self.grid.get_x() }

    /// Get a reference to the potential array.
    pub fn get_V(&self) -> &nd::Array1<f64> { &self.V }

    /// Get the coordinate array grid spacing.
    pub fn get_dx(&self) -> f64 { self.grid.spacing() }

    /// Get the particle mass.
    pub fn mass(&self) -> f64 { self.mass }

    /// Get the length of the coordinate and potential arrays.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.grid.len() }

    /// Build the finite-difference Hamiltonian.
    pub fn hamiltonian(&self) -> XResult<Hamiltonian> {
        Hamiltonian::new(self.get_dx(), &self.V, self.mass)
    }

    /// Thin interface to [`solve_fd`].
    pub fn solve(&self, compute_wf: bool) -> XResult<Vec<Solution>> {
        solve_fd(self.get_dx(), &self.V, self.mass, compute_wf)
    }

    /// Like [`Self::solve`], but keep only the lowest `levels` solutions.
    pub fn solve_levels(&self, levels: usize, compute_wf: bool)
        -> XResult<Vec<Solution>>
    {
        if levels > self.len() {
            warn!(
                levels,
                n = self.len(),
                "requested more levels than grid points; truncating"
            );
        }
        let mut sols = self.solve(compute_wf)?;
        sols.truncate(levels);
        Ok(sols)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;
    use crate::potential::{ Barrier, Free, Harmonic };

    // exact eigenvalues of the free N-point Dirichlet stencil
    fn discrete_free_energy(k: usize, n: usize, dx: f64, mass: f64) -> f64 {
        let theta = k as f64 * PI / (n as f64 + 1.0);
        (1.0 - theta.cos()) / (mass * dx.powi(2))
    }

    #[test]
    fn free_particle_matches_discrete_spectrum() {
        let sys = System::new(&Params::default(), &Free).unwrap();
        let sols = sys.solve(false).unwrap();
        assert_eq!(sols.len(), 100);
        for (k, sol) in sols.iter().enumerate() {
            let expected = discrete_free_energy(k + 1, 100, sys.get_dx(), 1.0);
            assert!((sol.e - expected).abs() < 1e-10 * expected.max(1.0));
            assert!(sol.wf.is_none());
        }
    }

    #[test]
    fn ground_state_near_continuum() {
        let sys = System::new(&Params::default(), &Free).unwrap();
        let e0 = sys.solve(false).unwrap()[0].e;
        let exact = PI.powi(2) / (2.0 * 100.0_f64.powi(2));
        assert!(((e0 - exact) / exact).abs() < 0.05);
    }

    #[test]
    fn sorted_and_normalized() {
        let params = Params::default().with_n(64).with_length(3.0)
            .with_mass(2.5);
        let pot = Barrier { x0: 0.3, width: 0.5, height: 40.0 };
        let sys = System::new(&params, &pot).unwrap();
        let dx = sys.get_dx();
        let sols = sys.solve(true).unwrap();
        assert!(sols.windows(2).all(|w| w[0].e <= w[1].e));
        for sol in sols.iter() {
            assert!((sol.norm(dx).unwrap() - 1.0).abs() < 1e-6);
            let mass = sol.probability_mass(dx).unwrap();
            assert!(mass.iter().all(|p| *p >= 0.0));
            assert!((mass.sum() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn eigenpairs_satisfy_hamiltonian() {
        let params = Params::default().with_n(50).with_length(10.0);
        let sys = System::new(&params, &Harmonic { k: 1.0, x0: 0.0 }).unwrap();
        let H = sys.hamiltonian().unwrap();
        for sol in sys.solve(true).unwrap().iter().take(10) {
            let wf = sol.wf.as_ref().unwrap();
            let Hwf = H.apply(wf).unwrap();
            let resid
                = Hwf.iter().zip(wf)
                .map(|(hq, q)| (hq - sol.e * q).powi(2))
                .sum::<f64>()
                .sqrt();
            assert!(resid < 1e-8, "residual {resid} for e = {}", sol.e);
        }
    }

    #[test]
    fn harmonic_level_spacing() {
        // ω = 1: levels at (n + 1/2)
        let params = Params::default().with_n(400).with_length(20.0);
        let sys = System::new(&params, &Harmonic::from_frequency(1.0, 1.0, 0.0))
            .unwrap();
        let sols = sys.solve_levels(5, true).unwrap();
        assert_eq!(sols.len(), 5);
        for (n, sol) in sols.iter().enumerate() {
            assert!((sol.e - (n as f64 + 0.5)).abs() < 1e-2);
            assert_eq!(sol.node_count(sys.get_V()), Some(n));
        }
    }

    #[test]
    fn ground_state_symmetric_and_unimodal() {
        let sys = System::new(&Params::default(), &Free).unwrap();
        let sols = sys.solve(true).unwrap();
        let p0 = sols[0].density().unwrap();
        let n = p0.len();
        for i in 0..n {
            assert!((p0[i] - p0[n - 1 - i]).abs() < 1e-10);
        }
        let imax
            = p0.iter().enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
            .unwrap();
        assert!((imax as f64 - (n as f64 - 1.0) / 2.0).abs() <= 0.5);
        assert!((0..imax).all(|i| p0[i + 1] >= p0[i] - 1e-12));
        assert!((imax..n - 1).all(|i| p0[i + 1] <= p0[i] + 1e-12));
        assert!(sols[0].wf.as_ref().unwrap().iter().all(|q| *q > 0.0));
    }

    #[test]
    fn node_counts_increase() {
        let sys = System::new(&Params::default(), &Free).unwrap();
        let sols = sys.solve_levels(8, true).unwrap();
        for (n, sol) in sols.iter().enumerate() {
            assert_eq!(sol.node_count(sys.get_V()), Some(n));
        }
    }

    #[test]
    fn centered_states_have_zero_mean_position() {
        let sys = System::new(&Params::default(), &Free).unwrap();
        for sol in sys.solve_levels(4, true).unwrap() {
            let xbar = sol.expect_x(sys.get_x(), sys.get_dx()).unwrap();
            assert!(xbar.abs() < 1e-8);
        }
    }

    #[test]
    fn two_point_grid() {
        let params = Params::default().with_n(2).with_length(2.0);
        let sys = System::new(&params, &Free).unwrap();
        let sols = sys.solve(true).unwrap();
        assert_eq!(sols.len(), 2);
        // ε ± t with ε = 1/(m L²), t = -1/(2 m L²)
        assert!((sols[0].e - 0.125).abs() < 1e-12);
        assert!((sols[1].e - 0.375).abs() < 1e-12);
        for sol in sols.iter() {
            assert!((sol.norm(2.0).unwrap() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn phase_convention() {
        let sys = System::new(&Params::default().with_n(30), &Free).unwrap();
        for sol in sys.solve(true).unwrap() {
            let wf = sol.wf.unwrap();
            let lead = wf.iter().find(|q| q.abs() > 1e-9).unwrap();
            assert!(*lead > 0.0);
        }
    }

    #[test]
    fn stacked_densities() {
        let sys = System::new(&Params::default().with_n(20), &Free).unwrap();
        let sols = sys.solve_levels(3, true).unwrap();
        let p = densities(&sols).unwrap();
        assert_eq!(p.dim(), (3, 20));
        for row in p.rows() {
            assert!((row.sum() * sys.get_dx() - 1.0).abs() < 1e-6);
        }
        let energies_only = sys.solve_levels(3, false).unwrap();
        assert!(densities(&energies_only).is_none());
    }

    #[test]
    fn charge_scales_potential() {
        let params = Params::default().with_n(10).with_charge(-2.0);
        let sys = System::new(&params, &|x: f64| x).unwrap();
        assert!(
            sys.get_V().iter().zip(sys.get_x())
                .all(|(v, x)| (v + 2.0 * x).abs() < 1e-12)
        );
    }

    #[test]
    fn invalid_configurations() {
        assert!(System::new(&Params::default().with_n(1), &Free).is_err());
        assert!(System::new(&Params::default().with_length(0.0), &Free).is_err());
        assert!(System::new(&Params::default().with_mass(-2.0), &Free).is_err());
        assert!(matches!(
            System::new(&Params::default(), &|x: f64| x.ln()),
            Err(XError::Param(ParamError::NonFinitePotential { .. })),
        ));
        assert!(matches!(
            System::from_arrays(nd::array![0.0, 1.0], nd::array![0.0], 1.0),
            Err(XError::Length(_)),
        ));
        assert!(matches!(
            System::from_arrays(
                nd::array![0.0, 1.0, 2.0, 4.0], nd::Array1::zeros(4), 1.0),
            Err(XError::Param(ParamError::BadSpacing(_))),
        ));
    }
}
