//! The finite-difference Hamiltonian.
//!
//! The second derivative is replaced by the three-point stencil
//! ```text
//! ∂²f       f[i + 1] - 2 f[i] + f[i - 1]
//! ---  ≈   ----------------------------
//! ∂x²                 δx²
//! ```
//! so that, with *ħ* = 1, the Hamiltonian becomes tridiagonal:
//! ```text
//! H[i, i]     = -2 t + V[i]
//! H[i, i ± 1] = t
//! t           = -1 / (2 m δx²)
//! ```
//! Wavefunctions are implicitly zero just beyond either end of the grid.

use ndarray as nd;
use ndarray_linalg::{ self as la, EigValshInto, EighInto };
use tracing::debug;
use crate::{
    Arr1,
    error::{ LengthError, ParamError, XError },
    solve::XResult,
};

/// A real, symmetric, tridiagonal Hamiltonian.
///
/// Only the diagonal and the (constant) off-diagonal are stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Hamiltonian {
    diag: nd::Array1<f64>,
    hop: f64,
}

impl Hamiltonian {
    /// Compute the hopping constant `t = -1 / (2 m δx²)`.
    pub fn hopping(dx: f64, mass: f64) -> f64 {
        -(2.0 * mass * dx.powi(2)).recip()
    }

    /// Build the Hamiltonian for a potential `V` sampled over even intervals
    /// `dx`.
    ///
    /// Any overall coupling (charge) must already be applied to `V`.
    pub fn new<S>(dx: f64, V: &Arr1<S>, mass: f64) -> XResult<Self>
    where S: nd::Data<Elem = f64>
    {
        ParamError::check_grid_size(V.len())?;
        ParamError::check_spacing(dx)?;
        ParamError::check_mass(mass)?;
        ParamError::check_potential(V)?;
        let hop = Self::hopping(dx, mass);
        let diag: nd::Array1<f64> = V.mapv(|Vk| -2.0 * hop + Vk);
        debug!(n = V.len(), dx, mass, hop, "assembled hamiltonian");
        Ok(Self { diag, hop })
    }

    /// Get the matrix dimension.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.diag.len() }

    /// Get a reference to the diagonal.
    pub fn diag(&self) -> &nd::Array1<f64> { &self.diag }

    /// Get the off-diagonal (hopping) element.
    pub fn hop(&self) -> f64 { self.hop }

    /// Get a single matrix element.
    ///
    /// *Panics if either index is out of bounds*.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        let n = self.len();
        assert!(i < n && j < n, "index ({i}, {j}) out of bounds for {n}×{n}");
        if i == j {
            self.diag[i]
        } else if i.abs_diff(j) == 1 {
            self.hop
        } else {
            0.0
        }
    }

    /// Expand into a dense matrix.
    pub fn to_dense(&self) -> nd::Array2<f64> {
        let n = self.len();
        let mut H: nd::Array2<f64> = nd::Array2::from_diag(&self.diag);
        H.slice_mut(nd::s![1..n, 0..n - 1]).diag_mut().fill(self.hop);
        H.slice_mut(nd::s![0..n - 1, 1..n]).diag_mut().fill(self.hop);
        H
    }

    /// Return `true` if the dense representation equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        let H = self.to_dense();
        H == H.t()
    }

    /// Compute `H v` without forming the dense matrix.
    pub fn apply<S>(&self, v: &Arr1<S>) -> XResult<nd::Array1<f64>>
    where S: nd::Data<Elem = f64>
    {
        LengthError::check(&self.diag, v)?;
        let n = self.len();
        let Hv: nd::Array1<f64>
            = (0..n)
            .map(|i| {
                let left = if i > 0 { v[i - 1] } else { 0.0 };
                let right = if i + 1 < n { v[i + 1] } else { 0.0 };
                self.diag[i] * v[i] + self.hop * (left + right)
            })
            .collect();
        Ok(Hv)
    }

    /// Diagonalize with LAPACK's symmetric eigensolver.
    ///
    /// Returns all eigenvalues and, if `compute_wf = true`, the matrix whose
    /// columns are the corresponding unit-norm eigenvectors. No particular
    /// ordering is assumed by callers.
    pub fn diagonalize(&self, compute_wf: bool)
        -> XResult<(nd::Array1<f64>, Option<nd::Array2<f64>>)>
    {
        debug!(n = self.len(), compute_wf, "diagonalizing hamiltonian");
        let H = self.to_dense();
        if compute_wf {
            let (evals, evecs): (nd::Array1<f64>, nd::Array2<f64>)
                = H.eigh_into(la::UPLO::Lower).map_err(XError::from)?;
            Ok((evals, Some(evecs)))
        } else {
            let evals: nd::Array1<f64>
                = H.eigvalsh_into(la::UPLO::Lower).map_err(XError::from)?;
            Ok((evals, None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure() {
        let V = nd::array![0.0, 1.0, 2.0, 3.0];
        let H = Hamiltonian::new(0.5, &V, 2.0).unwrap();
        let t = Hamiltonian::hopping(0.5, 2.0);
        assert_eq!(t, -1.0);
        assert_eq!(H.hop(), t);
        assert_eq!(H.len(), 4);
        for i in 0..4 {
            assert_eq!(H.get(i, i), -2.0 * t + V[i]);
        }
        assert_eq!(H.get(0, 1), t);
        assert_eq!(H.get(2, 1), t);
        assert_eq!(H.get(0, 2), 0.0);
        assert_eq!(H.get(3, 0), 0.0);
        assert!(H.is_symmetric());

        let dense = H.to_dense();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(dense[[i, j]], H.get(i, j));
                assert_eq!(dense[[i, j]], dense[[j, i]]);
            }
        }
    }

    #[test]
    fn apply_matches_dense() {
        let V = nd::array![0.3, -1.0, 0.0, 4.0, 2.5];
        let H = Hamiltonian::new(0.1, &V, 1.5).unwrap();
        let v = nd::array![1.0, -2.0, 0.5, 3.0, 1.0];
        let sparse = H.apply(&v).unwrap();
        let dense = H.to_dense().dot(&v);
        assert!(
            sparse.iter().zip(&dense).all(|(a, b)| (a - b).abs() < 1e-9)
        );
        assert!(H.apply(&nd::array![1.0, 2.0]).is_err());
    }

    #[test]
    fn two_point_system() {
        // eigenvalues of [[ε, t], [t, ε]] are ε ± t
        let H = Hamiltonian::new(1.0, &nd::array![0.0, 0.0], 1.0).unwrap();
        let (mut evals, evecs) = H.diagonalize(false).unwrap();
        assert!(evecs.is_none());
        evals.as_slice_mut().unwrap().sort_by(f64::total_cmp);
        assert!((evals[0] - 0.5).abs() < 1e-12);
        assert!((evals[1] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_invalid() {
        let V = nd::array![0.0, 0.0, 0.0];
        assert!(Hamiltonian::new(0.0, &V, 1.0).is_err());
        assert!(Hamiltonian::new(1.0, &V, 0.0).is_err());
        assert!(Hamiltonian::new(1.0, &nd::array![0.0], 1.0).is_err());
        assert!(matches!(
            Hamiltonian::new(1.0, &nd::array![0.0, f64::NAN], 1.0),
            Err(XError::Param(ParamError::NonFinitePotential { index: 1, .. })),
        ));
    }
}
