//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when a system is configured with physically meaningless or
/// numerically unusable parameters.
///
/// All of these are checked before any matrix is built.
#[derive(Debug, Error)]
pub enum ParamError {
    /// Returned when fewer than two grid points are requested.
    #[error("grid must have at least 2 points; got {0}")]
    BadGridSize(usize),

    /// Returned when the interval length is non-positive or non-finite.
    #[error("interval length must be positive and finite; got {0}")]
    BadLength(f64),

    /// Returned when the grid spacing is non-positive or non-finite.
    #[error("grid spacing must be positive and finite; got {0}")]
    BadSpacing(f64),

    /// Returned when the particle mass is non-positive or non-finite.
    #[error("particle mass must be positive and finite; got {0}")]
    BadMass(f64),

    /// Returned when the potential coupling is non-finite.
    #[error("charge must be finite; got {0}")]
    BadCharge(f64),

    /// Returned when an analytic level index of 0 is requested.
    #[error("box levels are counted from 1; got {0}")]
    BadLevel(usize),

    /// Returned when the potential evaluates to a non-finite value somewhere
    /// on the grid.
    #[error("potential is not finite at grid index {index}; got {v}")]
    NonFinitePotential {
        /// Grid index.
        index: usize,
        /// Offending potential value.
        v: f64,
    },
}

impl ParamError {
    pub(crate) fn check_grid_size(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::BadGridSize(n))
    }

    pub(crate) fn check_length(length: f64) -> Result<(), Self> {
        (length > 0.0 && length.is_finite())
            .then_some(()).ok_or(Self::BadLength(length))
    }

    pub(crate) fn check_spacing(dx: f64) -> Result<(), Self> {
        (dx > 0.0 && dx.is_finite())
            .then_some(()).ok_or(Self::BadSpacing(dx))
    }

    pub(crate) fn check_mass(mass: f64) -> Result<(), Self> {
        (mass > 0.0 && mass.is_finite())
            .then_some(()).ok_or(Self::BadMass(mass))
    }

    pub(crate) fn check_charge(charge: f64) -> Result<(), Self> {
        charge.is_finite().then_some(()).ok_or(Self::BadCharge(charge))
    }

    pub(crate) fn check_level(n: usize) -> Result<(), Self> {
        (n != 0).then_some(()).ok_or(Self::BadLevel(n))
    }

    pub(crate) fn check_potential<S>(V: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        match V.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            Some((index, &v)) => Err(Self::NonFinitePotential { index, v }),
            None => Ok(()),
        }
    }
}

/// Returned from spatial eigensolver functions.
#[derive(Debug, Error)]
pub enum XError {
    /// [`ParamError`]
    #[error("parameter error: {0}")]
    Param(#[from] ParamError),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`LinalgError`]; raised when LAPACK fails to diagonalize the
    /// Hamiltonian.
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_checks() {
        assert!(ParamError::check_grid_size(2).is_ok());
        assert!(matches!(
            ParamError::check_grid_size(1),
            Err(ParamError::BadGridSize(1)),
        ));
        assert!(ParamError::check_length(0.0).is_err());
        assert!(ParamError::check_length(f64::INFINITY).is_err());
        assert!(ParamError::check_mass(-1.0).is_err());
        assert!(ParamError::check_mass(f64::NAN).is_err());
        assert!(ParamError::check_charge(-3.0).is_ok());
        assert!(ParamError::check_level(0).is_err());
    }

    #[test]
    fn potential_check_reports_index() {
        let v = nd::array![0.0, f64::INFINITY, 0.0];
        match ParamError::check_potential(&v) {
            Err(ParamError::NonFinitePotential { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn length_mismatch() {
        let a = nd::array![1.0, 2.0];
        let b = nd::array![1.0, 2.0, 3.0];
        assert!(LengthError::check(&a, &b).is_err());
        let err: XError = LengthError(2, 3).into();
        assert!(err.to_string().contains("got 2 and 3"));
    }
}
