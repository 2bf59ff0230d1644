//! Uniform coordinate grids.

use ndarray as nd;
use crate::{
    error::ParamError,
    params::Params,
};

/// Relative tolerance on the deviation of any interval from the first when
/// wrapping a bare coordinate array.
pub const SPACING_RTOL: f64 = 1e-6;

/// An ordered set of evenly spaced sample positions.
///
/// Grids always hold at least two points, so the spacing is well defined.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    x: nd::Array1<f64>,
    dx: f64,
}

impl Grid {
    /// Create a new `Grid` from "linspace-style" arguments (start, inclusive
    /// end, and a number of points).
    pub fn linspace(start: f64, end: f64, n: usize) -> Result<Self, ParamError> {
        ParamError::check_grid_size(n)?;
        ParamError::check_length(end - start)?;
        let x: nd::Array1<f64> = nd::Array1::linspace(start, end, n);
        let dx = x[1] - x[0];
        ParamError::check_spacing(dx)?;
        Ok(Self { x, dx })
    }

    /// Create the grid described by a set of [`Params`].
    pub fn from_params(params: &Params) -> Result<Self, ParamError> {
        params.validate()?;
        let (start, end) = params.bounds();
        Self::linspace(start, end, params.n)
    }

    /// Wrap a bare coordinate array.
    ///
    /// Every interval must match the first to within a relative tolerance of
    /// [`SPACING_RTOL`]; otherwise the offending interval is returned as
    /// [`ParamError::BadSpacing`].
    pub fn from_array(x: nd::Array1<f64>) -> Result<Self, ParamError> {
        ParamError::check_grid_size(x.len())?;
        let dx = x[1] - x[0];
        ParamError::check_spacing(dx)?;
        x.windows(2).into_iter()
            .map(|w| w[1] - w[0])
            .find(|h| !((h - dx).abs() <= SPACING_RTOL * dx))
            .map_or(Ok(()), |h| Err(ParamError::BadSpacing(h)))?;
        Ok(Self { x, dx })
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the grid spacing.
    pub fn spacing(&self) -> f64 { self.dx }

    /// Get the number of grid points.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.x.len() }

    /// Get the first grid point.
    pub fn start(&self) -> f64 { self.x[0] }

    /// Get the last grid point.
    pub fn end(&self) -> f64 { self.x[self.x.len() - 1] }

    /// Distance between the first and last grid points.
    pub fn span(&self) -> f64 { self.end() - self.start() }

    /// Midpoint of the grid.
    pub fn center(&self) -> f64 { (self.start() + self.end()) / 2.0 }
}
