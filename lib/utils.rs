//! Miscellaneous tools for working with sampled wavefunctions.
//!
//! Wavefunction norms and inner products here use the plain Riemann sum
//! `Σ f[i] dx`, which is the inner product under which the eigenvectors of the
//! finite-difference Hamiltonian are orthonormal (up to a factor of `dx`).

use ndarray::{ self as nd, Ix1 };
use ndarray_linalg::Scalar;
use num_traits::{ Float, Zero };

/// Integrate using a left Riemann sum over all points.
pub fn riemann<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    y.iter().fold(A::zero(), |acc, yk| acc + *yk) * dx
}

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    (dx / two) * (y[0] + two * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Calculate the norm `Σ |q|² dx` of a wavefunction.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A::Real) -> A::Real
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    q.iter().map(|qk| qk.square()).fold(A::Real::zero(), |acc, qk2| acc + qk2)
        * dx
}

/// Calculate the inner product `Σ q* p dx` of two wavefunctions.
///
/// Extra elements in the longer array are ignored.
pub fn wf_dot<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A::Real,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Scalar,
{
    q.iter().zip(p)
        .fold(A::zero(), |acc, (qk, pk)| acc + qk.conj() * *pk)
        * A::from_real(dx)
}

/// Renormalize a wavefunction in place.
///
/// Does nothing to a wavefunction that is identically zero.
pub fn wf_renormalize<S, A>(q: &mut nd::ArrayBase<S, Ix1>, dx: A::Real)
where
    S: nd::DataMut<Elem = A>,
    A: Scalar,
{
    let norm = wf_norm(q, dx);
    if norm > A::Real::zero() {
        let norm = A::from_real(Float::sqrt(norm));
        q.iter_mut().for_each(|qk| { *qk /= norm; });
    }
}

/// Return a normalized copy of a wavefunction.
pub fn wf_normalized<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A::Real)
    -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let mut new = q.to_owned();
    wf_renormalize(&mut new, dx);
    new
}

/// Calculate the expectation value of position `Σ x |q|² dx`.
pub fn wf_expect<S, T>(
    x: &nd::ArrayBase<S, Ix1>,
    q: &nd::ArrayBase<T, Ix1>,
    dx: f64,
) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    x.iter().zip(q).map(|(xk, qk)| xk * qk * qk).sum::<f64>() * dx
}

/// Count the sign changes in a sampled function, skipping over samples that
/// are exactly zero.
pub fn sign_changes<S>(q: &nd::ArrayBase<S, Ix1>) -> usize
where S: nd::Data<Elem = f64>
{
    q.iter().copied()
        .filter(|qk| *qk != 0.0)
        .fold((0, None), |(count, prev): (usize, Option<f64>), qk| {
            match prev {
                Some(p) if p * qk < 0.0 => (count + 1, Some(qk)),
                _ => (count, Some(qk)),
            }
        })
        .0
}

/// Return the number of nodes in the wavefunction within the classically
/// allowed region.
///
/// Samples that are exactly zero are skipped, so a node landing on a grid
/// point is counted once. A sign change between successive non-zero samples is
/// counted only if the potential at their midpoint (taken as the mean of the
/// two potential samples) lies below `E`, which keeps round-off in the
/// exponentially small tails from registering as nodes.
pub fn node_count<S, T>(q: &nd::ArrayBase<S, Ix1>, V: &nd::ArrayBase<T, Ix1>, E: f64)
    -> usize
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    q.iter().copied().zip(V.iter().copied())
        .filter(|(qk, _)| *qk != 0.0)
        .fold(
            (0, None),
            |(count, prev): (usize, Option<(f64, f64)>), (qk, Vk)| {
                match prev {
                    Some((qj, Vj)) if qj * qk < 0.0 && (Vj + Vk) / 2.0 < E
                        => (count + 1, Some((qk, Vk))),
                    _ => (count, Some((qk, Vk))),
                }
            },
        )
        .0
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;

    #[test]
    fn integrals() {
        let y = nd::array![1.0, 2.0, 3.0];
        assert_eq!(riemann(&y, 0.5), 3.0);
        assert_eq!(trapz(&y, 0.5), 2.0);
    }

    #[test]
    fn normalization() {
        let mut q: nd::Array1<f64> = nd::array![3.0, 4.0];
        assert_eq!(wf_norm(&q, 1.0), 25.0);
        wf_renormalize(&mut q, 4.0);
        assert!((wf_norm(&q, 4.0) - 1.0).abs() < 1e-15);
        let zero: nd::Array1<f64> = nd::Array1::zeros(4);
        assert_eq!(wf_normalized(&zero, 1.0), zero);
    }

    #[test]
    fn sines_are_orthogonal() {
        let n = 50;
        let dx = 1.0 / (n as f64 + 1.0);
        let x: nd::Array1<f64>
            = (1..=n).map(|i| i as f64 * dx).collect();
        let s1 = x.mapv(|xk| (PI * xk).sin());
        let s2 = x.mapv(|xk| (2.0 * PI * xk).sin());
        assert!(wf_dot(&s1, &s2, dx).abs() < 1e-12);
        assert!((wf_dot(&s1, &s1, dx) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn expectation() {
        let x = nd::array![-1.0, 0.0, 1.0, 2.0];
        let q = nd::array![0.0, 0.0, 1.0, 0.0];
        assert_eq!(wf_expect(&x, &q, 1.0), 1.0);
    }

    #[test]
    fn counting_nodes() {
        let q = nd::array![1.0, 0.5, 0.0, -0.5, -1.0, 2.0];
        assert_eq!(sign_changes(&q), 2);
        let V: nd::Array1<f64> = nd::Array1::zeros(6);
        assert_eq!(node_count(&q, &V, 1.0), 2);

        // node exactly on a grid point
        let q = nd::array![1.0, 0.0, -1.0];
        let V: nd::Array1<f64> = nd::Array1::zeros(3);
        assert_eq!(node_count(&q, &V, 1.0), 1);
        assert_eq!(node_count(&nd::array![1.0, 0.0, 1.0], &V, 1.0), 0);
        assert_eq!(node_count(&nd::array![0.0, 0.0, 0.0], &V, 1.0), 0);

        let tails = nd::array![1e-17, -1e-17, 1.0, 2.0, -1.0, -1e-17, 1e-17];
        let Vw = nd::array![9.0, 9.0, 0.0, 0.0, 0.0, 9.0, 9.0];
        assert_eq!(sign_changes(&tails), 4);
        assert_eq!(node_count(&tails, &Vw, 1.0), 1);
    }
}
