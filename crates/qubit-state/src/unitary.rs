//! 2x2 unitary matrices for single-qubit gates.
//!
//! Matrices are stored row-major and act on the amplitude pair as a row
//! vector: `[alpha', beta'] = [alpha, beta] · M`.

use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Tolerance for matrix identity and unitarity checks.
const EPSILON: f64 = 1e-10;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// A 2x2 complex matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unitary2x2 {
    /// The matrix elements in row-major order: [[a, b], [c, d]].
    pub data: [Complex64; 4],
}

impl Unitary2x2 {
    /// Create a new 2x2 matrix from its row-major elements.
    pub const fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// Diagonal matrix `diag(d0, d1)`.
    pub const fn diagonal(d0: Complex64, d1: Complex64) -> Self {
        Self::new(d0, ZERO, ZERO, d1)
    }

    /// The identity matrix.
    pub const fn identity() -> Self {
        Self::diagonal(ONE, ONE)
    }

    /// Hadamard: `(1/√2)·[[1, 1], [1, -1]]`.
    pub fn h() -> Self {
        let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
        Self::new(s, s, s, -s)
    }

    /// Pauli-X (NOT): `[[0, 1], [1, 0]]`.
    pub const fn x() -> Self {
        Self::new(ZERO, ONE, ONE, ZERO)
    }

    /// Pauli-Y: `[[0, -i], [i, 0]]`.
    pub fn y() -> Self {
        Self::new(ZERO, -I, I, ZERO)
    }

    /// Pauli-Z: `[[1, 0], [0, -1]]`.
    pub fn z() -> Self {
        Self::diagonal(ONE, -ONE)
    }

    /// S gate (sqrt(Z)): `[[1, 0], [0, i]]`.
    pub const fn s() -> Self {
        Self::diagonal(ONE, I)
    }

    /// S-dagger gate.
    pub fn sdg() -> Self {
        Self::diagonal(ONE, -I)
    }

    /// T gate (fourth root of Z): `[[1, 0], [0, e^{iπ/4}]]`.
    pub fn t() -> Self {
        Self::p(PI / 4.0)
    }

    /// T-dagger gate.
    pub fn tdg() -> Self {
        Self::p(-PI / 4.0)
    }

    /// Rotation around the X axis.
    pub fn rx(theta: f64) -> Self {
        let c = Complex64::new((theta / 2.0).cos(), 0.0);
        let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());
        Self::new(c, neg_i_s, neg_i_s, c)
    }

    /// Rotation around the Y axis.
    pub fn ry(theta: f64) -> Self {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        Self::new(
            Complex64::new(c, 0.0),
            Complex64::new(-s, 0.0),
            Complex64::new(s, 0.0),
            Complex64::new(c, 0.0),
        )
    }

    /// Rotation around the Z axis.
    pub fn rz(theta: f64) -> Self {
        Self::diagonal(
            Complex64::from_polar(1.0, -theta / 2.0),
            Complex64::from_polar(1.0, theta / 2.0),
        )
    }

    /// Phase gate `P(λ) = diag(1, e^{iλ})`.
    pub fn p(lambda: f64) -> Self {
        Self::diagonal(ONE, Complex64::from_polar(1.0, lambda))
    }

    /// Matrix product `self · other`.
    #[allow(clippy::many_single_char_names)]
    pub fn mul(&self, other: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Self {
        let [a, b, c, d] = self.data;
        Self::new(a.conj(), c.conj(), b.conj(), d.conj())
    }

    /// Row-vector product `[alpha, beta] · self`.
    #[inline]
    pub fn apply_row(&self, alpha: Complex64, beta: Complex64) -> (Complex64, Complex64) {
        let [a, b, c, d] = self.data;
        (alpha * a + beta * c, alpha * b + beta * d)
    }

    /// Whether this matrix is exactly the identity, within [`EPSILON`].
    ///
    /// Unlike a compiler's identity check, global phase is not ignored here:
    /// `-I` changes the stored amplitudes and is not the identity.
    pub fn is_identity(&self) -> bool {
        self.data
            .iter()
            .zip(Self::identity().data.iter())
            .all(|(m, e)| (m - e).norm() < EPSILON)
    }

    /// Whether `self · self†` is the identity.
    pub fn is_unitary(&self) -> bool {
        self.mul(&self.dagger()).is_identity()
    }
}

impl Default for Unitary2x2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Unitary2x2 {
    type Output = Self;

    #[allow(clippy::needless_pass_by_value)]
    fn mul(self, rhs: Self) -> Self::Output {
        Unitary2x2::mul(&self, &rhs)
    }
}
