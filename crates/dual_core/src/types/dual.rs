//! Dual numbers for forward-mode automatic differentiation.
//!
//! A [`Dual`] carries a value together with its derivative(s) with respect to
//! one or more independent variables. Every arithmetic operation returns a new
//! Dual whose derivative follows from the chain rule.
//!
//! # Single-variable and multivariate mode
//!
//! The derivative is a [`Derivative`]: a scalar when differentiating with
//! respect to one variable, or a vector of partials when several variables
//! are seeded (see [`make_vars`](crate::multivar::make_vars)).
//!
//! # Mixed arithmetic
//!
//! Plain `f64` operands are promoted to Duals with zero derivative of the
//! matching shape, so `2.0 * x` and `x * 2.0` both work. Operands whose
//! derivatives are not conformable cannot be combined: the `try_*` methods
//! return [`DualError::NotConformable`] and the operator traits panic.
//!
//! # Usage
//!
//! ```rust
//! use dual_core::types::Dual;
//!
//! // f(x) = 3x^5 + 2x^2 - 2x^7 / x^6 at x = 2
//! use dual_core::Pow;
//! let x = Dual::variable(2.0);
//! let f = 3.0 * x.clone().pow(5.0) + 2.0 * x.clone().pow(2.0)
//!     - 2.0 * x.clone().pow(7.0) / x.pow(6.0);
//!
//! assert_eq!(f.to_string(), "100.0, 246.0");
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::Pow;

use super::derivative::{format_rounded, Derivative, DEFAULT_PRECISION};
use super::error::{DerivativeShape, DualError, Result};
use super::operand::Operand;

/// Value paired with its derivative(s).
///
/// # Fields
///
/// * `value` - The primal value
/// * `derivative` - Scalar derivative or vector of partials
///
/// # Examples
///
/// ```rust
/// use dual_core::types::Dual;
///
/// // Compute f(x) = x^2 and f'(x) = 2x at x = 3
/// let x = Dual::variable(3.0);
/// let y = &x * &x;
///
/// assert_eq!(y.value(), 9.0);
/// assert_eq!(y.derivative().as_scalar(), Some(6.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "DualRepr")
)]
pub struct Dual {
    value: f64,
    derivative: Derivative,
}

impl Dual {
    /// Creates a Dual from a value and a derivative.
    ///
    /// `f64` derivatives select single-variable mode, `Array1<f64>`
    /// derivatives multivariate mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dual_core::types::Dual;
    /// use ndarray::array;
    ///
    /// let a = Dual::new(2.0, 3.0);
    /// let b = Dual::new(2.0, array![1.0, 0.0]);
    /// assert!(a.derivative().is_scalar());
    /// assert!(!b.derivative().is_scalar());
    /// ```
    #[inline]
    pub fn new(value: f64, derivative: impl Into<Derivative>) -> Self {
        Self {
            value,
            derivative: derivative.into(),
        }
    }

    /// Creates a Dual, rejecting derivatives that cannot take part in a
    /// computation.
    ///
    /// # Errors
    ///
    /// Returns [`DualError::Construction`] for an empty vector derivative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dual_core::types::{Dual, DualError};
    /// use ndarray::Array1;
    ///
    /// let err = Dual::try_new(1.0, Array1::<f64>::zeros(0)).unwrap_err();
    /// assert!(matches!(err, DualError::Construction(_)));
    /// ```
    pub fn try_new(value: f64, derivative: impl Into<Derivative>) -> Result<Self> {
        let derivative = derivative.into();
        if let Derivative::Vector(v) = &derivative {
            if v.is_empty() {
                return Err(DualError::Construction(
                    "vector derivative must have at least one partial".to_string(),
                ));
            }
        }
        Ok(Self { value, derivative })
    }

    /// Creates a single-variable Dual with derivative 1.0.
    ///
    /// Use this for the variable being differentiated.
    #[inline]
    pub fn variable(value: f64) -> Self {
        Self::new(value, 1.0)
    }

    /// Creates a single-variable Dual with derivative 0.0.
    #[inline]
    pub fn constant(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// Returns the primal value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the derivative.
    #[inline]
    pub fn derivative(&self) -> &Derivative {
        &self.derivative
    }

    /// Returns the partial derivative with respect to variable `index`.
    ///
    /// In single-variable mode only index 0 exists.
    pub fn partial(&self, index: usize) -> Option<f64> {
        match &self.derivative {
            Derivative::Scalar(d) => (index == 0).then_some(*d),
            Derivative::Vector(v) => v.get(index).copied(),
        }
    }

    /// Returns the shape of the derivative.
    #[inline]
    pub fn shape(&self) -> DerivativeShape {
        self.derivative.shape()
    }

    /// Checks whether `self` and `other` may be combined.
    #[inline]
    pub fn is_conformable(&self, other: &Dual) -> bool {
        self.derivative.is_conformable(&other.derivative)
    }

    /// Splits the Dual into value and derivative.
    #[inline]
    pub fn into_parts(self) -> (f64, Derivative) {
        (self.value, self.derivative)
    }

    /// Applies the chain rule for a unary function.
    ///
    /// Given `f(value)` and `f'(value)`, returns the Dual of `f(self)`.
    #[inline]
    pub(crate) fn chain(&self, f_value: f64, f_slope: f64) -> Dual {
        Dual {
            value: f_value,
            derivative: self.derivative.scale(f_slope),
        }
    }

    /// Coerces `other` to a Dual with a derivative shaped like `self`'s.
    #[inline]
    fn promote(&self, other: impl Into<Operand>) -> Dual {
        other.into().into_dual(&self.derivative)
    }
}

// =============================================================================
// Checked Arithmetic (Forward Mode Chain Rule)
// =============================================================================

impl Dual {
    /// Addition: d(a + b) = da + db
    ///
    /// # Errors
    ///
    /// Returns [`DualError::NotConformable`] when the derivative shapes differ.
    pub fn try_add(&self, rhs: impl Into<Operand>) -> Result<Dual> {
        let rhs = self.promote(rhs);
        let derivative = self
            .derivative
            .zip_with(&rhs.derivative, |d1, d2| d1 + d2)?;
        Ok(Dual::new(self.value + rhs.value, derivative))
    }

    /// Subtraction: d(a - b) = da - db
    ///
    /// # Errors
    ///
    /// Returns [`DualError::NotConformable`] when the derivative shapes differ.
    pub fn try_sub(&self, rhs: impl Into<Operand>) -> Result<Dual> {
        let rhs = self.promote(rhs);
        let derivative = self
            .derivative
            .zip_with(&rhs.derivative, |d1, d2| d1 - d2)?;
        Ok(Dual::new(self.value - rhs.value, derivative))
    }

    /// Reflected subtraction `lhs - self`.
    ///
    /// # Errors
    ///
    /// Returns [`DualError::NotConformable`] when the derivative shapes differ.
    pub fn try_rsub(&self, lhs: impl Into<Operand>) -> Result<Dual> {
        self.promote(lhs).try_sub(self)
    }

    /// Multiplication (product rule): d(a × b) = da × b + a × db
    ///
    /// # Errors
    ///
    /// Returns [`DualError::NotConformable`] when the derivative shapes differ.
    pub fn try_mul(&self, rhs: impl Into<Operand>) -> Result<Dual> {
        let rhs = self.promote(rhs);
        let (v1, v2) = (self.value, rhs.value);
        let derivative = self
            .derivative
            .zip_with(&rhs.derivative, |d1, d2| d1 * v2 + v1 * d2)?;
        Ok(Dual::new(v1 * v2, derivative))
    }

    /// Division (quotient rule): d(a / b) = da / b - a × db / b²
    ///
    /// # Errors
    ///
    /// Returns [`DualError::NotConformable`] when the derivative shapes differ.
    pub fn try_div(&self, rhs: impl Into<Operand>) -> Result<Dual> {
        let rhs = self.promote(rhs);
        let (v1, v2) = (self.value, rhs.value);
        let denom = v2 * v2;
        let derivative = self
            .derivative
            .zip_with(&rhs.derivative, |d1, d2| d1 / v2 - v1 * d2 / denom)?;
        Ok(Dual::new(v1 / v2, derivative))
    }

    /// Reflected division `lhs / self`.
    ///
    /// # Errors
    ///
    /// Returns [`DualError::NotConformable`] when the derivative shapes differ.
    pub fn try_rdiv(&self, lhs: impl Into<Operand>) -> Result<Dual> {
        self.promote(lhs).try_div(self)
    }

    /// Power with variable base and exponent:
    /// d(a^b) = da × b × a^(b-1) + db × ln|a| × a^b
    ///
    /// A zero base short-circuits to value 0 and keeps only the first term,
    /// since ln(0) is singular. The exponent's derivative is ignored there.
    ///
    /// # Errors
    ///
    /// Returns [`DualError::NotConformable`] when the derivative shapes differ.
    pub fn try_pow(&self, rhs: impl Into<Operand>) -> Result<Dual> {
        let rhs = self.promote(rhs);
        let (v1, v2) = (self.value, rhs.value);

        if v1 == 0.0 {
            self.derivative.check_conformable(&rhs.derivative)?;
            let slope = v2 * v1.powf(v2 - 1.0);
            return Ok(Dual::new(0.0, self.derivative.scale(slope)));
        }

        let value = v1.powf(v2);
        let base_slope = v2 * v1.powf(v2 - 1.0);
        let log_base = v1.abs().ln();
        let derivative = self.derivative.zip_with(&rhs.derivative, |d1, d2| {
            d1 * base_slope + d2 * log_base * value
        })?;
        Ok(Dual::new(value, derivative))
    }

    /// Reflected power `lhs ^ self`.
    ///
    /// For a constant base `c` this reduces to d(c^x) = dx × ln|c| × c^x.
    ///
    /// # Errors
    ///
    /// Returns [`DualError::NotConformable`] when the derivative shapes differ.
    pub fn try_rpow(&self, lhs: impl Into<Operand>) -> Result<Dual> {
        self.promote(lhs).try_pow(self)
    }
}

// =============================================================================
// Operator Traits
// =============================================================================

#[inline]
fn conformable_or_panic(result: Result<Dual>) -> Dual {
    match result {
        Ok(d) => d,
        Err(err) => panic!("{}", err),
    }
}

/// Implements an operator for every combination of `Dual`, `&Dual` and `f64`.
///
/// `$forward` handles `dual OP x`, `$reflected` handles `f64 OP dual`.
macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $forward:ident, $reflected:ident) => {
        impl $op<Dual> for Dual {
            type Output = Dual;

            #[inline]
            fn $method(self, rhs: Dual) -> Dual {
                conformable_or_panic(self.$forward(rhs))
            }
        }

        impl $op<&Dual> for Dual {
            type Output = Dual;

            #[inline]
            fn $method(self, rhs: &Dual) -> Dual {
                conformable_or_panic(self.$forward(rhs))
            }
        }

        impl $op<Dual> for &Dual {
            type Output = Dual;

            #[inline]
            fn $method(self, rhs: Dual) -> Dual {
                conformable_or_panic(self.$forward(rhs))
            }
        }

        impl $op<&Dual> for &Dual {
            type Output = Dual;

            #[inline]
            fn $method(self, rhs: &Dual) -> Dual {
                conformable_or_panic(self.$forward(rhs))
            }
        }

        impl $op<f64> for Dual {
            type Output = Dual;

            #[inline]
            fn $method(self, rhs: f64) -> Dual {
                conformable_or_panic(self.$forward(rhs))
            }
        }

        impl $op<f64> for &Dual {
            type Output = Dual;

            #[inline]
            fn $method(self, rhs: f64) -> Dual {
                conformable_or_panic(self.$forward(rhs))
            }
        }

        impl $op<Dual> for f64 {
            type Output = Dual;

            #[inline]
            fn $method(self, rhs: Dual) -> Dual {
                conformable_or_panic(rhs.$reflected(self))
            }
        }

        impl $op<&Dual> for f64 {
            type Output = Dual;

            #[inline]
            fn $method(self, rhs: &Dual) -> Dual {
                conformable_or_panic(rhs.$reflected(self))
            }
        }
    };
}

// Operators panic when the derivatives are not conformable; use the
// `try_*` methods to handle that case.
impl_binary_op!(Add, add, try_add, try_add);
impl_binary_op!(Sub, sub, try_sub, try_rsub);
impl_binary_op!(Mul, mul, try_mul, try_mul);
impl_binary_op!(Div, div, try_div, try_rdiv);
impl_binary_op!(Pow, pow, try_pow, try_rpow);

impl Neg for Dual {
    type Output = Dual;

    /// Negation: d(-a) = -da
    #[inline]
    fn neg(self) -> Dual {
        -&self
    }
}

impl Neg for &Dual {
    type Output = Dual;

    #[inline]
    fn neg(self) -> Dual {
        Dual {
            value: self.value * -1.0,
            derivative: self.derivative.scale(-1.0),
        }
    }
}

// =============================================================================
// Equality and Formatting
// =============================================================================

/// A plain number never equals a Dual: it carries no derivative.
impl PartialEq<f64> for Dual {
    #[inline]
    fn eq(&self, _other: &f64) -> bool {
        false
    }
}

impl AbsDiffEq for Dual {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.value.abs_diff_eq(&other.value, epsilon)
            && self.derivative.abs_diff_eq(&other.derivative, epsilon)
    }
}

impl RelativeEq for Dual {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.value.relative_eq(&other.value, epsilon, max_relative)
            && self
                .derivative
                .relative_eq(&other.derivative, epsilon, max_relative)
    }
}

impl fmt::Display for Dual {
    /// Renders `"<value>, <derivative>"` rounded to 4 decimals, or to the
    /// formatter's precision when one is given.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(
            f,
            "{}, {:.*}",
            format_rounded(self.value, decimals),
            decimals,
            self.derivative
        )
    }
}

// =============================================================================
// Default and Conversions
// =============================================================================

impl Default for Dual {
    fn default() -> Self {
        Self::constant(0.0)
    }
}

impl From<f64> for Dual {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DualRepr {
    value: f64,
    derivative: Derivative,
}

#[cfg(feature = "serde")]
impl TryFrom<DualRepr> for Dual {
    type Error = DualError;

    fn try_from(repr: DualRepr) -> Result<Self> {
        Dual::try_new(repr.value, repr.derivative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_variable_creation() {
        let x = Dual::variable(3.0);
        assert_eq!(x.value(), 3.0);
        assert_eq!(x.derivative(), &Derivative::Scalar(1.0));
    }

    #[test]
    fn test_constant_creation() {
        let c = Dual::constant(100.0);
        assert_eq!(c.derivative(), &Derivative::Scalar(0.0));
        assert_eq!(Dual::default(), Dual::constant(0.0));
        assert_eq!(Dual::from(100.0), c);
    }

    #[test]
    fn test_try_new_accepts_non_empty_vector() {
        let x = Dual::try_new(1.0, array![1.0, 0.0]).unwrap();
        assert_eq!(x.shape(), DerivativeShape::Vector(2));
    }

    #[test]
    fn test_try_new_rejects_empty_vector() {
        let err = Dual::try_new(1.0, ndarray::Array1::<f64>::zeros(0)).unwrap_err();
        assert!(matches!(err, DualError::Construction(_)));
    }

    #[test]
    fn test_partial() {
        let x = Dual::new(1.0, array![3.0, 2.0]);
        assert_eq!(x.partial(0), Some(3.0));
        assert_eq!(x.partial(1), Some(2.0));
        assert_eq!(x.partial(2), None);

        let y = Dual::new(1.0, 5.0);
        assert_eq!(y.partial(0), Some(5.0));
        assert_eq!(y.partial(1), None);
    }

    #[test]
    fn test_addition() {
        let sum = Dual::new(2.0, 3.0) + Dual::new(-1.5, 4.0);
        assert_eq!(sum, Dual::new(0.5, 7.0));
    }

    #[test]
    fn test_scalar_addition_commutes() {
        let x = Dual::new(2.0, 3.0);
        assert_eq!(&x + 5.0, 5.0 + &x);
    }

    #[test]
    fn test_scalar_subtraction() {
        let x = Dual::new(2.0, 3.0);
        assert_eq!(&x - 5.0, -1.0 * (5.0 - &x));
    }

    #[test]
    fn test_reflected_subtraction() {
        let x = Dual::variable(2.0);
        assert_eq!(2.0 - &x, Dual::new(0.0, -1.0));
        assert_eq!(&x - 2.0, Dual::new(0.0, 1.0));
    }

    #[test]
    fn test_multiplication() {
        let x = Dual::variable(2.0);
        assert_eq!(&x * &x, Dual::new(4.0, 4.0));
        assert_eq!(2.0 * &x, Dual::new(4.0, 2.0));
        assert_eq!(&x * 2.0 + 3.0, Dual::new(7.0, 2.0));
    }

    #[test]
    fn test_division() {
        assert_eq!(
            Dual::new(2.0, 4.0) / Dual::new(2.0, 1.0),
            Dual::new(1.0, 1.5)
        );
        let x = Dual::variable(2.0);
        assert_eq!(&x / 4.0, Dual::new(0.5, 0.25));
        assert_eq!(4.0 / &x, Dual::new(2.0, -1.0));
    }

    #[test]
    fn test_division_by_constant_matches_zero_derivative_dual() {
        let x = Dual::new(2.0, 2.0);
        assert_eq!(&x / 3.0, &x / Dual::new(3.0, 0.0));
        assert_eq!(
            4.0 / Dual::new(3.0, 2.0),
            Dual::new(4.0, 0.0) / Dual::new(3.0, 2.0)
        );
    }

    #[test]
    fn test_pow_matches_multiplication() {
        let x = Dual::variable(2.0);
        assert_eq!(&x * &x, x.clone().pow(2.0));
    }

    #[test]
    fn test_pow_zero_base() {
        let result = Dual::new(0.0, 2.0).pow(Dual::new(5.0, 2.0));
        assert_eq!(result, Dual::new(0.0, 0.0));
    }

    #[test]
    fn test_pow_variable_base_and_exponent() {
        // d(x^y) = y x^(y-1) dx + ln(x) x^y dy at x = 2, y = 3
        let x = Dual::new(2.0, array![1.0, 0.0]);
        let y = Dual::new(3.0, array![0.0, 1.0]);
        let z = x.pow(&y);
        assert_relative_eq!(z.value(), 8.0, epsilon = 1e-12);
        assert_relative_eq!(z.partial(0).unwrap(), 12.0, epsilon = 1e-12);
        assert_relative_eq!(z.partial(1).unwrap(), 8.0 * 2.0_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_reflected_pow() {
        let x = Dual::variable(2.0);
        let y = 2.0_f64.pow(&x);
        assert_relative_eq!(y.value(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(y.partial(0).unwrap(), 4.0 * 2.0_f64.ln(), epsilon = 1e-12);
        assert_eq!(y.to_string(), "4.0, 2.7726");
    }

    #[test]
    fn test_reflected_pow_matches_promoted_base() {
        let x = Dual::new(3.0, 2.0);
        assert_eq!(6.0_f64.pow(&x), Dual::new(6.0, 0.0).pow(&x));
    }

    #[test]
    fn test_negation() {
        let a = Dual::new(2.0, 3.0);
        assert_eq!(-&a, Dual::new(-2.0, -3.0));
        assert_eq!(-(-a.clone()), a);
    }

    #[test]
    fn test_polynomial_from_docs() {
        let x = Dual::variable(2.0);
        let f = 3.0 * x.clone().pow(5.0) + 2.0 * x.clone().pow(2.0)
            - 2.0 * x.clone().pow(7.0) / x.pow(6.0);
        assert_relative_eq!(f.value(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(f.partial(0).unwrap(), 246.0, epsilon = 1e-9);
    }

    #[test]
    fn test_multivariate_scalar_multiplication() {
        let x = Dual::new(2.0, array![1.0, 0.0]);
        assert_eq!(x * 3.0, Dual::new(6.0, array![3.0, 0.0]));
    }

    #[test]
    fn test_borrowed_dual_with_plain_number() {
        let x = Dual::new(2.0, array![1.0, 0.5]);
        assert_eq!(&x + 3.0, x.clone() + 3.0);
        assert_eq!(&x - 3.0, x.clone() - 3.0);
        assert_eq!(&x * 3.0, x.clone() * 3.0);
        assert_eq!(&x / 3.0, x.clone() / 3.0);
        assert_eq!((&x).pow(3.0), x.clone().pow(3.0));
        assert_eq!(&x * 3.0, Dual::new(6.0, array![3.0, 1.5]));
    }

    #[test]
    fn test_try_add_not_conformable() {
        let a = Dual::new(1.0, 1.0);
        let b = Dual::new(1.0, array![1.0, 0.0]);
        assert_eq!(
            a.try_add(&b),
            Err(DualError::NotConformable {
                left: DerivativeShape::Scalar,
                right: DerivativeShape::Vector(2),
            })
        );
    }

    #[test]
    fn test_try_ops_reject_length_mismatch() {
        let a = Dual::new(1.0, array![1.0, 0.0]);
        let b = Dual::new(2.0, array![0.0, 1.0, 0.0]);
        assert!(a.try_sub(&b).is_err());
        assert!(a.try_mul(&b).is_err());
        assert!(a.try_div(&b).is_err());
        assert!(a.try_pow(&b).is_err());
        assert!(a.try_rsub(&b).is_err());
        assert!(a.try_rdiv(&b).is_err());
        assert!(a.try_rpow(&b).is_err());
    }

    #[test]
    fn test_zero_base_pow_still_checks_shapes() {
        let a = Dual::new(0.0, 1.0);
        let b = Dual::new(2.0, array![1.0, 0.0]);
        assert!(a.try_pow(&b).is_err());
    }

    #[test]
    #[should_panic(expected = "not conformable")]
    fn test_operator_panics_on_mismatch() {
        let _ = Dual::new(1.0, 1.0) + Dual::new(1.0, array![1.0, 0.0]);
    }

    #[test]
    fn test_equality_shape_mismatch() {
        let a = Dual::new(1.0, 1.0);
        let b = Dual::new(1.0, array![1.0]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_vector_components() {
        let a = Dual::new(1.0, array![1.0, 2.0]);
        assert_eq!(a, Dual::new(1.0, array![1.0, 2.0]));
        assert_ne!(a, Dual::new(1.0, array![1.0, 2.5]));
        assert_ne!(a, Dual::new(1.0, array![1.0, 2.0, 0.0]));
    }

    #[test]
    fn test_inequality_with_plain_number() {
        let a = Dual::new(3.0, 3.0);
        assert!(a != 7.0);
        assert!(Dual::constant(7.0) != 7.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dual::variable(3.0).to_string(), "3.0, 1.0");
        assert_eq!(
            Dual::new(6.0, array![3.0, 2.0]).to_string(),
            "6.0, [3.0, 2.0]"
        );
        assert_eq!(format!("{:.2}", Dual::new(1.23456, 0.98765)), "1.23, 0.99");
    }

    #[test]
    fn test_approx_eq() {
        let a = Dual::new(1.0, array![1.0, 2.0]);
        let b = Dual::new(1.0 + 1e-13, array![1.0, 2.0 - 1e-13]);
        assert_relative_eq!(a, b, epsilon = 1e-10);
        assert!(!a.abs_diff_eq(&Dual::new(1.0, 1.0), 1.0));
    }
}
