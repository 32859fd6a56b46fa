//! Operands of mixed dual/constant arithmetic.
//!
//! Every binary operation first turns its right-hand side into an
//! [`Operand`], then coerces it to a [`Dual`] whose derivative shape matches
//! the left-hand side. A constant has zero sensitivity, so it becomes a Dual
//! with the zero derivative of that shape.

use super::derivative::Derivative;
use super::dual::Dual;

/// Either a plain number or a dual number.
///
/// # Examples
///
/// ```rust
/// use dual_core::types::{Derivative, Dual, Operand};
/// use ndarray::array;
///
/// let like = Derivative::from(array![1.0, 0.0]);
/// let promoted = Operand::from(3.0).into_dual(&like);
///
/// assert_eq!(promoted.value(), 3.0);
/// assert_eq!(promoted.derivative(), &Derivative::from(array![0.0, 0.0]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// Plain number with no derivative
    Constant(f64),
    /// Value carrying derivative information
    Dual(Dual),
}

impl Operand {
    /// Coerces the operand to a Dual.
    ///
    /// Constants take the zero derivative of `like`'s shape; Duals pass
    /// through unchanged.
    pub fn into_dual(self, like: &Derivative) -> Dual {
        match self {
            Operand::Constant(c) => Dual::new(c, like.zeros_like()),
            Operand::Dual(d) => d,
        }
    }

    /// Returns the primal value of either variant.
    #[inline]
    pub fn value(&self) -> f64 {
        match self {
            Operand::Constant(c) => *c,
            Operand::Dual(d) => d.value(),
        }
    }

    /// Returns `true` for plain numbers.
    #[inline]
    pub fn is_constant(&self) -> bool {
        matches!(self, Operand::Constant(_))
    }

    /// Returns the Dual, or `None` for a constant.
    #[inline]
    pub fn as_dual(&self) -> Option<&Dual> {
        match self {
            Operand::Constant(_) => None,
            Operand::Dual(d) => Some(d),
        }
    }
}

impl From<f64> for Operand {
    fn from(c: f64) -> Self {
        Operand::Constant(c)
    }
}

impl From<Dual> for Operand {
    fn from(d: Dual) -> Self {
        Operand::Dual(d)
    }
}

impl From<&Dual> for Operand {
    fn from(d: &Dual) -> Self {
        Operand::Dual(d.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_constant_promotes_to_scalar_zero() {
        let d = Operand::from(5.0).into_dual(&Derivative::from(1.0));
        assert_eq!(d, Dual::new(5.0, 0.0));
    }

    #[test]
    fn test_constant_promotes_to_zero_vector() {
        let like = Derivative::from(array![1.0, 0.0, 0.0]);
        let d = Operand::from(2.0).into_dual(&like);
        assert_eq!(d, Dual::new(2.0, array![0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_dual_passes_through() {
        let x = Dual::new(1.5, array![2.0, 3.0]);
        let d = Operand::from(&x).into_dual(&Derivative::from(0.0));
        assert_eq!(d, x);
    }

    #[test]
    fn test_accessors() {
        let c = Operand::from(4.0);
        assert!(c.is_constant());
        assert_eq!(c.value(), 4.0);
        assert!(c.as_dual().is_none());

        let x = Operand::from(Dual::variable(2.0));
        assert!(!x.is_constant());
        assert_eq!(x.value(), 2.0);
        assert_eq!(x.as_dual(), Some(&Dual::variable(2.0)));
    }
}
