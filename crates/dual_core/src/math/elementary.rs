//! Chain-rule aware elementary functions.
//!
//! Each function accepts either a plain number or a Dual. Plain numbers are
//! evaluated directly and stay plain; Duals get value `f(v)` and derivative
//! `f'(v) × dv`, the scalar slope multiplying every partial in multivariate
//! mode.
//!
//! | Function | f(v) | f'(v) |
//! |---|---|---|
//! | [`sin`] | sin v | cos v |
//! | [`cos`] | cos v | -sin v |
//! | [`tan`] | tan v | 1 / cos² v |
//! | [`sqrt`] | √v | 0.5 v^-0.5 |
//! | [`log`] | ln v | 1 / v |
//! | [`exp`] | e^v | e^v |
//!
//! ```rust
//! use dual_core::math::elementary::{exp, sin};
//! use dual_core::types::Dual;
//! use std::f64::consts::PI;
//!
//! assert_eq!(exp(0.0), 1.0);
//!
//! let y = sin(Dual::variable(PI));
//! assert_eq!(y.to_string(), "0.0, -1.0");
//! ```

use crate::types::{Dual, Operand};

/// Elementary functions over plain numbers and dual numbers.
///
/// Implemented for `f64` (plain evaluation), for `Dual` and `&Dual`
/// (chain rule), and for [`Operand`] (dispatch on the variant).
pub trait Elementary {
    /// Result type: `f64` for plain numbers, `Dual` for dual numbers.
    type Output;

    /// Sine.
    fn sin(self) -> Self::Output;

    /// Cosine.
    fn cos(self) -> Self::Output;

    /// Tangent.
    fn tan(self) -> Self::Output;

    /// Square root.
    fn sqrt(self) -> Self::Output;

    /// Natural logarithm.
    fn ln(self) -> Self::Output;

    /// Exponential.
    fn exp(self) -> Self::Output;
}

impl Elementary for f64 {
    type Output = f64;

    #[inline]
    fn sin(self) -> f64 {
        f64::sin(self)
    }

    #[inline]
    fn cos(self) -> f64 {
        f64::cos(self)
    }

    #[inline]
    fn tan(self) -> f64 {
        f64::tan(self)
    }

    #[inline]
    fn sqrt(self) -> f64 {
        f64::sqrt(self)
    }

    #[inline]
    fn ln(self) -> f64 {
        f64::ln(self)
    }

    #[inline]
    fn exp(self) -> f64 {
        f64::exp(self)
    }
}

impl Elementary for &Dual {
    type Output = Dual;

    /// d(sin a) = cos(a) × da
    #[inline]
    fn sin(self) -> Dual {
        let v = self.value();
        self.chain(v.sin(), v.cos())
    }

    /// d(cos a) = -sin(a) × da
    #[inline]
    fn cos(self) -> Dual {
        let v = self.value();
        self.chain(v.cos(), -v.sin())
    }

    /// d(tan a) = da / cos²(a)
    #[inline]
    fn tan(self) -> Dual {
        let v = self.value();
        self.chain(v.tan(), 1.0 / v.cos().powi(2))
    }

    /// d(√a) = 0.5 a^-0.5 × da
    #[inline]
    fn sqrt(self) -> Dual {
        let v = self.value();
        self.chain(v.sqrt(), 0.5 * (1.0 / v.powf(0.5)))
    }

    /// d(ln a) = da / a
    #[inline]
    fn ln(self) -> Dual {
        let v = self.value();
        self.chain(v.ln(), 1.0 / v)
    }

    /// d(exp a) = exp(a) × da
    #[inline]
    fn exp(self) -> Dual {
        let e = self.value().exp();
        self.chain(e, e)
    }
}

impl Elementary for Dual {
    type Output = Dual;

    #[inline]
    fn sin(self) -> Dual {
        (&self).sin()
    }

    #[inline]
    fn cos(self) -> Dual {
        (&self).cos()
    }

    #[inline]
    fn tan(self) -> Dual {
        (&self).tan()
    }

    #[inline]
    fn sqrt(self) -> Dual {
        (&self).sqrt()
    }

    #[inline]
    fn ln(self) -> Dual {
        (&self).ln()
    }

    #[inline]
    fn exp(self) -> Dual {
        (&self).exp()
    }
}

/// Applies `$f` to either variant, keeping constants constant.
macro_rules! dispatch_operand {
    ($operand:expr, $f:ident) => {
        match $operand {
            Operand::Constant(c) => Operand::Constant(Elementary::$f(c)),
            Operand::Dual(d) => Operand::Dual(Elementary::$f(&d)),
        }
    };
}

impl Elementary for Operand {
    type Output = Operand;

    fn sin(self) -> Operand {
        dispatch_operand!(self, sin)
    }

    fn cos(self) -> Operand {
        dispatch_operand!(self, cos)
    }

    fn tan(self) -> Operand {
        dispatch_operand!(self, tan)
    }

    fn sqrt(self) -> Operand {
        dispatch_operand!(self, sqrt)
    }

    fn ln(self) -> Operand {
        dispatch_operand!(self, ln)
    }

    fn exp(self) -> Operand {
        dispatch_operand!(self, exp)
    }
}

/// Sine of a plain number or a Dual.
#[inline]
pub fn sin<T: Elementary>(x: T) -> T::Output {
    x.sin()
}

/// Cosine of a plain number or a Dual.
#[inline]
pub fn cos<T: Elementary>(x: T) -> T::Output {
    x.cos()
}

/// Tangent of a plain number or a Dual.
#[inline]
pub fn tan<T: Elementary>(x: T) -> T::Output {
    x.tan()
}

/// Square root of a plain number or a Dual.
///
/// ```rust
/// use dual_core::math::elementary::sqrt;
/// use dual_core::types::Dual;
///
/// assert_eq!(sqrt(4.0), 2.0);
/// assert_eq!(sqrt(Dual::variable(100.0)), Dual::new(10.0, 0.05));
/// ```
#[inline]
pub fn sqrt<T: Elementary>(x: T) -> T::Output {
    x.sqrt()
}

/// Natural logarithm of a plain number or a Dual.
#[inline]
pub fn log<T: Elementary>(x: T) -> T::Output {
    x.ln()
}

/// Exponential of a plain number or a Dual.
#[inline]
pub fn exp<T: Elementary>(x: T) -> T::Output {
    x.exp()
}
