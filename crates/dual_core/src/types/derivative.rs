//! Scalar and vector derivative storage.
//!
//! A [`Derivative`] is either a single number (single-variable mode) or a
//! fixed-length vector of partials (multivariate mode, one entry per
//! independent variable). Arithmetic between two derivatives is only defined
//! when they are *conformable*: both scalars, or both vectors of equal length.
//!
//! Vector partials are always stored as `ndarray::Array1<f64>`. There is no
//! conversion from `Vec<f64>` or slices, so every vector derivative in a
//! computation shares the same representation.

use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use ndarray::Array1;

use super::error::{DerivativeShape, DualError, Result};

/// Derivative of a dual number with respect to the independent variable(s).
///
/// # Examples
///
/// ```rust
/// use dual_core::types::Derivative;
/// use ndarray::array;
///
/// let scalar = Derivative::from(1.0);
/// let vector = Derivative::from(array![1.0, 0.0]);
///
/// assert!(!scalar.is_conformable(&vector));
/// assert!(vector.is_conformable(&Derivative::from(array![0.0, 1.0])));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Derivative {
    /// Single-variable derivative
    Scalar(f64),
    /// One partial derivative per independent variable
    Vector(Array1<f64>),
}

impl Derivative {
    /// Returns the shape of this derivative.
    #[inline]
    pub fn shape(&self) -> DerivativeShape {
        match self {
            Derivative::Scalar(_) => DerivativeShape::Scalar,
            Derivative::Vector(v) => DerivativeShape::Vector(v.len()),
        }
    }

    /// Returns `true` for single-variable derivatives.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Derivative::Scalar(_))
    }

    /// Returns the scalar derivative, or `None` in multivariate mode.
    #[inline]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Derivative::Scalar(d) => Some(*d),
            Derivative::Vector(_) => None,
        }
    }

    /// Returns the vector of partials, or `None` in single-variable mode.
    #[inline]
    pub fn as_vector(&self) -> Option<&Array1<f64>> {
        match self {
            Derivative::Scalar(_) => None,
            Derivative::Vector(v) => Some(v),
        }
    }

    /// Checks whether two derivatives may be combined.
    ///
    /// True iff both are scalars, or both are vectors of equal length.
    #[inline]
    pub fn is_conformable(&self, other: &Derivative) -> bool {
        match (self, other) {
            (Derivative::Scalar(_), Derivative::Scalar(_)) => true,
            (Derivative::Vector(a), Derivative::Vector(b)) => a.len() == b.len(),
            _ => false,
        }
    }

    /// Like [`is_conformable`](Self::is_conformable), but reports the shapes on failure.
    pub fn check_conformable(&self, other: &Derivative) -> Result<()> {
        if self.is_conformable(other) {
            Ok(())
        } else {
            Err(DualError::NotConformable {
                left: self.shape(),
                right: other.shape(),
            })
        }
    }

    /// Returns the zero derivative of the same shape.
    ///
    /// This is the derivative a constant takes when promoted next to `self`.
    pub fn zeros_like(&self) -> Derivative {
        match self {
            Derivative::Scalar(_) => Derivative::Scalar(0.0),
            Derivative::Vector(v) => Derivative::Vector(Array1::zeros(v.len())),
        }
    }

    /// Applies `f` to every component.
    pub fn map<F>(&self, f: F) -> Derivative
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Derivative::Scalar(d) => Derivative::Scalar(f(*d)),
            Derivative::Vector(v) => Derivative::Vector(v.mapv(f)),
        }
    }

    /// Multiplies every component by `factor`.
    #[inline]
    pub fn scale(&self, factor: f64) -> Derivative {
        self.map(|d| d * factor)
    }

    /// Combines two conformable derivatives component by component.
    ///
    /// `f` receives `(self_i, other_i)`.
    ///
    /// # Errors
    ///
    /// Returns [`DualError::NotConformable`] when the shapes differ.
    pub fn zip_with<F>(&self, other: &Derivative, f: F) -> Result<Derivative>
    where
        F: Fn(f64, f64) -> f64,
    {
        match (self, other) {
            (Derivative::Scalar(a), Derivative::Scalar(b)) => Ok(Derivative::Scalar(f(*a, *b))),
            (Derivative::Vector(a), Derivative::Vector(b)) if a.len() == b.len() => {
                let mut out = a.clone();
                out.zip_mut_with(b, |x, &y| *x = f(*x, y));
                Ok(Derivative::Vector(out))
            }
            _ => Err(DualError::NotConformable {
                left: self.shape(),
                right: other.shape(),
            }),
        }
    }

    /// Euclidean norm of the partials (absolute value in scalar mode).
    pub fn norm(&self) -> f64 {
        match self {
            Derivative::Scalar(d) => d.abs(),
            Derivative::Vector(v) => v.dot(v).sqrt(),
        }
    }

    /// Returns the derivative as a Jacobian row.
    ///
    /// A scalar derivative becomes a row of length one.
    pub fn to_row(&self) -> Array1<f64> {
        match self {
            Derivative::Scalar(d) => Array1::from_elem(1, *d),
            Derivative::Vector(v) => v.clone(),
        }
    }
}

impl From<f64> for Derivative {
    fn from(d: f64) -> Self {
        Derivative::Scalar(d)
    }
}

impl From<Array1<f64>> for Derivative {
    fn from(v: Array1<f64>) -> Self {
        Derivative::Vector(v)
    }
}

/// Checks whether two derivatives may be combined in a binary operation.
///
/// Free-function form of [`Derivative::is_conformable`].
#[inline]
pub fn conformable(a: &Derivative, b: &Derivative) -> bool {
    a.is_conformable(b)
}

// =============================================================================
// Formatting
// =============================================================================

/// Default number of decimals used by `Display`.
pub(crate) const DEFAULT_PRECISION: usize = 4;

/// Rounds `x` to `decimals` places and renders it with a trailing `.0` for
/// whole numbers (`7.0`, `2.7726`, `-0.0`).
pub(crate) fn format_rounded(x: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (x * factor).round() / factor;
    if rounded.is_finite() {
        format!("{:?}", rounded)
    } else {
        // x * factor may overflow for huge finite x
        format!("{:?}", x)
    }
}

impl fmt::Display for Derivative {
    /// Renders the derivative rounded to 4 decimals, or to the formatter's
    /// precision when one is given (`{:.6}`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = f.precision().unwrap_or(DEFAULT_PRECISION);
        match self {
            Derivative::Scalar(d) => write!(f, "{}", format_rounded(*d, decimals)),
            Derivative::Vector(v) => {
                write!(f, "[")?;
                for (i, d) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", format_rounded(*d, decimals))?;
                }
                write!(f, "]")
            }
        }
    }
}

// =============================================================================
// Approximate Equality
// =============================================================================

impl AbsDiffEq for Derivative {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        match (self, other) {
            (Derivative::Scalar(a), Derivative::Scalar(b)) => a.abs_diff_eq(b, epsilon),
            (Derivative::Vector(a), Derivative::Vector(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.abs_diff_eq(y, epsilon))
            }
            _ => false,
        }
    }
}

impl RelativeEq for Derivative {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        match (self, other) {
            (Derivative::Scalar(a), Derivative::Scalar(b)) => {
                a.relative_eq(b, epsilon, max_relative)
            }
            (Derivative::Vector(a), Derivative::Vector(b)) => {
                let close = |(x, y): (&f64, &f64)| x.relative_eq(y, epsilon, max_relative);
                a.len() == b.len() && a.iter().zip(b).all(close)
            }
            _ => false,
        }
    }
}
