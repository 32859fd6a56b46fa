//! Jacobian assembly from component functions.

use ndarray::{Array1, Array2};

use crate::types::{Dual, DualError, Result};

/// Ordered collection of component functions evaluated at the same point.
///
/// Each entry is the Dual result of one output of a vector-valued function.
/// Stacking their derivative vectors row by row yields the Jacobian.
///
/// # Examples
///
/// ```rust
/// use dual_core::multivar::{make_vars, MultiVar};
/// use ndarray::array;
///
/// let vars = make_vars(&[2.0, 3.0], None).unwrap();
/// let (x, y) = (&vars[0], &vars[1]);
///
/// let f = MultiVar::new(vec![x * y, x + y]);
/// let jacobian = f.jacobian().unwrap();
///
/// assert_eq!(jacobian, array![[3.0, 2.0], [1.0, 1.0]]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiVar {
    functions: Vec<Dual>,
}

impl MultiVar {
    /// Wraps the given component functions, preserving their order.
    pub fn new(functions: Vec<Dual>) -> Self {
        Self { functions }
    }

    /// Returns the component functions.
    #[inline]
    pub fn functions(&self) -> &[Dual] {
        &self.functions
    }

    /// Number of component functions (Jacobian rows).
    #[inline]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if there are no component functions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Values of the component functions, in order.
    pub fn values(&self) -> Array1<f64> {
        self.functions.iter().map(Dual::value).collect()
    }

    /// Stacks each function's derivative as a row of an M × N matrix.
    ///
    /// Scalar derivatives form rows of length one.
    ///
    /// # Errors
    ///
    /// - [`DualError::EmptyJacobian`] when there are no functions
    /// - [`DualError::JacobianRow`] when a derivative's shape differs from
    ///   the first function's
    pub fn jacobian(&self) -> Result<Array2<f64>> {
        let first = self.functions.first().ok_or(DualError::EmptyJacobian)?;

        if let Some((row, found)) = self
            .functions
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, f)| !first.is_conformable(f))
        {
            return Err(DualError::JacobianRow {
                row,
                expected: first.shape(),
                found: found.shape(),
            });
        }

        let cols = first.derivative().to_row().len();
        let mut jacobian = Array2::zeros((self.functions.len(), cols));
        for (mut row, f) in jacobian.rows_mut().into_iter().zip(&self.functions) {
            row.assign(&f.derivative().to_row());
        }
        Ok(jacobian)
    }
}

impl From<Vec<Dual>> for MultiVar {
    fn from(functions: Vec<Dual>) -> Self {
        Self::new(functions)
    }
}

impl FromIterator<Dual> for MultiVar {
    fn from_iter<I: IntoIterator<Item = Dual>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
