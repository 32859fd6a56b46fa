//! Seeding of independent variables.

use ndarray::Array1;

use crate::types::{Dual, DualError, Result};

/// Creates one Dual per value, seeded along the standard basis.
///
/// The i-th Dual has a derivative vector of length `values.len()` whose
/// position i holds `seed[i]` (1.0 when no seed is given) and whose other
/// positions are zero: it is the i-th independent variable, with no
/// sensitivity to the others.
///
/// # Arguments
///
/// * `values` - Point at which the variables are evaluated
/// * `seed` - Optional initial sensitivities, one per value
///
/// # Errors
///
/// Returns [`DualError::SeedLength`] if `seed` is given and its length
/// differs from `values.len()`.
///
/// # Examples
///
/// ```rust
/// use dual_core::multivar::make_vars;
/// use dual_core::types::Dual;
/// use ndarray::array;
///
/// let vars = make_vars(&[2.0, 3.0], None).unwrap();
/// let (x, y) = (&vars[0], &vars[1]);
///
/// // d(xy)/dx = y, d(xy)/dy = x
/// assert_eq!(x * y, Dual::new(6.0, array![3.0, 2.0]));
/// ```
pub fn make_vars(values: &[f64], seed: Option<&[f64]>) -> Result<Vec<Dual>> {
    let n = values.len();
    if let Some(seed) = seed {
        if seed.len() != n {
            return Err(DualError::SeedLength {
                values: n,
                seeds: seed.len(),
            });
        }
    }

    let vars = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let mut derivative = Array1::zeros(n);
            derivative[i] = seed.map_or(1.0, |s| s[i]);
            Dual::new(value, derivative)
        })
        .collect();
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_default_seed_is_identity() {
        let vars = make_vars(&[1.0, 2.0, 3.0], None).unwrap();
        assert_eq!(vars.len(), 3);
        assert_eq!(vars[0], Dual::new(1.0, array![1.0, 0.0, 0.0]));
        assert_eq!(vars[1], Dual::new(2.0, array![0.0, 1.0, 0.0]));
        assert_eq!(vars[2], Dual::new(3.0, array![0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_custom_seed() {
        let vars = make_vars(&[2.0, 3.0], Some(&[0.5, -2.0])).unwrap();
        assert_eq!(vars[0], Dual::new(2.0, array![0.5, 0.0]));
        assert_eq!(vars[1], Dual::new(3.0, array![0.0, -2.0]));
    }

    #[test]
    fn test_seed_length_mismatch() {
        let err = make_vars(&[2.0, 3.0], Some(&[1.0])).unwrap_err();
        assert_eq!(
            err,
            DualError::SeedLength {
                values: 2,
                seeds: 1
            }
        );
    }

    #[test]
    fn test_empty_values() {
        assert!(make_vars(&[], None).unwrap().is_empty());
    }

    #[test]
    fn test_product_gradient() {
        let vars = make_vars(&[2.0, 3.0], None).unwrap();
        let z = &vars[0] * &vars[1];
        assert_eq!(z, Dual::new(6.0, array![3.0, 2.0]));
    }
}
