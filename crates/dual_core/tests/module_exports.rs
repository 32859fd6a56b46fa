//! Integration tests for module exports.
//!
//! Verifies that all public modules and types are reachable through their
//! absolute paths as well as through the crate-root re-exports.

/// Types are accessible via `types`.
#[test]
fn test_types_module_exports() {
    use dual_core::types::derivative::conformable;
    use dual_core::types::dual::Dual;
    use dual_core::types::error::{DerivativeShape, DualError};
    use dual_core::types::operand::Operand;
    use dual_core::types::Derivative;

    let x = Dual::new(1.0, 2.0);
    assert_eq!(x.shape(), DerivativeShape::Scalar);
    assert!(conformable(x.derivative(), &Derivative::Scalar(0.0)));
    assert!(Operand::from(1.0).is_constant());
    let _ = DualError::EmptyJacobian;
}

/// Multivariate helpers are accessible via `multivar`.
#[test]
fn test_multivar_module_exports() {
    use dual_core::multivar::jacobian::MultiVar;
    use dual_core::multivar::vars::make_vars;

    let vars = make_vars(&[1.0], None).unwrap();
    let f: MultiVar = vars.into_iter().collect();
    assert_eq!(f.len(), 1);
}

/// Elementary functions are accessible via `math`.
#[test]
fn test_math_module_exports() {
    use dual_core::math::elementary::{cos, exp, log, sin, sqrt, tan, Elementary};
    use dual_core::math::exp as reexported_exp;

    let _ = (sin(0.0), cos(0.0), tan(0.0), sqrt(1.0), log(1.0), exp(0.0));
    assert_eq!(reexported_exp(0.0), 1.0);
    assert_eq!(Elementary::exp(0.0_f64), 1.0);
}

/// Crate-root re-exports cover the common surface.
#[test]
fn test_root_reexports() {
    use dual_core::{
        conformable, cos, exp, log, make_vars, sin, sqrt, tan, Derivative, DerivativeShape, Dual,
        DualError, Elementary, MultiVar, Operand, Pow, Result,
    };

    fn checked(x: &Dual) -> Result<Dual> {
        x.try_mul(2.0)
    }

    let x = Dual::variable(1.0);
    assert_eq!(checked(&x).unwrap(), Dual::new(2.0, 2.0));
    assert_eq!(x.clone().pow(1.0), x);
    assert!(conformable(&Derivative::Scalar(1.0), x.derivative()));
    assert_eq!(x.shape(), DerivativeShape::Scalar);
    assert!(make_vars(&[1.0], Some(&[])).is_err());
    assert!(MultiVar::default().jacobian().is_err());
    assert!(!Operand::from(&x).is_constant());
    let _ = (sin(&x), cos(&x), tan(&x), sqrt(&x), log(&x), exp(&x), x.clone().exp());
    let _: Option<DualError> = None;
}
