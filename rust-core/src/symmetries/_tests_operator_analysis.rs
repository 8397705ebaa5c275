#[cfg(test)]
mod _tests_operator_analysis {
    use super::super::eigen::{general_eigen_solve, symmetric_eigen_solve, unitize};
    use super::super::operator_analysis::{
        analyze_group, analyze_operator, classify, fold_from_trace_determinant, rotation_angle,
    };
    use super::super::point_groups::PointGroup;
    use super::super::symmetry_operations::SymmetryOperator;
    use crate::error::ErrorKind;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::{Matrix3, Vector3};

    const TOL: f64 = 1e-9;

    fn classify_op(m: Matrix3<f64>) -> crate::symmetries::Classification {
        let mut op = SymmetryOperator::new(m);
        analyze_operator(&mut op).unwrap();
        op.classification.unwrap()
    }

    #[test]
    fn test_fold_table() {
        assert_eq!(fold_from_trace_determinant(3, 1), Some(1));
        assert_eq!(fold_from_trace_determinant(-1, 1), Some(2));
        assert_eq!(fold_from_trace_determinant(0, 1), Some(3));
        assert_eq!(fold_from_trace_determinant(1, 1), Some(4));
        assert_eq!(fold_from_trace_determinant(2, 1), Some(6));
        assert_eq!(fold_from_trace_determinant(-3, -1), Some(-1));
        assert_eq!(fold_from_trace_determinant(-2, -1), Some(-6));
        assert_eq!(fold_from_trace_determinant(-1, -1), Some(-4));
        assert_eq!(fold_from_trace_determinant(0, -1), Some(-3));
        assert_eq!(fold_from_trace_determinant(1, -1), Some(-2));
        assert_eq!(fold_from_trace_determinant(-2, 1), None);
        assert_eq!(fold_from_trace_determinant(2, -1), None);
        assert_eq!(fold_from_trace_determinant(1, 2), None);
    }

    #[test]
    fn test_rotation_angles() {
        assert_relative_eq!(rotation_angle(0.0, 1.0), 120.0, epsilon = TOL);
        assert_relative_eq!(rotation_angle(1.0, -1.0), 180.0, epsilon = TOL);
        assert_relative_eq!(rotation_angle(1.0, 1.0), 90.0, epsilon = TOL);
        assert_relative_eq!(rotation_angle(2.0, 1.0), 60.0, epsilon = TOL);
        assert_abs_diff_eq!(rotation_angle(3.0, 1.0), 0.0, epsilon = TOL);
        // Rounding noise beyond |cos| = 1 is clamped
        assert_abs_diff_eq!(rotation_angle(3.0 + 1e-12, 1.0), 0.0, epsilon = TOL);
    }

    #[test]
    fn test_three_fold_about_body_diagonal() {
        let m = Matrix3::new(0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0);
        let c = classify_op(m);
        assert_eq!(c.fold, 3);
        assert!(c.is_proper());
        assert_relative_eq!(c.rotation_angle, 120.0, epsilon = TOL);
        assert_relative_eq!(c.eigen_value, 1.0, epsilon = 1e-7);
        assert_abs_diff_eq!(c.axis, Vector3::new(1.0, 1.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_mirror_perpendicular_to_c() {
        let m = Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0);
        let c = classify_op(m);
        assert_eq!(c.fold, -2);
        assert!(!c.is_proper());
        assert_relative_eq!(c.rotation_angle, 180.0, epsilon = TOL);
        assert_relative_eq!(c.eigen_value, -1.0, epsilon = 1e-7);
        assert_abs_diff_eq!(c.axis, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_four_fold_and_its_rotoinversion() {
        let m = Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        let c = classify_op(m);
        assert_eq!(c.fold, 4);
        assert_relative_eq!(c.rotation_angle, 90.0, epsilon = TOL);
        assert_abs_diff_eq!(c.axis, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-6);

        let c = classify_op(-m);
        assert_eq!(c.fold, -4);
        assert_relative_eq!(c.rotation_angle, 90.0, epsilon = TOL);
        assert_abs_diff_eq!(c.axis, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_two_fold_in_hexagonal_basis() {
        // Not symmetric, so the general solver is used
        let m = Matrix3::new(1.0, 0.0, 0.0, -1.0, -1.0, 0.0, 0.0, 0.0, -1.0);
        let c = classify_op(m);
        assert_eq!(c.fold, 2);
        assert_relative_eq!(c.rotation_angle, 180.0, epsilon = TOL);
        assert_abs_diff_eq!(c.axis, Vector3::new(2.0, -1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_inversion_center() {
        let c = classify_op(-Matrix3::identity());
        assert_eq!(c.fold, -1);
        assert_abs_diff_eq!(c.rotation_angle, 0.0, epsilon = TOL);
        assert_relative_eq!(c.eigen_value, -1.0, epsilon = 1e-7);
    }

    #[test]
    fn test_every_catalog_operator_classifies() {
        for pg in PointGroup::ALL {
            let mut set = pg.select_operators();
            analyze_group(&mut set).unwrap();
            for op in &set {
                let c = op.classification.as_ref().unwrap();
                // The axis is an eigenvector for the eigenvalue ±1
                let image = op.matrix() * c.axis;
                assert_abs_diff_eq!(image, c.axis * c.eigen_value, epsilon = 1e-6);
                assert_relative_eq!(c.eigen_value.abs(), 1.0, epsilon = 1e-7);
            }
        }
    }

    #[test]
    fn test_inactive_operators_are_not_classified() {
        let mut set = PointGroup::Orthorhombic.select_operators();
        set.set_all_active(false);
        set.operators_mut()[0].is_representative = true;
        analyze_group(&mut set).unwrap();
        assert!(set.get(0).unwrap().classification.is_some());
        assert!(set.iter().skip(1).all(|op| op.classification.is_none()));
    }

    #[test]
    fn test_unknown_operator_type() {
        let m = Matrix3::new(2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        let err = classify(&m, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Classification);
        assert!(err.is_numeric_failure());
    }

    #[test]
    fn test_symmetric_solver_sorts_by_magnitude() {
        let m = Matrix3::new(3.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 2.0);
        let pairs = symmetric_eigen_solve(&m).unwrap();
        assert_relative_eq!(pairs[0].value, -1.0, epsilon = 1e-9);
        assert_relative_eq!(pairs[1].value, 2.0, epsilon = 1e-9);
        assert_relative_eq!(pairs[2].value, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_general_solver_complex_pair() {
        let m = Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        let pairs = general_eigen_solve(&m).unwrap();
        assert_eq!(pairs.iter().filter(|p| p.is_real()).count(), 1);
        for (index, pair) in pairs.iter().enumerate() {
            // A v = λ v
            let complex_m = m.map(|x| num_complex::Complex64::new(x, 0.0));
            let residual = complex_m * pair.vector - pair.vector * pair.value;
            assert!(residual.iter().all(|c| c.norm() < 1e-9));
            if !pair.is_real() {
                assert!(pair.to_real(index).is_err());
            }
        }
    }

    #[test]
    fn test_unitize() {
        let s = 1.0 / 3.0_f64.sqrt();
        assert_abs_diff_eq!(unitize(&Vector3::new(s, s, s)), Vector3::new(1.0, 1.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(
            unitize(&Vector3::new(-0.5, 1.0, 1e-12)),
            Vector3::new(1.0, -2.0, 0.0),
            epsilon = 1e-12
        );
        assert_eq!(unitize(&Vector3::zeros()), Vector3::zeros());
    }
}
