#[cfg(test)]
mod _tests_symmetry_operations {
    use super::super::operator_codec::Fingerprint;
    use super::super::point_groups::PointGroup;
    use super::super::symmetry_operations::{OperatorSet, SymmetryOperator};
    use crate::error::{CosetError, ErrorKind};
    use crate::interfaces::Centricity;
    use crate::lattice::basis_transform::LatticeTransform;
    use nalgebra::{Matrix3, Vector3};

    fn two_fold_z() -> Matrix3<f64> {
        Matrix3::new(-1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn test_fingerprint_follows_matrix() {
        let mut op = SymmetryOperator::identity();
        assert!(op.is_identity());
        op.set_matrix(two_fold_z());
        assert_eq!(op.fingerprint(), Fingerprint::encode(&two_fold_z()));
        assert!(!op.is_identity());
    }

    #[test]
    fn test_compose_and_negate() {
        let op = SymmetryOperator::new(two_fold_z());
        assert!(op.compose(&op).is_identity());
        assert!(SymmetryOperator::identity().negated().is_inversion());
        assert_eq!(op.negated().fingerprint(), op.fingerprint().negated());
        assert_eq!(op.apply(Vector3::new(1.0, 2.0, 3.0)), Vector3::new(-1.0, -2.0, 3.0));
    }

    #[test]
    fn test_from_fingerprint() {
        let op = SymmetryOperator::from_fingerprint(Fingerprint::INVERSION).unwrap();
        assert_eq!(*op.matrix(), -Matrix3::identity());
        assert!(SymmetryOperator::from_fingerprint(Fingerprint::from_bits(0x3)).is_err());
    }

    #[test]
    fn test_is_symmetric() {
        assert!(SymmetryOperator::new(two_fold_z()).is_symmetric());
        let four_fold = Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        assert!(!SymmetryOperator::new(four_fold).is_symmetric());

        // Non-integral matrices fall back to element-wise comparison
        let mut m = Matrix3::identity();
        m[(0, 1)] = 0.5;
        m[(1, 0)] = 0.5;
        let op = SymmetryOperator::new(m);
        assert!(op.fingerprint().is_error());
        assert!(op.is_symmetric());
        m[(1, 0)] = -0.5;
        assert!(!SymmetryOperator::new(m).is_symmetric());
    }

    #[test]
    fn test_from_matrices_validates() {
        let set = OperatorSet::from_matrices(&[Matrix3::identity(), two_fold_z()]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.starts_with_identity());

        let mut bad = Matrix3::identity();
        bad[(2, 2)] = 0.7;
        assert!(OperatorSet::from_matrices(&[Matrix3::identity(), bad]).is_err());
    }

    #[test]
    fn test_from_proper_layout() {
        let set = OperatorSet::from_proper(&[Matrix3::identity(), two_fold_z()]);
        assert_eq!(set.len(), 4);
        assert!(set.get(2).unwrap().is_inversion());
        assert_eq!(
            set.get(3).unwrap().fingerprint(),
            Fingerprint::encode(&two_fold_z()).negated()
        );
        assert_eq!(set.centricity(), Centricity::Centric);
        assert!(set.is_centric());
    }

    #[test]
    fn test_active_bookkeeping() {
        let mut set = PointGroup::Tetragonal.select_operators();
        assert_eq!(set.active_count(), 16);
        set.set_all_active(false);
        assert_eq!(set.active_count(), 0);
        set.operators_mut()[3].is_representative = true;
        assert_eq!(set.active_count(), 1);
        assert_eq!(set.representatives().count(), 1);
    }

    #[test]
    fn test_centric_layout_pairs_partners() {
        let two_fold_y = Matrix3::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0);
        let mirror_y = Matrix3::new(1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0);
        let shuffled = OperatorSet::from_matrices(&[
            Matrix3::identity(),
            -Matrix3::identity(),
            mirror_y,
            two_fold_y,
        ])
        .unwrap();

        let set = shuffled.into_centric_layout().unwrap();
        assert_eq!(set.len(), 4);
        assert!(set.starts_with_identity());
        assert_eq!(set.get(1).unwrap().fingerprint(), Fingerprint::encode(&two_fold_y));
        assert!(set.get(2).unwrap().is_inversion());
        assert_eq!(set.get(3).unwrap().fingerprint(), Fingerprint::encode(&mirror_y));
    }

    #[test]
    fn test_centric_layout_keeps_acentric_order() {
        let set = PointGroup::Tetragonal.proper_operators();
        let before: Vec<Fingerprint> = set.iter().map(|op| op.fingerprint()).collect();
        let after = set.into_centric_layout().unwrap();
        let after: Vec<Fingerprint> = after.iter().map(|op| op.fingerprint()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_centric_layout_rejects_unpaired_operators() {
        let unbalanced =
            OperatorSet::from_matrices(&[Matrix3::identity(), -Matrix3::identity(), two_fold_z()]).unwrap();
        assert!(matches!(
            unbalanced.into_centric_layout().unwrap_err(),
            CosetError::UnbalancedCentricSet { proper: 2, improper: 1 }
        ));

        let mirror_x = Matrix3::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        let unpaired = OperatorSet::from_matrices(&[
            Matrix3::identity(),
            two_fold_z(),
            -Matrix3::identity(),
            mirror_x,
        ])
        .unwrap();
        let err = unpaired.into_centric_layout().unwrap_err();
        assert!(matches!(err, CosetError::MissingInversionPartner(_)));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_transform_rederives_fingerprints() {
        // Swap a and b
        #[rustfmt::skip]
        let t = LatticeTransform::new(Matrix3::new(
            0.0, 1.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 0.0, 1.0,
        ))
        .unwrap();
        let two_fold_x = Matrix3::new(1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0);
        let mut set = OperatorSet::new(vec![SymmetryOperator::identity(), SymmetryOperator::new(two_fold_x)]);
        set.transform(&t);
        let two_fold_y = Matrix3::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0);
        assert_eq!(set.get(1).unwrap().fingerprint(), Fingerprint::encode(&two_fold_y));
        assert!(set.validate_encoding().is_ok());
    }

    #[test]
    fn test_transform_to_non_integral_fails_validation() {
        #[rustfmt::skip]
        let t = LatticeTransform::new(Matrix3::new(
            2.0, 1.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ))
        .unwrap();
        let mut set = PointGroup::Tetragonal.proper_operators();
        set.transform(&t);
        assert!(set.validate_encoding().is_err());
    }
}
