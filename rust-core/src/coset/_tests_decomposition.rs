#[cfg(test)]
mod _tests_decomposition {
    use super::super::decomposition::{algorithm_a, algorithm_b, decompose};
    use crate::interfaces::Algorithm;
    use crate::symmetries::operator_codec::Fingerprint;
    use crate::symmetries::point_groups::{resolve_group, PointGroup};
    use crate::symmetries::symmetry_operations::OperatorSet;
    use nalgebra::Matrix3;
    use std::collections::HashSet;

    fn identity_group() -> OperatorSet {
        OperatorSet::from_matrices(&[Matrix3::identity()]).unwrap()
    }

    fn active_fingerprints(set: &OperatorSet) -> HashSet<Fingerprint> {
        set.representatives().map(|op| op.fingerprint()).collect()
    }

    #[test]
    fn test_identity_subgroup_keeps_everything() {
        let mut g = PointGroup::Cubic.select_operators();
        let summary = algorithm_a(&mut g, &identity_group());
        assert_eq!(summary.index, 48);
        assert_eq!(g.active_count(), 48);
    }

    #[test]
    fn test_subgroup_equal_to_supergroup() {
        for pg in PointGroup::ALL {
            for algorithm in [Algorithm::A, Algorithm::B, Algorithm::ExtendedB] {
                let mut g = pg.select_operators();
                let h = pg.select_operators();
                let summary = decompose(algorithm, &mut g, &h);
                assert_eq!(summary.index, 1, "{} with algorithm {}", pg, algorithm);
                assert!(g.get(0).unwrap().is_representative);
            }
        }
    }

    #[test]
    fn test_cubic_by_triclinic() {
        let h = PointGroup::Triclinic.select_operators();

        let mut g = PointGroup::Cubic.select_operators();
        assert_eq!(decompose(Algorithm::B, &mut g, &h).index, 24);
        // Algorithm B keeps the proper rotations
        assert!(g.iter().take(24).all(|op| op.is_representative));
        assert!(g.iter().skip(24).all(|op| !op.is_representative));

        let mut g = PointGroup::Cubic.select_operators();
        assert_eq!(decompose(Algorithm::A, &mut g, &h).index, 24);
    }

    #[test]
    fn test_centric_subgroup_halves_generators() {
        let h = resolve_group("2/m").unwrap();
        assert!(h.is_centric());

        let mut ga = PointGroup::Cubic.select_operators();
        let a = algorithm_a(&mut ga, &h);
        let mut gb = PointGroup::Cubic.select_operators();
        let b = algorithm_b(&mut gb, &h, false);

        assert_eq!(a.generators_considered, 4);
        assert_eq!(b.generators_considered, 2);
        assert_eq!(b.supergroup_considered, 24);
        assert_eq!(a.index, 12);
        assert_eq!(b.index, a.index);
    }

    #[test]
    fn test_representatives_hit_every_coset_once() {
        let h = resolve_group("4/mmm").unwrap();
        let mut g = PointGroup::Cubic.select_operators();
        decompose(Algorithm::A, &mut g, &h);
        assert_eq!(g.active_count(), 3);

        // g·H over all representatives g covers G without overlap
        let mut covered = HashSet::new();
        for rep in g.representatives() {
            for op in &h {
                assert!(covered.insert(rep.compose(op).fingerprint()));
            }
        }
        let all: HashSet<Fingerprint> = g.iter().map(|op| op.fingerprint()).collect();
        assert_eq!(covered, all);
    }

    #[test]
    fn test_extended_b_pairs_twin_laws() {
        for (super_group, sub_group) in [
            (PointGroup::Cubic, "222"),
            (PointGroup::Cubic, "422"),
            (PointGroup::Cubic, "432"),
            (PointGroup::Hexagonal, "32"),
            (PointGroup::Hexagonal, "622"),
            (PointGroup::Tetragonal, "2"),
        ] {
            let h = resolve_group(sub_group).unwrap();
            assert!(!h.is_centric());
            let mut g = super_group.select_operators();
            let summary = decompose(Algorithm::ExtendedB, &mut g, &h);
            assert_eq!(summary.index % 2, 0, "{} in {}", sub_group, super_group);

            // Every representative comes with its inversion partner
            let active = active_fingerprints(&g);
            for fp in &active {
                assert!(active.contains(&fp.negated()));
            }
        }
    }

    #[test]
    fn test_extended_b_on_acentric_orthorhombic() {
        let h = resolve_group("222").unwrap();

        let mut g = PointGroup::Cubic.select_operators();
        assert_eq!(decompose(Algorithm::B, &mut g, &h).index, 6);

        let mut g = PointGroup::Cubic.select_operators();
        assert_eq!(decompose(Algorithm::ExtendedB, &mut g, &h).index, 12);

        // Algorithm A sees the inversion partners as cosets of their own
        let mut g = PointGroup::Cubic.select_operators();
        assert_eq!(decompose(Algorithm::A, &mut g, &h).index, 12);
    }

    #[test]
    fn test_extended_b_ignored_for_centric_subgroup() {
        let h = resolve_group("mmm").unwrap();
        let mut gb = PointGroup::Cubic.select_operators();
        let mut ge = PointGroup::Cubic.select_operators();
        let b = decompose(Algorithm::B, &mut gb, &h);
        let e = decompose(Algorithm::ExtendedB, &mut ge, &h);
        assert_eq!(b.index, 6);
        assert_eq!(e.index, b.index);
        assert_eq!(active_fingerprints(&gb), active_fingerprints(&ge));
    }

    #[test]
    fn test_hexagonal_decompositions() {
        let h = resolve_group("-3m").unwrap();
        let mut g = PointGroup::Hexagonal.select_operators();
        assert_eq!(decompose(Algorithm::A, &mut g, &h).index, 2);
        let mut g = PointGroup::Hexagonal.select_operators();
        assert_eq!(decompose(Algorithm::B, &mut g, &h).index, 2);

        let h = resolve_group("-1").unwrap();
        let mut g = PointGroup::Hexagonal.select_operators();
        assert_eq!(decompose(Algorithm::B, &mut g, &h).index, 12);
    }

    #[test]
    fn test_decomposition_resets_previous_flags() {
        let h = resolve_group("-1").unwrap();
        let mut g = PointGroup::Cubic.select_operators();
        g.set_all_active(false);
        assert_eq!(decompose(Algorithm::A, &mut g, &h).index, 24);
    }
}
