#[cfg(test)]
mod _tests_report {
    use super::super::report::pair_operators;
    use super::super::task::{process_task, Task};
    use crate::error::ErrorKind;
    use crate::interfaces::{Algorithm, ReportFormat};
    use crate::symmetries::point_groups::PointGroup;

    fn orthorhombic_in_cubic() -> super::super::report::TaskReport {
        let task = Task::new("mmm crystal, cubic lattice", Algorithm::B, "m-3m", "mmm").unwrap();
        process_task(task).unwrap()
    }

    #[test]
    fn test_pair_operators_requires_equal_lengths() {
        let a = PointGroup::Cubic.select_operators();
        let b = PointGroup::Tetragonal.select_operators();
        let err = pair_operators(&a, &b).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let pairs = pair_operators(&a, &a).unwrap();
        assert_eq!(pairs.len(), 48);
        assert_eq!(pairs[0].original, pairs[0].transformed);
    }

    #[test]
    fn test_text_report_layout() {
        let report = orthorhombic_in_cubic();
        assert_eq!(report.coset_index(), 6);

        let text = report.render(ReportFormat::Text).unwrap();
        assert!(text.contains("Task Description: mmm crystal, cubic lattice"));
        assert!(text.contains("Metrically Available Supergroup's Symmetry: m-3m"));
        assert!(text.contains("Crystal's Pointgroup (Subgroup): mmm (centric)"));
        assert!(text.contains("Flack Algorithm: B"));
        assert!(text.contains("*** Potential Twin Laws for this Subgroup-Supergroup Relationship ***"));
        assert!(text.contains(
            "** 3-fold (proper) rotation axis about the [1.00  1.00  1.00] direction. **"
        ));
        assert!(text.contains(
            "** 2-fold (proper) rotation axis about the [1.00  1.00  0.00] direction. **"
        ));
        assert!(text.contains("  1.00  0.00  0.00\t\t\t  1.00  0.00  0.00"));
        assert!(!text.contains("-0.00"));
        assert!(text.contains("Coset index: 6"));
        assert!(text.trim_end().ends_with("### End of COSET Output ###"));
    }

    #[test]
    fn test_inversion_twin_is_named() {
        let task = Task::new("inversion twin", Algorithm::A, "-1", "1").unwrap();
        let report = process_task(task).unwrap();
        assert_eq!(report.coset_index(), 2);
        assert!(report.to_string().contains("Twin domains related by inversion"));
    }

    #[test]
    fn test_json_report() {
        let report = orthorhombic_in_cubic();
        let json = report.render(ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["header"]["supergroup"], "m-3m");
        assert_eq!(value["summary"]["index"], 6);
        assert_eq!(value["supergroup"].as_array().unwrap().len(), 48);
        assert_eq!(value["subgroup"].as_array().unwrap().len(), 8);
    }
}
