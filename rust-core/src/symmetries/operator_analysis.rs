use log::debug;
use nalgebra::Matrix3;

use crate::error::CosetError;
use crate::lattice::matrix_kernel::{determinant, round_to_nearest_int, trace};
use crate::symmetries::eigen::{general_eigen_solve, symmetric_eigen_solve, unitize, RealEigenPair};
use crate::symmetries::symmetry_operations::{Classification, OperatorSet, SymmetryOperator};

/// Order of the rotation axis for a trace/determinant pair.
///
/// Proper rotations (det = +1) give positive folds, rotoinversions (det = -1)
/// negative ones: -1 is the inversion center and -2 a mirror plane.
pub fn fold_from_trace_determinant(trace: i32, determinant: i32) -> Option<i32> {
    match (determinant, trace) {
        (1, -1) => Some(2),
        (1, 0) => Some(3),
        (1, 1) => Some(4),
        (1, 2) => Some(6),
        (1, 3) => Some(1),
        (-1, -3) => Some(-1),
        (-1, -2) => Some(-6),
        (-1, -1) => Some(-4),
        (-1, 0) => Some(-3),
        (-1, 1) => Some(-2),
        _ => None,
    }
}

/// Rotation angle in degrees, `acos((tr/det - 1) / 2)`.
pub fn rotation_angle(trace: f64, determinant: f64) -> f64 {
    let cos = (trace / determinant - 1.0) / 2.0;
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

// Among the real eigenpairs, the one whose eigenvalue has the sign of the
// determinant and lies closest to it
fn axis_pair(pairs: &[RealEigenPair], det: f64) -> Option<RealEigenPair> {
    pairs
        .iter()
        .filter(|p| p.value.signum() == det.signum())
        .min_by(|a, b| (a.value - det).abs().total_cmp(&(b.value - det).abs()))
        .copied()
}

/// Fold, angle and rotation axis of a point symmetry operator given by its matrix.
pub fn classify(m: &Matrix3<f64>, symmetric: bool) -> Result<Classification, CosetError> {
    let det = determinant(m);
    let tr = trace(m);
    let fold = fold_from_trace_determinant(round_to_nearest_int(tr), round_to_nearest_int(det))
        .ok_or(CosetError::UnknownOperatorType {
            trace: tr,
            determinant: det,
        })?;
    let sign = det.signum();

    let pairs: Vec<RealEigenPair> = if symmetric {
        symmetric_eigen_solve(m)?.to_vec()
    } else {
        let mut real = Vec::with_capacity(3);
        for (index, pair) in general_eigen_solve(m)?.iter().enumerate() {
            debug!("  eigenpair {}: {}", index, pair);
            if pair.is_real() && pair.value.re.signum() == sign {
                real.push(pair.to_real(index)?);
            }
        }
        real
    };

    let chosen = axis_pair(&pairs, sign).ok_or(CosetError::NoAxisEigenpair { determinant: det })?;

    Ok(Classification {
        fold,
        rotation_angle: rotation_angle(tr, sign),
        eigen_value: chosen.value,
        axis: unitize(&chosen.vector),
    })
}

/// Classify one operator and store the result on it.
pub fn analyze_operator(op: &mut SymmetryOperator) -> Result<(), CosetError> {
    let classification = classify(op.matrix(), op.is_symmetric())?;
    debug!(
        "operator {:#07x}: fold {}, angle {:.1}, axis [{:.2} {:.2} {:.2}]",
        op.fingerprint(),
        classification.fold,
        classification.rotation_angle,
        classification.axis[0],
        classification.axis[1],
        classification.axis[2]
    );
    op.classification = Some(classification);
    Ok(())
}

/// Classify every operator still marked as a coset representative. Inactive
/// operators keep no classification.
pub fn analyze_group(set: &mut OperatorSet) -> Result<(), CosetError> {
    for op in set.operators_mut() {
        if op.is_representative {
            analyze_operator(op)?;
        } else {
            op.classification = None;
        }
    }
    Ok(())
}
