//! Coset decomposition after H. D. Flack, Acta Cryst. (1987) A43, 564-568.
//!
//! The supergroup G is partitioned into left cosets of the subgroup H. On
//! return every operator of G carries `is_representative`: exactly one member
//! of each coset keeps it set. Equality is always fingerprint equality.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::interfaces::Algorithm;
use crate::lattice::matrix_kernel::multiply;
use crate::symmetries::operator_codec::Fingerprint;
use crate::symmetries::symmetry_operations::{OperatorSet, SymmetryOperator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosetSummary {
    pub algorithm: Algorithm,
    /// Subgroup operators used as generators, identity included
    pub generators_considered: usize,
    /// Leading supergroup operators the main loop ran over
    pub supergroup_considered: usize,
    /// Number of active representatives left in the supergroup
    pub index: usize,
}

fn product_fingerprint(g: &SymmetryOperator, h: &SymmetryOperator) -> Fingerprint {
    Fingerprint::encode(&multiply(g.matrix(), h.matrix()))
}

/// Decompose `supergroup` by `subgroup` with the selected algorithm.
pub fn decompose(
    algorithm: Algorithm,
    supergroup: &mut OperatorSet,
    subgroup: &OperatorSet,
) -> CosetSummary {
    match algorithm {
        Algorithm::A => algorithm_a(supergroup, subgroup),
        Algorithm::B => algorithm_b(supergroup, subgroup, false),
        Algorithm::ExtendedB => algorithm_b(supergroup, subgroup, true),
    }
}

/// Algorithm A: no assumption on either group.
///
/// For every still active `G[i]` and every subgroup generator `H[j]` but the
/// identity, all later `G[k]` equal to `G[i]·H[j]` are deactivated.
pub fn algorithm_a(supergroup: &mut OperatorSet, subgroup: &OperatorSet) -> CosetSummary {
    supergroup.set_all_active(true);
    let fingerprints: Vec<Fingerprint> = supergroup.iter().map(|op| op.fingerprint()).collect();
    let ops = supergroup.operators_mut();

    for i in 0..ops.len() {
        if !ops[i].is_representative {
            continue;
        }
        for h in subgroup.iter().skip(1) {
            let product = product_fingerprint(&ops[i], h);
            if product.is_error() {
                continue;
            }
            for k in (i + 1)..ops.len() {
                if fingerprints[k] == product {
                    ops[k].is_representative = false;
                }
            }
        }
    }

    let summary = CosetSummary {
        algorithm: Algorithm::A,
        generators_considered: subgroup.len(),
        supergroup_considered: supergroup.len(),
        index: supergroup.active_count(),
    };
    debug!("algorithm A: {:?}", summary);
    summary
}

/// Algorithm B: the supergroup is centrosymmetric with its proper rotations
/// in the first half and their inversion partners, in the same order, in the
/// second half.
///
/// The second half starts deactivated and is never visited. A centric
/// subgroup only contributes the generators of its first half. A product
/// `G[i]·H[j]` deactivates later first-half operators equal to it or to its
/// negation. With `extended` and an acentric subgroup the inversion partner of
/// every remaining representative is reactivated afterwards, so twin laws are
/// reported in centrosymmetric pairs.
pub fn algorithm_b(
    supergroup: &mut OperatorSet,
    subgroup: &OperatorSet,
    extended: bool,
) -> CosetSummary {
    let half = supergroup.len() / 2;
    let centric = subgroup.is_centric();
    let generators = if centric {
        subgroup.len() / 2
    } else {
        subgroup.len()
    };

    let fingerprints: Vec<Fingerprint> = supergroup.iter().map(|op| op.fingerprint()).collect();
    let ops = supergroup.operators_mut();
    for (k, op) in ops.iter_mut().enumerate() {
        op.is_representative = k < half;
    }

    for i in 0..half {
        if !ops[i].is_representative {
            continue;
        }
        for h in subgroup.iter().take(generators).skip(1) {
            let product = product_fingerprint(&ops[i], h);
            if product.is_error() {
                continue;
            }
            let negated = product.negated();
            for k in (i + 1)..half {
                if fingerprints[k] == product || fingerprints[k] == negated {
                    ops[k].is_representative = false;
                }
            }
        }
    }

    if extended && !centric {
        for i in 0..half {
            if !ops[i].is_representative {
                continue;
            }
            let partner = fingerprints[i].negated();
            for j in half..ops.len() {
                if fingerprints[j] == partner {
                    ops[j].is_representative = true;
                }
            }
        }
    }

    let summary = CosetSummary {
        algorithm: if extended {
            Algorithm::ExtendedB
        } else {
            Algorithm::B
        },
        generators_considered: generators,
        supergroup_considered: half,
        index: supergroup.active_count(),
    };
    debug!("algorithm B: {:?}", summary);
    summary
}
