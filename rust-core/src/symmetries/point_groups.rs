use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::error::CosetError;
use crate::symmetries::symmetry_operations::{OperatorSet, SymmetryOperator};

/// The holoaxial point groups whose holohedries can act as twinning supergroups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointGroup {
    /// 1, holohedry -1
    Triclinic,
    /// 2, holohedry 2/m
    Monoclinic,
    /// 222, holohedry mmm
    Orthorhombic,
    /// 422, holohedry 4/mmm
    Tetragonal,
    /// 32 in the hexagonal setting, holohedry -3m
    Trigonal,
    /// 622, holohedry 6/mmm
    Hexagonal,
    /// 432, holohedry m-3m
    Cubic,
}

// Rotation parts in row-major order (11 12 13 21 22 23 31 32 33). Numbers in
// the comments refer to the operator list order in Flack's paper (p. 567) for
// space group P432 (#207).
#[rustfmt::skip]
const OPS_432: [[i8; 9]; 24] = [
    [ 1,  0,  0,   0,  1,  0,   0,  0,  1], //  1
    [-1,  0,  0,   0,  1,  0,   0,  0, -1], //  3
    [-1,  0,  0,   0, -1,  0,   0,  0,  1], //  2
    [ 1,  0,  0,   0, -1,  0,   0,  0, -1], //  4
    [ 0,  1,  0,   1,  0,  0,   0,  0, -1], // 13
    [ 0, -1,  0,  -1,  0,  0,   0,  0, -1], // 14
    [-1,  0,  0,   0,  0,  1,   0,  1,  0], // 18
    [-1,  0,  0,   0,  0, -1,   0, -1,  0], // 19
    [ 0,  0,  1,   0, -1,  0,   1,  0,  0], // 22
    [ 0,  0, -1,   0, -1,  0,  -1,  0,  0], // 24
    [ 0, -1,  0,   1,  0,  0,   0,  0,  1], // 16
    [ 0,  1,  0,  -1,  0,  0,   0,  0,  1], // 15
    [ 0,  0,  1,   1,  0,  0,   0,  1,  0], //  5
    [ 0,  0,  1,  -1,  0,  0,   0, -1,  0], //  6
    [ 0,  0, -1,  -1,  0,  0,   0,  1,  0], //  7
    [ 0,  0, -1,   1,  0,  0,   0, -1,  0], //  8
    [ 0,  1,  0,   0,  0,  1,   1,  0,  0], //  9
    [ 0, -1,  0,   0,  0,  1,  -1,  0,  0], // 10
    [ 0,  1,  0,   0,  0, -1,  -1,  0,  0], // 11
    [ 0, -1,  0,   0,  0, -1,   1,  0,  0], // 12
    [ 1,  0,  0,   0,  0,  1,   0, -1,  0], // 17
    [ 1,  0,  0,   0,  0, -1,   0,  1,  0], // 20
    [ 0,  0,  1,   0,  1,  0,  -1,  0,  0], // 21
    [ 0,  0, -1,   0,  1,  0,   1,  0,  0], // 23
];

// Same convention for space group P622 (#177).
#[rustfmt::skip]
const OPS_622: [[i8; 9]; 12] = [
    [ 1,  0,  0,   0,  1,  0,   0,  0,  1], //  1
    [ 0,  1,  0,   1,  0,  0,   0,  0, -1], //  7
    [ 1,  0,  0,  -1, -1,  0,   0,  0, -1], //  8
    [-1, -1,  0,   0,  1,  0,   0,  0, -1], //  9
    [-1,  0,  0,   0, -1,  0,   0,  0,  1], //  4
    [ 0, -1,  0,  -1,  0,  0,   0,  0, -1], // 10
    [-1,  0,  0,   1,  1,  0,   0,  0, -1], // 11
    [ 1,  1,  0,   0, -1,  0,   0,  0, -1], // 12
    [-1, -1,  0,   1,  0,  0,   0,  0,  1], //  2
    [ 0,  1,  0,  -1, -1,  0,   0,  0,  1], //  3
    [ 1,  1,  0,  -1,  0,  0,   0,  0,  1], //  5
    [ 0, -1,  0,   1,  1,  0,   0,  0,  1], //  6
];

// Subsets of the two tables forming each holoaxial group
const IDX_432: [usize; 24] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
];
const IDX_422: [usize; 8] = [0, 1, 2, 3, 4, 5, 10, 11];
const IDX_222: [usize; 4] = [0, 1, 2, 3];
const IDX_2: [usize; 2] = [0, 1];
const IDX_1: [usize; 1] = [0];
const IDX_622: [usize; 12] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
const IDX_32: [usize; 6] = [0, 1, 2, 3, 8, 9];

impl PointGroup {
    pub const ALL: [PointGroup; 7] = [
        PointGroup::Triclinic,
        PointGroup::Monoclinic,
        PointGroup::Orthorhombic,
        PointGroup::Tetragonal,
        PointGroup::Trigonal,
        PointGroup::Hexagonal,
        PointGroup::Cubic,
    ];

    /// Numeric identifier (the rotation group's symbol read as a number).
    pub fn id(&self) -> u32 {
        match self {
            PointGroup::Triclinic => 1,
            PointGroup::Monoclinic => 2,
            PointGroup::Orthorhombic => 222,
            PointGroup::Tetragonal => 422,
            PointGroup::Trigonal => 32,
            PointGroup::Hexagonal => 622,
            PointGroup::Cubic => 432,
        }
    }

    pub fn from_id(id: u32) -> Result<Self, CosetError> {
        Self::ALL
            .into_iter()
            .find(|pg| pg.id() == id)
            .ok_or_else(|| CosetError::UnknownPointGroup(id.to_string()))
    }

    /// Hermann-Mauguin symbol of the holohedry (the centrosymmetric supergroup).
    pub fn holohedry_symbol(&self) -> &'static str {
        match self {
            PointGroup::Triclinic => "-1",
            PointGroup::Monoclinic => "2/m",
            PointGroup::Orthorhombic => "mmm",
            PointGroup::Tetragonal => "4/mmm",
            PointGroup::Trigonal => "-3m",
            PointGroup::Hexagonal => "6/mmm",
            PointGroup::Cubic => "m-3m",
        }
    }

    /// Look up a point group by its holohedry symbol, e.g. `"m-3m"`.
    pub fn from_name(name: &str) -> Result<Self, CosetError> {
        Self::ALL
            .into_iter()
            .find(|pg| pg.holohedry_symbol() == name)
            .ok_or_else(|| CosetError::UnknownPointGroup(name.to_string()))
    }

    /// Look up a point group by its rotation group symbol, e.g. `"432"`.
    pub fn from_rotation_symbol(symbol: &str) -> Result<Self, CosetError> {
        symbol
            .parse::<u32>()
            .map_err(|_| CosetError::UnknownPointGroup(symbol.to_string()))
            .and_then(Self::from_id)
    }

    fn table(&self) -> (&'static [[i8; 9]], &'static [usize]) {
        match self {
            PointGroup::Cubic => (&OPS_432, &IDX_432),
            PointGroup::Tetragonal => (&OPS_432, &IDX_422),
            PointGroup::Orthorhombic => (&OPS_432, &IDX_222),
            PointGroup::Monoclinic => (&OPS_432, &IDX_2),
            PointGroup::Triclinic => (&OPS_432, &IDX_1),
            PointGroup::Hexagonal => (&OPS_622, &IDX_622),
            PointGroup::Trigonal => (&OPS_622, &IDX_32),
        }
    }

    /// The proper rotations of the group, identity first.
    pub fn rotation_matrices(&self) -> Vec<Matrix3<f64>> {
        let (ops, indices) = self.table();
        indices
            .iter()
            .map(|&i| Matrix3::from_row_slice(&ops[i].map(f64::from)))
            .collect()
    }

    /// Number of operators in the holohedry.
    pub fn order(&self) -> usize {
        2 * self.table().1.len()
    }

    /// The holohedry: proper rotations followed by their inversion partners.
    pub fn select_operators(&self) -> OperatorSet {
        OperatorSet::from_proper(&self.rotation_matrices())
    }

    /// The acentric rotation group alone.
    pub fn proper_operators(&self) -> OperatorSet {
        OperatorSet::new(
            self.rotation_matrices()
                .into_iter()
                .map(SymmetryOperator::new)
                .collect(),
        )
    }
}

impl std::fmt::Display for PointGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.holohedry_symbol())
    }
}

/// Operators of the holohedry with numeric identifier `id`.
pub fn select_operators(id: u32) -> Result<OperatorSet, CosetError> {
    PointGroup::from_id(id).map(|pg| pg.select_operators())
}

/// Numeric identifier for a holohedry symbol.
pub fn lookup_by_name(name: &str) -> Result<u32, CosetError> {
    PointGroup::from_name(name).map(|pg| pg.id())
}

/// Resolve a subgroup name: a holohedry symbol gives the full centric group,
/// a rotation group symbol (`"222"`) gives the acentric proper rotations.
pub fn resolve_group(name: &str) -> Result<OperatorSet, CosetError> {
    PointGroup::from_name(name)
        .map(|pg| pg.select_operators())
        .or_else(|_| PointGroup::from_rotation_symbol(name).map(|pg| pg.proper_operators()))
        .map_err(|_| CosetError::UnknownPointGroup(name.to_string()))
}
