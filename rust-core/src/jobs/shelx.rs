//! SHELXL `BASF`/`TWIN` instructions for trial twin laws and the `.ins`
//! files that carry them.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use nalgebra::Matrix3;

use crate::error::CosetError;
use crate::jobs::report::OperatorPair;

// Any instruction every .ins file has would do
const ANCHOR_INSTRUCTION: &str = "FVAR";

/// Number of twin domains SHELXL should refine for an axis of order `fold`.
pub fn twin_components(fold: i32) -> usize {
    match fold {
        -1 | 1 | 2 => 2,
        _ => fold.unsigned_abs() as usize,
    }
}

/// `BASF` line with equal starting scale factors for all domains but the first.
pub fn basf_instruction(fold: i32) -> String {
    let (k, n) = match fold.unsigned_abs() {
        0..=2 => (1, 2),
        n => (n - 1, n),
    };
    let start = 1.0 / n as f64;
    let mut line = String::from("BASF ");
    for _ in 0..k {
        line.push_str(&format!(" {:4.2}", start));
    }
    line
}

pub fn twin_instruction(m: &Matrix3<f64>, fold: i32) -> String {
    let mut line = String::from("TWIN ");
    for row in 0..3 {
        for col in 0..3 {
            line.push_str(&format!("{:7.3}", m[(row, col)] + 0.0));
        }
    }
    line.push_str(&format!(" {}", twin_components(fold)));
    line
}

/// The `BASF` and `TWIN` lines for one twin law.
pub fn twin_block(m: &Matrix3<f64>, fold: i32) -> [String; 2] {
    [basf_instruction(fold), twin_instruction(m, fold)]
}

/// One block per classified coset representative, in the subgroup's basis.
pub fn twin_blocks(pairs: &[OperatorPair]) -> Vec<[String; 2]> {
    pairs
        .iter()
        .filter(|p| p.is_representative)
        .filter_map(|p| p.classification.as_ref().map(|c| twin_block(&p.transformed, c.fold)))
        .collect()
}

pub fn read_ins_file(path: &Path) -> Result<Vec<String>, CosetError> {
    Ok(fs::read_to_string(path)?.lines().map(str::to_string).collect())
}

/// Copy of `ins` with `block` inserted after the first line starting with `FVAR`.
/// Without such a line the copy is returned unchanged.
pub fn insert_twin_instruction(ins: &[String], block: &[String]) -> Vec<String> {
    let mut edited = Vec::with_capacity(ins.len() + block.len());
    let mut inserted = false;
    for line in ins {
        edited.push(line.clone());
        if !inserted && line.starts_with(ANCHOR_INSTRUCTION) {
            edited.extend(block.iter().cloned());
            inserted = true;
        }
    }
    if !inserted {
        warn!("SHELX instruction {} not found, no TWIN instruction inserted", ANCHOR_INSTRUCTION);
    }
    edited
}

/// Name of the `index`-th (1-based) new `.ins` file.
pub fn new_ins_file_name(base: &str, index: usize) -> PathBuf {
    PathBuf::from(format!("{}_{:02}.ins", base, index))
}

/// Write one `.ins` file per twin law, `<base>_01.ins`, `<base>_02.ins`, ...
pub fn write_new_ins_files(
    base: &str,
    blocks: &[[String; 2]],
    ins: &[String],
) -> Result<Vec<PathBuf>, CosetError> {
    let mut written = Vec::with_capacity(blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        let path = new_ins_file_name(base, i + 1);
        info!("Writing new SHELX .ins file {}", path.display());
        let mut contents = insert_twin_instruction(ins, block).join("\n");
        contents.push('\n');
        fs::write(&path, contents)?;
        written.push(path);
    }
    Ok(written)
}
