use std::path::PathBuf;

use log::{debug, info};
use nalgebra::Matrix3;

use crate::coset::decomposition::decompose;
use crate::error::CosetError;
use crate::interfaces::Algorithm;
use crate::jobs::job_file::TaskDescription;
use crate::jobs::report::{pair_operators, TaskHeader, TaskReport};
use crate::lattice::basis_transform::LatticeTransform;
use crate::symmetries::operator_analysis::analyze_group;
use crate::symmetries::point_groups::{resolve_group, PointGroup};
use crate::symmetries::symmetry_operations::OperatorSet;

/// A fully resolved decomposition job.
#[derive(Debug, Clone)]
pub struct Task {
    pub title: String,
    pub algorithm: Algorithm,
    pub supergroup_name: String,
    pub supergroup: OperatorSet,
    pub subgroup_name: String,
    pub subgroup: OperatorSet,
    /// Subgroup basis to supergroup basis
    pub transform: LatticeTransform,
    pub ins_file: Option<PathBuf>,
    pub new_ins_base: Option<String>,
    pub executable: Option<PathBuf>,
}

impl Task {
    /// A task with both groups taken from the catalog and no change of basis.
    ///
    /// `supergroup` is a holohedry symbol such as `"m-3m"`; `subgroup` is either a
    /// holohedry symbol or a rotation group symbol such as `"222"`.
    pub fn new(
        title: impl Into<String>,
        algorithm: Algorithm,
        supergroup: &str,
        subgroup: &str,
    ) -> Result<Self, CosetError> {
        Ok(Task {
            title: title.into(),
            algorithm,
            supergroup_name: supergroup.to_string(),
            supergroup: PointGroup::from_name(supergroup)?.select_operators(),
            subgroup_name: subgroup.to_string(),
            subgroup: resolve_group(subgroup)?,
            transform: LatticeTransform::identity(),
            ins_file: None,
            new_ins_base: None,
            executable: None,
        })
    }

    pub fn with_transform(mut self, transform: LatticeTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Resolve the names and matrices of a job-file task.
    pub fn from_description(desc: &TaskDescription) -> Result<Self, CosetError> {
        let algorithm = desc
            .algorithm
            .as_deref()
            .ok_or(CosetError::NoAlgorithm)
            .and_then(Algorithm::from_directive)?;

        let supergroup_name = desc
            .supergroup
            .clone()
            .ok_or(CosetError::MissingDirective("SUPERGROUP"))?;
        let supergroup = PointGroup::from_name(&supergroup_name)?.select_operators();

        let spec = desc
            .subgroup
            .as_ref()
            .ok_or(CosetError::MissingDirective("SUBGROUP"))?;
        let subgroup = if spec.declared == 0 {
            resolve_group(&spec.name)?
        } else {
            if spec.matrices.len() != spec.declared {
                return Err(CosetError::SubgroupCount {
                    expected: spec.declared,
                    found: spec.matrices.len(),
                });
            }
            let set = OperatorSet::from_matrices(&spec.matrices)?;
            if !set.starts_with_identity() {
                return Err(CosetError::IdentityNotFirst);
            }
            // Algorithm B takes its generators from the proper half
            set.into_centric_layout()?
        };

        let transform = LatticeTransform::new(desc.transform.unwrap_or_else(Matrix3::identity))?;

        Ok(Task {
            title: desc.title.clone(),
            algorithm,
            supergroup_name,
            supergroup,
            subgroup_name: spec.name.clone(),
            subgroup,
            transform,
            ins_file: desc.ins_file.clone(),
            new_ins_base: desc.new_ins_base.clone(),
            executable: desc.executable.clone(),
        })
    }
}

/// Run one task: move the subgroup into the supergroup's basis, decompose,
/// move the supergroup back and classify the coset representatives.
pub fn process_task(task: Task) -> Result<TaskReport, CosetError> {
    info!("Processing task: {}", task.title);
    let Task {
        title,
        algorithm,
        supergroup_name,
        mut supergroup,
        subgroup_name,
        mut subgroup,
        transform,
        ins_file,
        new_ins_base,
        executable,
    } = task;

    subgroup.set_all_active(true);
    let original_subgroup = subgroup.clone();
    subgroup.transform(&transform);
    subgroup.validate_encoding()?;
    debug!("subgroup {} transformed to the supergroup basis", subgroup_name);

    let summary = decompose(algorithm, &mut supergroup, &subgroup);

    let original_supergroup = supergroup.clone();
    supergroup.transform(&transform.inverted());
    analyze_group(&mut supergroup)?;

    let header = TaskHeader {
        title,
        supergroup: supergroup_name,
        subgroup: subgroup_name,
        centricity: original_subgroup.centricity(),
        algorithm,
        transform: *transform.matrix(),
        ins_file,
        new_ins_base,
        executable,
    };

    let report = TaskReport {
        header,
        subgroup: pair_operators(&original_subgroup, &subgroup)?,
        supergroup: pair_operators(&original_supergroup, &supergroup)?,
        summary,
        new_ins_files: Vec::new(),
    };
    info!(
        "Task {:?} done: {} coset representatives",
        report.header.title, report.summary.index
    );
    Ok(report)
}
