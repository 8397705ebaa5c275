// Jobs module: Contains the job-file driven workflow around the coset decomposition
// This module reads task descriptions, runs them and writes reports and SHELX files

// ======================== MODULE DECLARATIONS ========================
pub mod job_file;
pub mod report;
pub mod runner;
pub mod shelx;
pub mod task;

mod _tests_report;

// ======================== JOB FILES ========================
pub use job_file::{
    JobFile,                        // struct - parsed job file: path, tasks, whether END was seen
    SubgroupSpec,                   // struct - SUBGROUP name, declared count and RMAT matrices
    TaskDescription,                // struct - one task as written, names unresolved
    parse_job_file,                 // fn(text: &str, path: &Path) -> Result<JobFile, CosetError>
    read_job_file,                  // fn(path: &Path) -> Result<JobFile, CosetError>
};

// ======================== TASKS ========================
pub use task::{
    Task,                           // struct - resolved algorithm, operator sets and lattice transform
    process_task,                   // fn(task: Task) -> Result<TaskReport, CosetError> - transform, decompose, classify
};
// Task impl methods:
//   new(title, algorithm, supergroup: &str, subgroup: &str) -> Result<Self, CosetError> - catalog groups, identity basis
//   with_transform(self, transform: LatticeTransform) -> Self
//   from_description(desc: &TaskDescription) -> Result<Self, CosetError>

// ======================== REPORTS ========================
pub use report::{
    OperatorPair,                   // struct - matrix before and after a change of basis with its classification
    TaskHeader,                     // struct - task parameters echoed in the report
    TaskReport,                     // struct - everything one task produced; Display renders the text report
    pair_operators,                 // fn(original: &OperatorSet, transformed: &OperatorSet) -> Result<Vec<OperatorPair>, CosetError>
};

// ======================== SHELX FILES ========================
pub use shelx::{
    basf_instruction,               // fn(fold: i32) -> String
    insert_twin_instruction,        // fn(ins: &[String], block: &[String]) -> Vec<String> - after the first FVAR line
    twin_instruction,               // fn(m: &Matrix3<f64>, fold: i32) -> String
    write_new_ins_files,            // fn(base: &str, blocks: &[[String; 2]], ins: &[String]) -> Result<Vec<PathBuf>, CosetError>
};

// ======================== BATCH RUNS ========================
pub use runner::{
    RunSummary,                     // struct - processed and failed task counts plus the reports
    run_job,                        // fn(job: &JobFile, format: ReportFormat, default_out: &mut impl Write) -> RunSummary
    run_job_file,                   // fn(path: &Path, format: ReportFormat) -> Result<RunSummary, CosetError>
};
