use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use log::{error, info, warn};

use crate::error::{CosetError, ErrorKind};
use crate::interfaces::ReportFormat;
use crate::jobs::job_file::{read_job_file, JobFile, TaskDescription};
use crate::jobs::report::TaskReport;
use crate::jobs::shelx::{read_ins_file, twin_blocks, write_new_ins_files};
use crate::jobs::task::{process_task, Task};

#[derive(Debug, Default)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
    pub reports: Vec<TaskReport>,
}

/// Read a job file and run all of its tasks, writing reports without an
/// `OUTFILE` to stdout.
pub fn run_job_file(path: &Path, format: ReportFormat) -> Result<RunSummary, CosetError> {
    let job = read_job_file(path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Ok(run_job(&job, format, &mut out))
}

/// Run the tasks of a parsed job file one after the other. A failing task is
/// logged and skipped.
pub fn run_job<W: Write>(job: &JobFile, format: ReportFormat, default_out: &mut W) -> RunSummary {
    let mut summary = RunSummary::default();
    for desc in &job.tasks {
        summary.processed += 1;
        match run_task(desc, format, default_out) {
            Ok(report) => summary.reports.push(report),
            Err(err) => {
                summary.failed += 1;
                log_failure(desc, &err);
            }
        }
    }
    info!(
        "Program processed {} tasks input from file {} ({} failed)",
        summary.processed,
        job.path.display(),
        summary.failed
    );
    summary
}

fn log_failure(desc: &TaskDescription, err: &CosetError) {
    match err.kind() {
        ErrorKind::Classification | ErrorKind::Numerical => {
            error!("task {:?} (line {}) failed: {}", desc.title, desc.line, err)
        }
        kind => warn!(
            "task {:?} (line {}) skipped, {:?} error: {}",
            desc.title, desc.line, kind, err
        ),
    }
}

/// Resolve, process and report one task.
pub fn run_task<W: Write>(
    desc: &TaskDescription,
    format: ReportFormat,
    default_out: &mut W,
) -> Result<TaskReport, CosetError> {
    let task = Task::from_description(desc)?;
    if let Some(exec) = &task.executable {
        warn!(
            "EXEC {}: running SHELXL refinements is not supported, only .ins files are written",
            exec.display()
        );
    }

    let mut report = process_task(task)?;

    if let Some(ins_path) = &desc.ins_file {
        let ins = read_ins_file(ins_path)?;
        if let Some(base) = &desc.new_ins_base {
            let blocks = twin_blocks(&report.supergroup);
            report.new_ins_files = write_new_ins_files(base, &blocks, &ins)?;
        }
    }

    let rendered = report.render(format)?;
    match &desc.out_file {
        Some(path) => match OpenOptions::new().create(true).append(true).open(path) {
            Ok(mut file) => writeln!(file, "{}", rendered)?,
            Err(err) => {
                warn!("{}: {}, writing results to stdout", path.display(), err);
                writeln!(default_out, "{}", rendered)?;
            }
        },
        None => writeln!(default_out, "{}", rendered)?,
    }
    Ok(report)
}
