//! Reader for COSET job files.
//!
//! A job file is a list of tasks, each opened by a `TITLE` line:
//!
//! ```text
//! # twinning by merohedry, orthorhombic crystal on a metrically tetragonal lattice
//! TITLE  mmm crystal in a 4/mmm lattice
//! ALGORITHM B
//! SUPERGROUP 4/mmm
//! SUBGROUP mmm 0
//! TRANS 1 0 0  0 1 0  0 0 1
//! END
//! ```
//!
//! A directive is recognised from its first three characters, ignoring case.
//! Lines starting with `#` are comments and unknown directives are skipped.

use std::path::{Path, PathBuf};

use log::warn;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::error::CosetError;
use crate::lattice::matrix_kernel::{from_row_major, inverse_transpose};

const COMMENT_CHAR: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    Title,
    Algorithm,
    Supergroup,
    Subgroup,
    Rmat,
    Trans,
    InsFile,
    OutFile,
    Exec,
    NewIns,
    End,
}

impl Directive {
    fn from_line(line: &str) -> Option<Self> {
        let nibble = line.get(..3)?.to_ascii_uppercase();
        match nibble.as_str() {
            "TIT" => Some(Directive::Title),
            "ALG" => Some(Directive::Algorithm),
            "SUP" => Some(Directive::Supergroup),
            "SUB" => Some(Directive::Subgroup),
            "RMA" => Some(Directive::Rmat),
            "TRA" => Some(Directive::Trans),
            "INS" => Some(Directive::InsFile),
            "OUT" => Some(Directive::OutFile),
            "EXE" => Some(Directive::Exec),
            "NEW" => Some(Directive::NewIns),
            "END" => Some(Directive::End),
            _ => None,
        }
    }
}

/// Subgroup as declared by `SUBGROUP <name> <n>` and the `RMAT` lines after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubgroupSpec {
    pub name: String,
    /// Number of `RMAT` matrices announced; 0 takes the group from the catalog
    pub declared: usize,
    /// Reciprocal-space operators: the inverse transposes of the `RMAT` matrices
    pub matrices: Vec<Matrix3<f64>>,
}

/// One task as written in the job file, before any name is resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDescription {
    pub title: String,
    /// Line of the `TITLE` directive
    pub line: usize,
    pub algorithm: Option<String>,
    pub supergroup: Option<String>,
    pub subgroup: Option<SubgroupSpec>,
    pub transform: Option<Matrix3<f64>>,
    pub ins_file: Option<PathBuf>,
    pub out_file: Option<PathBuf>,
    pub new_ins_base: Option<String>,
    pub executable: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobFile {
    pub path: PathBuf,
    pub tasks: Vec<TaskDescription>,
    pub has_end: bool,
}

struct Parser<'a> {
    path: &'a Path,
    line: usize,
    tasks: Vec<TaskDescription>,
    current: Option<TaskDescription>,
}

impl<'a> Parser<'a> {
    fn error(&self, message: impl Into<String>) -> CosetError {
        CosetError::JobFile {
            file: self.path.to_path_buf(),
            line: self.line,
            message: message.into(),
        }
    }

    fn task(&mut self, keyword: &str) -> Result<&mut TaskDescription, CosetError> {
        let err = self.error(format!("{} before the first TITLE", keyword));
        self.current.as_mut().ok_or(err)
    }

    fn matrix(&self, args: &str, keyword: &str) -> Result<Matrix3<f64>, CosetError> {
        let values = args
            .split_whitespace()
            .take(9)
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| self.error(format!("bad input line for {}: {}", keyword, e)))?;
        let values: [f64; 9] = values
            .try_into()
            .map_err(|_| self.error(format!("bad input line for {}: expected 9 numbers", keyword)))?;
        Ok(from_row_major(&values))
    }

    fn handle(&mut self, directive: Directive, args: &str) -> Result<(), CosetError> {
        match directive {
            Directive::Title => {
                if let Some(task) = self.current.take() {
                    self.tasks.push(task);
                }
                self.current = Some(TaskDescription {
                    title: args.to_string(),
                    line: self.line,
                    ..TaskDescription::default()
                });
            }
            Directive::Algorithm => {
                if args.is_empty() {
                    return Err(self.error("bad input line, algorithm not set"));
                }
                self.task("ALGORITHM")?.algorithm = Some(args.to_string());
            }
            Directive::Supergroup => {
                let name = args
                    .split_whitespace()
                    .next()
                    .ok_or_else(|| self.error("bad input line, supergroup not set"))?
                    .to_string();
                self.task("SUPERGROUP")?.supergroup = Some(name);
            }
            Directive::Subgroup => {
                let mut tokens = args.split_whitespace();
                let name = tokens.next();
                let declared = tokens.next().and_then(|n| n.parse::<usize>().ok());
                let (name, declared) = match (name, declared) {
                    (Some(name), Some(declared)) => (name.to_string(), declared),
                    _ => return Err(self.error("bad input line, subgroup not set")),
                };
                self.task("SUBGROUP")?.subgroup = Some(SubgroupSpec {
                    name,
                    declared,
                    matrices: Vec::with_capacity(declared),
                });
            }
            Directive::Rmat => {
                let m = self.matrix(args, "RMAT")?;
                let reciprocal = inverse_transpose(&m)
                    .map_err(|e| self.error(format!("bad input line for RMAT: {}", e)))?;
                let line = self.line;
                let missing = self.error("SUBGROUP must precede RMAT directive");
                let Some(subgroup) = self.task("RMAT")?.subgroup.as_mut() else {
                    return Err(missing);
                };
                if subgroup.matrices.len() == subgroup.declared {
                    warn!(
                        "line {}: subgroup {} already has {} matrices, RMAT ignored",
                        line, subgroup.name, subgroup.declared
                    );
                } else {
                    subgroup.matrices.push(reciprocal);
                }
            }
            Directive::Trans => {
                let m = self.matrix(args, "TRANS")?;
                self.task("TRANS")?.transform = Some(m);
            }
            Directive::InsFile => {
                let path = self.filename(args, "INSFILE")?;
                self.task("INSFILE")?.ins_file = Some(path);
            }
            Directive::OutFile => {
                let path = self.filename(args, "OUTFILE")?;
                self.task("OUTFILE")?.out_file = Some(path);
            }
            Directive::NewIns => {
                let base = self.filename(args, "NEWINS")?;
                let unmet = self.error("NEWINS requires INSFILE and TRANS to precede it");
                let task = self.task("NEWINS")?;
                if task.ins_file.is_none() || task.transform.is_none() {
                    return Err(unmet);
                }
                task.new_ins_base = Some(base.to_string_lossy().into_owned());
            }
            Directive::Exec => {
                let path = self.filename(args, "EXEC")?;
                let unmet = self.error("EXEC requires TRANS and NEWINS to precede it");
                let task = self.task("EXEC")?;
                if task.transform.is_none() || task.new_ins_base.is_none() {
                    return Err(unmet);
                }
                task.executable = Some(path);
            }
            Directive::End => {}
        }
        Ok(())
    }

    fn filename(&self, args: &str, keyword: &str) -> Result<PathBuf, CosetError> {
        args.split_whitespace()
            .next()
            .map(PathBuf::from)
            .ok_or_else(|| self.error(format!("{} needs a file name", keyword)))
    }
}

/// Parse the text of a job file. `path` only labels error messages.
///
/// Syntax errors abort the whole file; names are resolved later, per task.
pub fn parse_job_file(text: &str, path: &Path) -> Result<JobFile, CosetError> {
    let mut parser = Parser {
        path,
        line: 0,
        tasks: Vec::new(),
        current: None,
    };
    let mut has_end = false;

    for (index, raw) in text.lines().enumerate() {
        parser.line = index + 1;
        if raw.starts_with(COMMENT_CHAR) {
            continue;
        }
        let Some(directive) = Directive::from_line(raw) else {
            continue;
        };
        if directive == Directive::End {
            has_end = true;
            break;
        }

        // Everything after the keyword itself
        let args = raw
            .trim_start()
            .split_once(char::is_whitespace)
            .map_or("", |(_, rest)| rest.trim());
        parser.handle(directive, args)?;
    }

    if !has_end {
        warn!("{}: missing END statement at end of input file", path.display());
    }
    if let Some(task) = parser.current.take() {
        parser.tasks.push(task);
    }

    Ok(JobFile {
        path: path.to_path_buf(),
        tasks: parser.tasks,
        has_end,
    })
}

pub fn read_job_file(path: &Path) -> Result<JobFile, CosetError> {
    let text = std::fs::read_to_string(path)?;
    parse_job_file(&text, path)
}
