use crate::error::AuditError;
use crate::runner::Runner;
use std::io::{self, Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::Output;

/// Captured stdout of one analyzer run, plus the reason it can't be used.
#[derive(Debug)]
pub struct InvocationResult {
    pub stdout: Vec<u8>,
    pub error: Option<AuditError>,
}

impl InvocationResult {
    pub fn from_output(output: io::Result<Output>) -> InvocationResult {
        match output {
            Ok(res) => {
                if !res.status.success() {
                    let stderr = String::from_utf8_lossy(&res.stderr);
                    let mut msg = format!("analyzer exited with {}", res.status);
                    if !stderr.trim().is_empty() {
                        msg = format!("{}: {}", msg, stderr.trim());
                    }
                    return InvocationResult {
                        stdout: res.stdout,
                        error: Some(AuditError::Execution(Error::new(ErrorKind::Other, msg))),
                    };
                }
                return InvocationResult {
                    stdout: res.stdout,
                    error: None,
                };
            }
            Err(e) => {
                return InvocationResult {
                    stdout: Vec::new(),
                    error: Some(AuditError::Execution(e)),
                };
            }
        }
    }
}

/// Runs the analyzer once and stores its report at `output_path`.
///
/// Two audits pointed at the same `output_path` at the same time race on
/// the file; nothing here coordinates them.
pub struct Audit<'a> {
    runner: &'a dyn Runner,
    output_path: PathBuf,
}

impl Audit<'_> {
    pub fn new<'a>(runner: &'a dyn Runner, output_path: impl Into<PathBuf>) -> Audit<'a> {
        return Audit {
            runner,
            output_path: output_path.into(),
        };
    }

    pub fn output_path(&self) -> &Path {
        return &self.output_path;
    }

    /// Returns the path written on success. On any error the output file
    /// is left untouched.
    pub fn run(&self) -> Result<&Path, AuditError> {
        let result = InvocationResult::from_output(self.runner.run());
        if let Some(err) = result.error {
            return Err(err);
        }

        // Truncates: a rerun replaces the previous report.
        match std::fs::write(&self.output_path, &result.stdout) {
            Ok(()) => Ok(self.output_path.as_path()),
            Err(source) => Err(AuditError::Write {
                path: self.output_path.clone(),
                source,
            }),
        }
    }
}
