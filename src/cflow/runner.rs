//! Runs the external cflow analyzer on one C source file.

use crate::utils::config::{CFLOW_ARGS, CFLOW_PROGRAM};
use crate::utils::error::CflowError;
use log::{debug, info};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Handle on a located cflow executable
#[derive(Debug, Clone)]
pub struct CflowRunner {
    program: PathBuf,
}

impl CflowRunner {
    /// Locate cflow on `PATH`
    ///
    /// # Errors
    /// * `CflowError::NotFound` - no executable `cflow` on `PATH`
    pub fn locate() -> Result<Self, CflowError> {
        let program = which::which(CFLOW_PROGRAM).map_err(|e| not_found(CFLOW_PROGRAM, e))?;

        info!("ok> found {} at path {}", CFLOW_PROGRAM, program.display());
        Ok(Self { program })
    }

    /// Locate cflow in an explicit search path (same syntax as `PATH`)
    pub fn locate_in(search_path: impl AsRef<OsStr>) -> Result<Self, CflowError> {
        let cwd = std::env::current_dir()?;
        let program = which::which_in(CFLOW_PROGRAM, Some(search_path), cwd)
            .map_err(|e| not_found(CFLOW_PROGRAM, e))?;

        debug!("found {} at path {}", CFLOW_PROGRAM, program.display());
        Ok(Self { program })
    }

    /// Use an explicit executable path
    pub fn with_program(program: impl Into<PathBuf>) -> Result<Self, CflowError> {
        let program = program.into();
        if !program.is_file() {
            return Err(CflowError::NotFound(program.display().to_string()));
        }
        Ok(Self { program })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Produce the call-flow trace text of one source file
    ///
    /// # Errors
    /// * `CflowError::Spawn` - process could not be started
    /// * `CflowError::Failed` - cflow exited with a non-zero status
    pub fn trace_file(&self, source: &Path) -> Result<String, CflowError> {
        debug!("{} {} {}", self.program.display(), CFLOW_ARGS.join(" "), source.display());

        let output = Command::new(&self.program)
            .args(CFLOW_ARGS)
            .arg(source)
            .output()?;

        if !output.status.success() {
            return Err(CflowError::Failed {
                path: source.display().to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn not_found(program: &str, err: which::Error) -> CflowError {
    CflowError::NotFound(format!("{} ({}, please install it)", program, err))
}
