// Infrastructure implementations for the cppcheck runner.

pub mod logging;

use std::ffi::OsString;
use std::process::Command;

use anyhow::{Context, Result};
use log::debug;

use crate::domain::invocation::CppcheckInvocation;
use crate::ports::{EnvSource, ToolRunner};

/// Reads the real process environment.
pub struct ProcessEnv;
impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

/// Spawns the tool with inherited stdio and waits for it.
pub struct ProcessRunner;
impl ToolRunner for ProcessRunner {
    fn run(&self, invocation: &CppcheckInvocation) -> Result<Option<i32>> {
        let program = which::which(invocation.program())
            .with_context(|| format!("could not find `{}`", invocation.program()))?;
        debug!("Resolved {} to {}", invocation.program(), program.display());

        let status = Command::new(&program)
            .args(invocation.args())
            .status()
            .with_context(|| format!("failed to run {}", program.display()))?;
        debug!("{} exited with {}", program.display(), status);

        Ok(status.code())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::domain::invocation::DEFAULT_REPORT;
    use crate::domain::roots::SimulationRoots;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    fn roots() -> SimulationRoots {
        SimulationRoots {
            omnetpp: PathBuf::from("/opt/omnetpp"),
            inet: PathBuf::from("/opt/inet"),
            nesting: PathBuf::from("/opt/nesting"),
        }
    }

    fn script(dir: &std::path::Path, body: &str) -> PathBuf {
        let path = dir.join("fake-cppcheck");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn returns_the_tool_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let tool = script(dir.path(), "exit 7");
        let inv = CppcheckInvocation::new(tool.display().to_string(), &roots(), DEFAULT_REPORT);

        assert_eq!(ProcessRunner.run(&inv).unwrap(), Some(7));
    }

    #[test]
    fn passes_arguments_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("args.txt");
        let tool = script(
            dir.path(),
            &format!("for a in \"$@\"; do printf '%s\\n' \"$a\" >> '{}'; done", log.display()),
        );
        let inv = CppcheckInvocation::new(tool.display().to_string(), &roots(), DEFAULT_REPORT);

        assert_eq!(ProcessRunner.run(&inv).unwrap(), Some(0));
        let recorded: Vec<String> = std::fs::read_to_string(&log)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        assert_eq!(recorded, inv.display_args());
    }

    #[test]
    fn missing_tool_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-cppcheck");
        let inv = CppcheckInvocation::new(missing.display().to_string(), &roots(), DEFAULT_REPORT);

        let err = ProcessRunner.run(&inv).unwrap_err();
        assert!(err.to_string().contains("no-such-cppcheck"));
    }
}
