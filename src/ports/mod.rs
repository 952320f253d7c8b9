use std::ffi::OsString;

use anyhow::Result;

use crate::domain::invocation::CppcheckInvocation;

// EnvSource: Look up process configuration by variable name
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<OsString>;
}

// ToolRunner: Run the external tool once, blocking until it exits.
// Returns the exit code, or None if the tool was killed by a signal.
pub trait ToolRunner {
    fn run(&self, invocation: &CppcheckInvocation) -> Result<Option<i32>>;
}
