use serde::{Deserialize, Serialize};

use crate::domain::invocation::CppcheckInvocation;

/// Machine-readable form of a planned cppcheck run.
#[derive(Debug, Serialize, Deserialize)]
pub struct InvocationDto {
    pub program: String,
    pub args: Vec<String>,
    pub report: String,
    pub target: String,
}

impl From<&CppcheckInvocation> for InvocationDto {
    fn from(inv: &CppcheckInvocation) -> Self {
        InvocationDto {
            program: inv.program().to_string(),
            args: inv.display_args(),
            report: inv.report().to_string(),
            target: inv.target().display().to_string(),
        }
    }
}
