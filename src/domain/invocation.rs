use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use super::roots::SimulationRoots;

pub const DEFAULT_PROGRAM: &str = "cppcheck";
pub const DEFAULT_REPORT: &str = "cppcheck_report.json";

pub const STD_FLAG: &str = "--std=c++11";
/// Message classes generated by opp_msgc end in `_m.cc`.
pub const SUPPRESS_GENERATED: &str = "--suppress=*:*_m.cc";
pub const ENABLE_ALL: &str = "--enable=all";

/// One issue per line, code-climate style.
pub const REPORT_TEMPLATE: &str = concat!(
    r#"{"type": "issue","description": "{message}","check_name": "{id}","#,
    r#""location": {"path": "{file}","lines": {"begin": "{line}"}}, "#,
    r#""severity": "{severity}", "fingerprint": ""}"#,
);

/// A fully built cppcheck command line. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CppcheckInvocation {
    program: String,
    args: Vec<OsString>,
    report: String,
    target: PathBuf,
}

impl CppcheckInvocation {
    pub fn new(program: impl Into<String>, roots: &SimulationRoots, report: impl Into<String>) -> Self {
        let report = report.into();
        let mut args: Vec<OsString> = vec![
            STD_FLAG.into(),
            SUPPRESS_GENERATED.into(),
            ENABLE_ALL.into(),
            format!("--output-file={}", report).into(),
        ];
        for dir in roots.include_dirs() {
            args.push("-I".into());
            args.push(dir.into_os_string());
        }
        let target = roots.analysis_target();
        args.push(target.clone().into_os_string());
        args.push(format!("--template={}", REPORT_TEMPLATE).into());

        Self {
            program: program.into(),
            args,
            report,
            target,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Raw arguments; root paths keep their exact bytes.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    pub fn report(&self) -> &str {
        &self.report
    }

    /// Positional argument: the directory cppcheck scans.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Arguments as text, lossy for non-UTF-8 paths. Display only.
    pub fn display_args(&self) -> Vec<String> {
        self.args.iter().map(|a| lossy(a)).collect()
    }

    /// Program and arguments joined by single spaces, for the console.
    pub fn echo_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.display_args())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn lossy(arg: &OsStr) -> String {
    arg.to_string_lossy().into_owned()
}
