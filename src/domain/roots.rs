use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};

use crate::ports::EnvSource;

/// NeSTiNg model installation; also the analysis target.
pub const NESTING_VAR: &str = "NESTING";
/// OMNeT++ simulation framework installation.
pub const OMNETPP_VAR: &str = "OMNETPP";
/// INET framework installation.
pub const INET_VAR: &str = "INET";

/// Validation order. The first missing variable aborts the run.
pub const REQUIRED_VARS: [&str; 3] = [NESTING_VAR, OMNETPP_VAR, INET_VAR];

/// Installation roots of the three frameworks cppcheck needs to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRoots {
    pub omnetpp: PathBuf,
    pub inet: PathBuf,
    pub nesting: PathBuf,
}

impl SimulationRoots {
    /// Reads all three roots from `env`.
    ///
    /// Fails on the first variable (in `REQUIRED_VARS` order) that is unset.
    /// Nothing is read past that point. Empty values are accepted as-is.
    pub fn from_env(env: &dyn EnvSource) -> Result<Self> {
        let mut found = HashMap::with_capacity(REQUIRED_VARS.len());
        for name in REQUIRED_VARS {
            match env.var(name) {
                Some(value) => found.insert(name, PathBuf::from(value)),
                None => bail!("Environment variable ${} not defined!", name),
            };
        }

        let mut take = |name: &str| {
            found
                .remove(name)
                .ok_or_else(|| anyhow!("Environment variable ${} not defined!", name))
        };
        Ok(Self {
            omnetpp: take(OMNETPP_VAR)?,
            inet: take(INET_VAR)?,
            nesting: take(NESTING_VAR)?,
        })
    }

    pub fn omnetpp_include(&self) -> PathBuf {
        join_root(&self.omnetpp, "include")
    }

    pub fn inet_src(&self) -> PathBuf {
        join_root(&self.inet, "src")
    }

    pub fn nesting_src(&self) -> PathBuf {
        join_root(&self.nesting, "src")
    }

    /// Include directories in the order they are handed to cppcheck.
    pub fn include_dirs(&self) -> [PathBuf; 3] {
        [self.omnetpp_include(), self.inet_src(), self.nesting_src()]
    }

    pub fn analysis_target(&self) -> PathBuf {
        self.nesting_src()
    }
}

/// `<root>/<sub>` with exactly one separator. An empty root yields `/<sub>`.
fn join_root(root: &Path, sub: &str) -> PathBuf {
    let mut joined = root.as_os_str().to_os_string();
    if !joined.as_encoded_bytes().ends_with(b"/") {
        joined.push("/");
    }
    joined.push(sub);
    PathBuf::from(joined)
}
