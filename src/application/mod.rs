// Application layer: validate, build, echo, run.

use anyhow::Result;
use log::{debug, info};

use crate::domain::invocation::CppcheckInvocation;
use crate::domain::roots::SimulationRoots;
use crate::ports::{EnvSource, ToolRunner};

/// The main usecase: run cppcheck once over the NeSTiNg sources.
pub struct RunCppcheckUsecase<'a> {
    pub env: &'a dyn EnvSource,
    pub runner: &'a dyn ToolRunner,
}

impl<'a> RunCppcheckUsecase<'a> {
    /// Validates the environment and builds the command line without running it.
    pub fn prepare(&self, program: &str, report: &str) -> Result<CppcheckInvocation> {
        let roots = SimulationRoots::from_env(self.env)?;
        debug!("Simulation roots: {:?}", roots);
        Ok(CppcheckInvocation::new(program, &roots, report))
    }

    /// Blocks until cppcheck exits and returns its exit code.
    /// `None` means the tool died from a signal.
    pub fn run(&self, invocation: &CppcheckInvocation) -> Result<Option<i32>> {
        println!("{}", invocation.echo_line());
        info!("Writing report to {}", invocation.report());
        self.runner.run(invocation)
    }
}
