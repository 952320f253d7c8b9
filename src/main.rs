use clap::Parser;
use log::debug;
use std::process;

use nesting_cppcheck::api::dto::InvocationDto;
use nesting_cppcheck::application::RunCppcheckUsecase;
use nesting_cppcheck::domain::invocation::{DEFAULT_PROGRAM, DEFAULT_REPORT};
use nesting_cppcheck::infrastructure::logging::init_logging;
use nesting_cppcheck::infrastructure::{ProcessEnv, ProcessRunner};

/// Run cppcheck over $NESTING/src with the OMNeT++, INET and NeSTiNg include paths.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// report file cppcheck writes to
    #[arg(default_value = DEFAULT_REPORT)]
    report: String,

    /// cppcheck binary (looked up on PATH)
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    cppcheck: String,

    /// print the command line without running it
    #[arg(long)]
    dry_run: bool,

    /// with --dry-run, print the command line as JSON
    #[arg(long, requires = "dry_run")]
    json: bool,

    /// Enable debug output
    #[arg(long, short = 'D')]
    debug: bool,
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let usecase = RunCppcheckUsecase {
        env: &ProcessEnv,
        runner: &ProcessRunner,
    };
    let invocation = usecase.prepare(&cli.cppcheck, &cli.report)?;

    if cli.dry_run {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&InvocationDto::from(&invocation))?);
        } else {
            println!("{}", invocation.echo_line());
        }
        return Ok(0);
    }

    // Killed by a signal: no code to forward.
    Ok(usecase.run(&invocation)?.unwrap_or(1))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);
    debug!("Config: {:?}", cli);

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        }
    }
}
