use anyhow::Result;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;

pub use args::{Arguments, AuditArgs, Command, OutputFormat};
pub use exit_status::ExitStatus;

use commands::{audit::audit, init::init};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    match args.command {
        Some(Command::Init) => init(),
        None => audit(&args.audit),
    }
}
