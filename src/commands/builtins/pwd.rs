use crate::commands::registry::{BuiltinCommand, CommandContext};
use crate::commands::{ExecutionResult, Outcome};
use crate::errors::{ShellError, ShellResult};
use std::fs;

pub struct PwdCommand;

impl BuiltinCommand for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> ShellResult<Outcome> {
        let cwd = ctx.session.cwd();
        // the directory may have been removed underneath us
        fs::metadata(cwd).map_err(|e| ShellError::ExecutionError(format!("pwd: {}", e)))?;
        Ok(Outcome::Completed(ExecutionResult::output(format!(
            "{}\n",
            cwd.display()
        ))))
    }
}
