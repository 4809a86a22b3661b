use crate::commands::registry::{BuiltinCommand, CommandContext};
use crate::commands::Outcome;
use crate::errors::{ShellError, ShellResult};

pub struct ExitCommand;

impl BuiltinCommand for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, args: &[String], _ctx: &mut CommandContext<'_>) -> ShellResult<Outcome> {
        let code = match args.first() {
            Some(arg) => arg
                .parse()
                .map_err(|_| ShellError::InvalidExitCode(arg.clone()))?,
            None => 0,
        };
        Ok(Outcome::Exit(code))
    }
}
