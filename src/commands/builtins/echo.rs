use crate::commands::registry::{BuiltinCommand, CommandContext};
use crate::commands::{ExecutionResult, Outcome};
use crate::errors::ShellResult;

pub struct EchoCommand;

impl BuiltinCommand for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, args: &[String], _ctx: &mut CommandContext<'_>) -> ShellResult<Outcome> {
        Ok(Outcome::Completed(ExecutionResult::output(format!(
            "{}\n",
            args.join(" ")
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtins::test_support::{completed, run};
    use crate::session::{Environment, Session};
    use std::path::PathBuf;

    #[test]
    fn joins_args_with_single_spaces() {
        let mut session = Session::new(PathBuf::from("/"), Environment::default());
        let result = completed(run(&EchoCommand, &["hello", "big  world"], &mut session).unwrap());
        assert_eq!(result, ExecutionResult::output("hello big  world\n"));
    }

    #[test]
    fn no_args_prints_newline() {
        let mut session = Session::new(PathBuf::from("/"), Environment::default());
        let result = completed(run(&EchoCommand, &[], &mut session).unwrap());
        assert_eq!(result.stdout, "\n");
    }
}
