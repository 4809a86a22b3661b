use crate::commands::external::find_executable;
use crate::commands::registry::{BuiltinCommand, CommandContext};
use crate::commands::{ExecutionResult, Outcome};
use crate::errors::ShellResult;

pub struct TypeCommand;

impl BuiltinCommand for TypeCommand {
    fn name(&self) -> &'static str {
        "type"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> ShellResult<Outcome> {
        let mut out = String::new();

        for name in args {
            if ctx.builtins.is_builtin(name) {
                out.push_str(&format!("{} is a shell builtin\n", name));
            } else if let Some(path) = find_executable(name, ctx.session) {
                out.push_str(&format!("{} is {}\n", name, path.display()));
            } else {
                out.push_str(&format!("{}: not found\n", name));
            }
        }

        Ok(Outcome::Completed(ExecutionResult::output(out)))
    }
}
