pub mod builtins;
pub mod external;
pub mod registry;

use crate::errors::ShellResult;
use crate::session::Session;

pub use external::{find_executable, run_external_command};
pub use registry::{BuiltinCommand, BuiltinRegistry};

/// A command name and its arguments, with any redirection already removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub name: String,
    pub args: Vec<String>,
}

impl CommandInvocation {
    /// Returns `None` for an empty word list
    pub fn from_words(mut words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        let args = words.split_off(1);
        let name = words.pop()?;
        Some(Self { name, args })
    }
}

/// Captured output of one command, routed by the dispatcher
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub stdout: String,
    pub error: Option<String>,
}

impl ExecutionResult {
    pub fn output(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            error: Some(message.into()),
        }
    }
}

/// What a command asks of the shell once it has run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(ExecutionResult),
    Exit(i32),
}

/// Run a builtin if the name is registered, otherwise an external command
pub fn run_command(
    invocation: &CommandInvocation,
    builtins: &BuiltinRegistry,
    session: &mut Session,
) -> ShellResult<Outcome> {
    match builtins.execute(&invocation.name, &invocation.args, session) {
        Some(result) => result,
        None => run_external_command(&invocation.name, &invocation.args, session)
            .map(Outcome::Completed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_splits_name_from_args() {
        let words = vec!["echo".to_string(), "a".to_string(), "b".to_string()];
        let invocation = CommandInvocation::from_words(words).unwrap();
        assert_eq!(invocation.name, "echo");
        assert_eq!(invocation.args, vec!["a", "b"]);
    }

    #[test]
    fn empty_words_have_no_invocation() {
        assert_eq!(CommandInvocation::from_words(Vec::new()), None);
    }
}
