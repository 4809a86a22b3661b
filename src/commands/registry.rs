use crate::commands::Outcome;
use crate::errors::ShellResult;
use crate::session::Session;

/// What a builtin can see while it runs
pub struct CommandContext<'a> {
    pub session: &'a mut Session,
    pub builtins: &'a BuiltinRegistry,
}

/// Trait that all builtin commands must implement
pub trait BuiltinCommand {
    /// The command name (e.g., "echo", "cd", "pwd")
    fn name(&self) -> &'static str;

    /// Execute the command. `args` excludes the command name.
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> ShellResult<Outcome>;
}

/// Registry of builtin commands, built once and owned by the dispatcher
pub struct BuiltinRegistry {
    commands: Vec<Box<dyn BuiltinCommand>>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Registry holding echo, exit, type, pwd and cd
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::builtins::EchoCommand);
        registry.register(super::builtins::ExitCommand);
        registry.register(super::builtins::TypeCommand);
        registry.register(super::builtins::PwdCommand);
        registry.register(super::builtins::CdCommand);
        registry
    }

    pub fn register<C: BuiltinCommand + 'static>(&mut self, cmd: C) {
        self.commands.push(Box::new(cmd));
    }

    /// Check if a command name is a builtin
    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.iter().any(|c| c.name() == name)
    }

    /// Get all builtin command names (for completion and the type command)
    pub fn builtin_names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// Execute a builtin command by name, `None` if it is not registered
    pub fn execute(
        &self,
        name: &str,
        args: &[String],
        session: &mut Session,
    ) -> Option<ShellResult<Outcome>> {
        let command = self.commands.iter().find(|c| c.name() == name)?;
        let mut ctx = CommandContext {
            session,
            builtins: self,
        };
        Some(command.execute(args, &mut ctx))
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
