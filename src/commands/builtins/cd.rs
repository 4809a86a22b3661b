use crate::commands::registry::{BuiltinCommand, CommandContext};
use crate::commands::{ExecutionResult, Outcome};
use crate::errors::{ShellError, ShellResult};
use std::fs;
use std::io;
use std::path::PathBuf;

pub struct CdCommand;

impl CdCommand {
    fn target(arg: Option<&str>, home: Option<&PathBuf>) -> ShellResult<PathBuf> {
        let home_dir = || {
            home.cloned()
                .ok_or_else(|| ShellError::InvalidDirectory("cd: HOME not set".to_string()))
        };

        match arg {
            None | Some("~") => home_dir(),
            Some(p) if p.starts_with("~/") => Ok(home_dir()?.join(&p[2..])),
            Some(p) => Ok(PathBuf::from(p)),
        }
    }
}

impl BuiltinCommand for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> ShellResult<Outcome> {
        let target = Self::target(
            args.first().map(|s| s.as_str()),
            ctx.session.env().home.as_ref(),
        )?;
        let resolved = ctx.session.resolve(&target);

        let metadata = fs::metadata(&resolved).map_err(|_| {
            ShellError::InvalidDirectory(format!(
                "cd: {}: No such file or directory",
                target.display()
            ))
        })?;
        if !metadata.is_dir() {
            return Err(ShellError::InvalidDirectory(format!(
                "cd: {}: Not a directory",
                target.display()
            )));
        }
        // entering the directory needs search permission, not just stat
        if let Err(e) = fs::metadata(resolved.join(".")) {
            let reason = match e.kind() {
                io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
                _ => e.to_string(),
            };
            return Err(ShellError::InvalidDirectory(format!(
                "cd: {}: {}",
                target.display(),
                reason
            )));
        }

        let cwd = resolved.canonicalize().map_err(|e| {
            ShellError::InvalidDirectory(format!("cd: {}: {}", target.display(), e))
        })?;
        log::debug!("cd: {} -> {}", ctx.session.cwd().display(), cwd.display());
        ctx.session.set_cwd(cwd);

        Ok(Outcome::Completed(ExecutionResult::default()))
    }
}
