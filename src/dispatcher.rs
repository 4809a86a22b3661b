use crate::commands::{run_command, BuiltinRegistry, CommandInvocation, ExecutionResult, Outcome};
use crate::config::ShellConfig;
use crate::errors::ShellResult;
use crate::redirection::{split_redirection, RedirectionClause, TargetStream};
use crate::session::Session;
use crate::tokenizer::tokenize;
use std::borrow::Cow;
use std::io::Write;

/// Exit status used when `exit` is given a non-numeric argument
pub const INVALID_EXIT_STATUS: i32 = 1;

/// What the read loop should do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// Resolves and runs one command line, then routes its output
pub struct Dispatcher {
    config: ShellConfig,
    builtins: BuiltinRegistry,
    session: Session,
}

impl Dispatcher {
    pub fn new(config: ShellConfig, builtins: BuiltinRegistry, session: Session) -> Self {
        Self {
            config,
            builtins,
            session,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Tokenize a raw line and execute it
    pub fn execute_line<O: Write, E: Write>(
        &mut self,
        line: &str,
        out: &mut O,
        err: &mut E,
    ) -> ShellResult<Flow> {
        self.execute(tokenize(line), out, err)
    }

    /// Execute already tokenized words.
    ///
    /// Only a non-numeric `exit` argument ends the shell with an error status;
    /// every other failure is reported and the loop continues.
    pub fn execute<O: Write, E: Write>(
        &mut self,
        words: Vec<String>,
        out: &mut O,
        err: &mut E,
    ) -> ShellResult<Flow> {
        log::debug!("words: {:?}", words);
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let (command_words, clause) =
            match split_redirection(words, &self.config.redirect_operator) {
                Ok(split) => split,
                Err(e) => {
                    writeln!(err, "{}", e)?;
                    return Ok(Flow::Continue);
                }
            };

        let Some(invocation) = CommandInvocation::from_words(command_words) else {
            // bare `> file` only creates the target
            if let Some(clause) = &clause {
                if let Err(e) = clause.open(&self.session) {
                    writeln!(err, "{}", e)?;
                }
            }
            return Ok(Flow::Continue);
        };
        log::debug!("invocation: {:?}, redirection: {:?}", invocation, clause);

        let result = match run_command(&invocation, &self.builtins, &mut self.session) {
            Ok(Outcome::Completed(result)) => result,
            Ok(Outcome::Exit(code)) => {
                log::info!("exit requested with status {}", code);
                return Ok(Flow::Exit(code));
            }
            Err(e) if e.is_fatal() => {
                writeln!(err, "{}", e)?;
                err.flush()?;
                return Ok(Flow::Exit(INVALID_EXIT_STATUS));
            }
            Err(e) => ExecutionResult::failure(e.to_string()),
        };

        self.route(result, clause.as_ref(), out, err)?;
        Ok(Flow::Continue)
    }

    /// Send output and error text to the terminal or the redirection target
    fn route<O: Write, E: Write>(
        &self,
        result: ExecutionResult,
        clause: Option<&RedirectionClause>,
        out: &mut O,
        err: &mut E,
    ) -> ShellResult<()> {
        let ExecutionResult { stdout, error } = result;

        match clause {
            None => {
                if let Some(message) = &error {
                    err.write_all(line_terminated(message).as_bytes())?;
                }
                out.write_all(stdout.as_bytes())?;
            }
            Some(clause) if clause.stream == TargetStream::Stdout => {
                if let Err(e) = clause.write(&self.session, &stdout) {
                    log::warn!("redirection to {} failed: {}", clause.target, e);
                    writeln!(err, "{}", e)?;
                }
                if let Some(message) = &error {
                    err.write_all(line_terminated(message).as_bytes())?;
                }
            }
            Some(clause) => {
                let message = error.as_deref().map(line_terminated).unwrap_or_default();
                if let Err(e) = clause.write(&self.session, &message) {
                    log::warn!("redirection to {} failed: {}", clause.target, e);
                    writeln!(err, "{}", e)?;
                }
                out.write_all(stdout.as_bytes())?;
            }
        }

        out.flush()?;
        err.flush()?;
        Ok(())
    }
}

fn line_terminated(message: &str) -> Cow<'_, str> {
    if message.ends_with('\n') {
        Cow::Borrowed(message)
    } else {
        Cow::Owned(format!("{}\n", message))
    }
}
