use crate::completion::ShellCompleter;
use crate::dispatcher::{Dispatcher, Flow};
use crate::errors::{ShellError, ShellResult};
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use std::io::{self, BufRead, IsTerminal, Write};

/// Source of input lines: a line editor on a terminal, plain stdin otherwise
pub enum LineReader {
    Interactive(Box<Editor<ShellCompleter, DefaultHistory>>),
    Piped(io::StdinLock<'static>),
}

impl LineReader {
    pub fn new(completer: ShellCompleter) -> ShellResult<Self> {
        if !io::stdin().is_terminal() {
            return Ok(LineReader::Piped(io::stdin().lock()));
        }

        let config = Config::builder().auto_add_history(false).build();
        let mut editor = Editor::with_config(config).map_err(|e| {
            ShellError::InputError(format!("Failed to create readline editor: {}", e))
        })?;
        editor.set_helper(Some(completer));
        editor.set_completion_type(CompletionType::List);

        Ok(LineReader::Interactive(Box::new(editor)))
    }

    /// Read one line without its trailing newline.
    ///
    /// Returns `Err(ShellError::Interrupted)` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> ShellResult<String> {
        match self {
            LineReader::Interactive(editor) => loop {
                match editor.readline(prompt) {
                    Ok(line) => return Ok(line),
                    // Ctrl-C discards the line
                    Err(ReadlineError::Interrupted) => continue,
                    Err(ReadlineError::Eof) => return Err(ShellError::Interrupted),
                    Err(e) => {
                        return Err(ShellError::InputError(format!("Readline error: {}", e)))
                    }
                }
            },
            LineReader::Piped(stdin) => {
                let mut stdout = io::stdout();
                stdout.write_all(prompt.as_bytes())?;
                stdout.flush()?;

                let mut buf = Vec::new();
                if stdin.read_until(b'\n', &mut buf)? == 0 {
                    return Err(ShellError::Interrupted);
                }
                // invalid UTF-8 is replaced rather than rejected
                Ok(strip_newline(String::from_utf8_lossy(&buf).into_owned()))
            }
        }
    }
}

fn strip_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Read, dispatch and route lines until `exit` or end of input.
/// Returns the process exit status.
pub fn run_loop(dispatcher: &mut Dispatcher, reader: &mut LineReader) -> ShellResult<i32> {
    let prompt = dispatcher.config().prompt.clone();
    let stdout = io::stdout();
    let stderr = io::stderr();

    loop {
        let line = match reader.read_line(&prompt) {
            Ok(line) => line,
            Err(ShellError::Interrupted) => {
                log::info!("end of input");
                return Ok(0);
            }
            Err(e) => return Err(e),
        };

        match dispatcher.execute_line(&line, &mut stdout.lock(), &mut stderr.lock()) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit(code)) => return Ok(code),
            Err(e) => {
                log::warn!("failed to handle {:?}: {}", line, e);
                eprintln!("{}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_the_line_terminator() {
        assert_eq!(strip_newline("echo hi\n".into()), "echo hi");
        assert_eq!(strip_newline("echo hi\r\n".into()), "echo hi");
        assert_eq!(strip_newline("echo hi  ".into()), "echo hi  ");
        assert_eq!(strip_newline(String::new()), "");
    }
}
