use crate::errors::{ShellError, ShellResult};
use crate::session::Session;
use regex::Regex;
use std::fs::{self, File, OpenOptions};
use std::io::Write;

/// Which output of the command goes to the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStream {
    Stdout,
    Stderr,
}

/// Redirection mode (truncate or append)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectionMode {
    Truncate,
    Append,
}

/// Trailing `[1|2]>[>] file` clause of a command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectionClause {
    pub stream: TargetStream,
    pub mode: RedirectionMode,
    pub target: String,
}

impl RedirectionClause {
    /// Build from an operator already known to match the operator pattern
    fn from_operator(operator: &str, target: String) -> Self {
        let stream = if operator.starts_with('2') {
            TargetStream::Stderr
        } else {
            TargetStream::Stdout
        };
        let mode = if operator.ends_with(">>") {
            RedirectionMode::Append
        } else {
            RedirectionMode::Truncate
        };
        Self {
            stream,
            mode,
            target,
        }
    }

    /// Open the target relative to the session directory, creating missing
    /// parent directories. Truncates or appends according to the mode.
    pub fn open(&self, session: &Session) -> ShellResult<File> {
        let path = session.resolve(&self.target);
        let target_error = |source| ShellError::RedirectionTarget {
            path: self.target.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(target_error)?;
        }

        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(self.mode == RedirectionMode::Truncate)
            .append(self.mode == RedirectionMode::Append)
            .open(&path)
            .map_err(target_error)
    }

    /// Open the target and write `content` to it; the file is closed on return
    pub fn write(&self, session: &Session, content: &str) -> ShellResult<()> {
        let mut file = self.open(session)?;
        file.write_all(content.as_bytes())
            .map_err(|source| ShellError::RedirectionTarget {
                path: self.target.clone(),
                source,
            })
    }
}

/// Split redirection operators from command words.
///
/// The first word matching `operator` starts the clause and the word after it
/// names the file. Returns the command words before the operator and the
/// clause, if any.
pub fn split_redirection(
    mut words: Vec<String>,
    operator: &Regex,
) -> ShellResult<(Vec<String>, Option<RedirectionClause>)> {
    let Some(index) = words.iter().position(|w| operator.is_match(w)) else {
        return Ok((words, None));
    };

    let mut tail = words.split_off(index).into_iter();
    let op = tail.next().unwrap_or_default();
    let target = tail
        .next()
        .ok_or_else(|| ShellError::RedirectionSyntax("newline".to_string()))?;

    let ignored: Vec<String> = tail.collect();
    if !ignored.is_empty() {
        log::warn!("ignoring words after redirection target: {:?}", ignored);
    }

    Ok((words, Some(RedirectionClause::from_operator(&op, target))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REDIRECT_OPERATOR_PATTERN;
    use crate::session::Environment;
    use tempfile::TempDir;

    fn words(line: &str) -> Vec<String> {
        line.split(' ').map(String::from).collect()
    }

    fn split(line: &str) -> ShellResult<(Vec<String>, Option<RedirectionClause>)> {
        split_redirection(words(line), &Regex::new(REDIRECT_OPERATOR_PATTERN).unwrap())
    }

    #[test]
    fn no_operator_keeps_all_words() {
        let (cmd, clause) = split("echo hello world").unwrap();
        assert_eq!(cmd, words("echo hello world"));
        assert_eq!(clause, None);
    }

    #[test]
    fn operator_table() {
        let cases = [
            (">", TargetStream::Stdout, RedirectionMode::Truncate),
            ("1>", TargetStream::Stdout, RedirectionMode::Truncate),
            (">>", TargetStream::Stdout, RedirectionMode::Append),
            ("1>>", TargetStream::Stdout, RedirectionMode::Append),
            ("2>", TargetStream::Stderr, RedirectionMode::Truncate),
            ("2>>", TargetStream::Stderr, RedirectionMode::Append),
        ];
        for (op, stream, mode) in cases {
            let (cmd, clause) = split(&format!("echo hi {} out.txt", op)).unwrap();
            assert_eq!(cmd, words("echo hi"));
            assert_eq!(
                clause,
                Some(RedirectionClause {
                    stream,
                    mode,
                    target: "out.txt".to_string(),
                }),
                "operator {op}"
            );
        }
    }

    #[test]
    fn first_operator_wins_and_rest_is_dropped() {
        let (cmd, clause) = split("echo a > one.txt 2> two.txt").unwrap();
        assert_eq!(cmd, words("echo a"));
        assert_eq!(clause.unwrap().target, "one.txt");
    }

    #[test]
    fn operator_inside_word_is_not_redirection() {
        let (cmd, clause) = split("echo a>b").unwrap();
        assert_eq!(cmd, words("echo a>b"));
        assert_eq!(clause, None);
    }

    #[test]
    fn missing_target_is_syntax_error() {
        let err = split("echo hi >").unwrap_err();
        assert!(matches!(err, ShellError::RedirectionSyntax(_)));
    }

    #[test]
    fn write_creates_parents_and_honours_mode() {
        let dir = TempDir::new().unwrap();
        let session = Session::new(dir.path().to_path_buf(), Environment::default());
        let truncate = RedirectionClause::from_operator(">", "nested/deep/out.txt".into());
        let append = RedirectionClause::from_operator(">>", "nested/deep/out.txt".into());

        truncate.write(&session, "first\n").unwrap();
        append.write(&session, "second\n").unwrap();
        let path = dir.path().join("nested/deep/out.txt");
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");

        truncate.write(&session, "third\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "third\n");
    }

    #[test]
    fn unopenable_target_reports_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("file"), "").unwrap();
        let session = Session::new(dir.path().to_path_buf(), Environment::default());
        // a regular file cannot be used as a parent directory
        let clause = RedirectionClause::from_operator(">", "file/out.txt".into());

        let err = clause.write(&session, "x").unwrap_err();
        assert!(err.to_string().starts_with("minish: file/out.txt: "));
    }
}
