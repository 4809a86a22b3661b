use crate::commands::ExecutionResult;
use crate::errors::{ShellError, ShellResult};
use crate::session::Session;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Regular file with at least one execute bit set
pub fn is_executable(path: &Path) -> bool {
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Locate a command the way `type` reports it.
///
/// Names containing `/` are taken relative to the working directory. Other
/// names are looked up in each search-path directory in order; the returned
/// path is `<dir>/<name>` as listed in the search path.
pub fn find_executable(name: &str, session: &Session) -> Option<PathBuf> {
    if name.contains('/') {
        let path = session.resolve(name);
        return is_executable(&path).then_some(path);
    }

    session
        .env()
        .search_path
        .iter()
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(&session.resolve(candidate)))
}

/// Execute an external command and capture its output.
///
/// A command that cannot be located is not an error: the "command not found"
/// line is ordinary output.
pub fn run_external_command(
    name: &str,
    args: &[String],
    session: &Session,
) -> ShellResult<ExecutionResult> {
    let Some(path) = find_executable(name, session) else {
        log::debug!("{} not found on search path", name);
        return Ok(ExecutionResult::output(format!("{}: command not found\n", name)));
    };
    let program = session.resolve(&path);
    log::debug!("spawning {} {:?}", program.display(), args);

    let output = Command::new(&program)
        .arg0(name)
        .args(args)
        .current_dir(session.cwd())
        .stdin(Stdio::null())
        .output()
        .map_err(|e| ShellError::ExecutionError(format!("{}: {}", name, e)))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    log::debug!("{} finished: {}", name, output.status);

    let error = if !stderr.is_empty() {
        Some(stderr)
    } else if !output.status.success() {
        Some(format!("{}: {}", name, describe_status(output.status)))
    } else {
        None
    };

    Ok(ExecutionResult { stdout, error })
}

fn describe_status(status: ExitStatus) -> String {
    match (status.code(), status.signal()) {
        (Some(code), _) => format!("exited with status {}", code),
        (None, Some(signal)) => format!("terminated by signal {}", signal),
        (None, None) => "exited abnormally".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Environment;
    use std::fs;
    use tempfile::TempDir;

    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn session_with_path(cwd: &Path, dirs: &[&Path]) -> Session {
        Session::new(
            cwd.to_path_buf(),
            Environment {
                search_path: dirs.iter().map(|d| d.to_path_buf()).collect(),
                home: None,
            },
        )
    }

    #[test]
    fn first_search_path_match_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_script(second.path(), "tool", "echo second");
        write_script(first.path(), "tool", "echo first");
        let session = session_with_path(first.path(), &[first.path(), second.path()]);

        assert_eq!(
            find_executable("tool", &session),
            Some(first.path().join("tool"))
        );
    }

    #[test]
    fn non_executable_files_are_skipped() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("tool"), "not a program").unwrap();
        write_script(second.path(), "tool", "true");
        let session = session_with_path(first.path(), &[first.path(), second.path()]);

        assert_eq!(
            find_executable("tool", &session),
            Some(second.path().join("tool"))
        );
    }

    #[test]
    fn unknown_command_is_output_not_error() {
        let dir = TempDir::new().unwrap();
        let session = session_with_path(dir.path(), &[dir.path()]);
        let result = run_external_command("frobnicate", &[], &session).unwrap();
        assert_eq!(result, ExecutionResult::output("frobnicate: command not found\n"));
    }

    #[test]
    fn captures_stdout_with_argv0_and_args() {
        let dir = TempDir::new().unwrap();
        write_script(dir.path(), "show", r#"echo "$0 $1 $2""#);
        let session = session_with_path(dir.path(), &[dir.path()]);

        let result =
            run_external_command("show", &["a b".to_string(), "c".to_string()], &session)
                .unwrap();
        assert_eq!(result.stdout, "show a b c\n");
        assert_eq!(result.error, None);
    }

    #[test]
    fn runs_in_session_directory() {
        let bin = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        write_script(bin.path(), "where", "pwd");
        let cwd = work.path().canonicalize().unwrap();
        let session = session_with_path(&cwd, &[bin.path()]);

        let result = run_external_command("where", &[], &session).unwrap();
        assert_eq!(result.stdout, format!("{}\n", cwd.display()));
    }

    #[test]
    fn failure_carries_child_stderr() {
        let dir = TempDir::new().unwrap();
        write_script(dir.path(), "fail", "echo partial; echo 'bad thing' >&2; exit 3");
        let session = session_with_path(dir.path(), &[dir.path()]);

        let result = run_external_command("fail", &[], &session).unwrap();
        assert_eq!(result.stdout, "partial\n");
        assert_eq!(result.error.as_deref(), Some("bad thing\n"));
    }

    #[test]
    fn silent_failure_gets_generic_message() {
        let dir = TempDir::new().unwrap();
        write_script(dir.path(), "quiet", "exit 7");
        let session = session_with_path(dir.path(), &[dir.path()]);

        let result = run_external_command("quiet", &[], &session).unwrap();
        assert_eq!(result.error.as_deref(), Some("quiet: exited with status 7"));
    }

    #[test]
    fn path_names_resolve_against_cwd() {
        let dir = TempDir::new().unwrap();
        write_script(dir.path(), "local", "echo local");
        let session = session_with_path(dir.path(), &[]);

        let result = run_external_command("./local", &[], &session).unwrap();
        assert_eq!(result.stdout, "local\n");
    }
}
