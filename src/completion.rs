use crate::commands::external::is_executable;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::fs;
use std::path::PathBuf;

/// Tab completion of command names: builtins plus search-path executables
#[derive(Clone, Debug)]
pub struct ShellCompleter {
    builtins: Vec<String>,
    search_path: Vec<PathBuf>,
}

impl ShellCompleter {
    pub fn new(builtins: &[&str], search_path: Vec<PathBuf>) -> Self {
        Self {
            builtins: builtins.iter().map(|b| b.to_string()).collect(),
            search_path,
        }
    }

    /// Sorted, deduplicated command names starting with `prefix`
    pub fn candidates(&self, prefix: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .builtins
            .iter()
            .filter(|b| b.starts_with(prefix))
            .cloned()
            .collect();

        for dir in &self.search_path {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let Ok(file_name) = entry.file_name().into_string() else {
                    continue;
                };
                if file_name.starts_with(prefix) && is_executable(&entry.path()) {
                    names.push(file_name);
                }
            }
        }

        names.sort();
        names.dedup();
        names
    }
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        // Only complete the first word (command name)
        if input.trim_start().contains(' ') {
            return Ok((pos, vec![]));
        }
        let prefix = input.trim_start();

        let mut candidates: Vec<Pair> = self
            .candidates(prefix)
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: name,
            })
            .collect();

        // a unique match is completed with a trailing space
        if let [only] = candidates.as_mut_slice() {
            only.replacement.push(' ');
        }

        Ok((pos - prefix.len(), candidates))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Highlighter for ShellCompleter {}

impl Validator for ShellCompleter {}

impl Helper for ShellCompleter {}
