pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod dispatcher;
pub mod errors;
pub mod logging;
pub mod redirection;
pub mod repl;
pub mod session;
pub mod tokenizer;

use commands::BuiltinRegistry;
use completion::ShellCompleter;
use config::ShellConfig;
use dispatcher::Dispatcher;
use errors::ShellResult;
use repl::{run_loop, LineReader};
use session::Session;

/// Main entry point for the shell REPL. Returns the process exit status.
pub fn run_shell(config: ShellConfig) -> ShellResult<i32> {
    let session = Session::from_process()?;
    let builtins = BuiltinRegistry::with_defaults();
    log::info!(
        "starting in {} with {} search path entries",
        session.cwd().display(),
        session.env().search_path.len()
    );

    let completer = ShellCompleter::new(
        &builtins.builtin_names(),
        session.env().search_path.clone(),
    );
    let mut reader = LineReader::new(completer)?;
    let mut dispatcher = Dispatcher::new(config, builtins, session);

    run_loop(&mut dispatcher, &mut reader)
}
