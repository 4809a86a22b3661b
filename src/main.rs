use clap::Parser;
use minish::cli::ShellArgs;
use minish::config::ShellConfig;
use minish::{logging, run_shell};
use std::process::exit;

fn main() {
    let args = ShellArgs::parse();

    if let Err(e) = logging::init(args.log_level, args.log_file.as_deref()) {
        eprintln!("{}", e);
    }

    let code = match ShellConfig::new(args.prompt).and_then(run_shell) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    };

    exit(code);
}
