use clap::Parser;
use iceoryx2_bb_log::{LogLevel, set_log_level, set_log_level_from_env_or, warn};
use nforth::runtime::{
    built_ins::{
        base_words::register_base_words,
        io_words::{register_io_words, repl, stdin_is_terminal},
    },
    error,
    interpreter::{CodeManagement, Interpreter, nforth_interpreter::NforthInterpreter},
};
use std::{
    env::{split_paths, var_os},
    process::{ExitCode, Termination},
};

/// Run nforth scripts, or type words at the interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Script files to run, in order.
    #[arg()]
    scripts: Vec<String>,

    /// Start the interactive prompt after the scripts have run.
    #[arg(long, short = 'i')]
    interactive: bool,

    /// Log every instruction as it's evaluated.
    #[arg(long)]
    trace: bool,
}

/// Add the directories listed in NFORTH_PATH to the interpreter's script search path.  Entries that
/// don't exist are skipped.
fn add_library_paths(interpreter: &mut dyn Interpreter) {
    let Some(paths) = var_os("NFORTH_PATH") else {
        return;
    };

    for path in split_paths(&paths) {
        let path = path.to_string_lossy();

        if let Err(err) = interpreter.add_search_path(&path) {
            warn!("skipping search path {}: {}", path, err);
        }
    }
}

fn run(args: Args) -> error::Result<()> {
    // Create the core instance of the interpreter and register the native words.
    let mut interpreter = NforthInterpreter::new();

    add_library_paths(&mut interpreter);

    register_base_words(&mut interpreter);
    register_io_words(&mut interpreter);

    // Run the user's scripts.  The first failure ends the run.
    for script in args.scripts.iter() {
        interpreter.process_source_file(script)?;
    }

    // Else we start the REPL, which reports errors and carries on.
    if args.scripts.is_empty() || args.interactive {
        repl(&mut interpreter, stdin_is_terminal())?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.trace {
        set_log_level(LogLevel::Trace);
    } else {
        set_log_level_from_env_or(LogLevel::Warn);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => error.report(),
    }
}
