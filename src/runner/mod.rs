//! Process execution around the translation engine.
//!
//! The engine itself never executes anything; this module owns spawning the
//! resolved command and mapping outcomes to process exit codes: 0 for
//! prompts and dry runs, 1 for translation errors, 127 when the target
//! executable is missing, and the child's own exit code otherwise.

use std::io::ErrorKind;
use std::process::Command;

use tracing::{debug, info, warn};
use which::which;

use crate::config::Config;
use crate::translator::{CommandTranslator, PROGRAM_NAME};

/// Exit code for translation failures.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code when the target executable cannot be found on PATH.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Executes sacman invocations end to end.
pub struct Runner {
    translator: CommandTranslator,
    announce: bool,
}

impl Runner {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            translator: CommandTranslator::with_target(config.target.program.clone()),
            announce: config.runner.announce,
        }
    }

    /// Translate the given argument tokens and execute the result.
    ///
    /// Returns the process exit code the caller should terminate with.
    pub fn run(&self, tokens: &[String]) -> i32 {
        let line = std::iter::once(PROGRAM_NAME)
            .chain(tokens.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        let result = self.translator.translate(&line);
        debug!(command = %result.command, error = ?result.error, "translated invocation");

        if let Some(error) = &result.error {
            eprintln!("Error: {error}");
            return EXIT_FAILURE;
        }
        if result.command.is_empty() {
            println!("{}", result.explanation);
            return 0;
        }

        if self.announce {
            if !result.explanation.is_empty() {
                println!("{}", result.explanation);
            }
            println!("--> Executing: {}", result.command);
        }
        if result.target_dry_run {
            println!(
                "Note: -D enables {}'s dry-run mode; the command is validated but unit state is not changed.",
                self.translator.target_program()
            );
        }
        if result.engine_dry_run {
            println!("Dry run enabled (-z). Command not executed.");
            return 0;
        }

        self.execute(&result.command)
    }

    fn execute(&self, command_line: &str) -> i32 {
        let mut segments = command_line.split_whitespace();
        let Some(program) = segments.next() else {
            return 0;
        };

        if which(program).is_err() {
            return report_not_found(program);
        }

        info!(%program, "spawning target process");
        match Command::new(program).args(segments).status() {
            Ok(status) if status.success() => 0,
            Ok(status) => {
                let code = status.code().unwrap_or(EXIT_FAILURE);
                eprintln!("Error: Command failed with exit code {code}.");
                code
            }
            Err(error) if error.kind() == ErrorKind::NotFound => report_not_found(program),
            Err(error) => {
                warn!(%error, "failed to spawn target process");
                eprintln!("Error: {error}");
                EXIT_FAILURE
            }
        }
    }
}

fn report_not_found(program: &str) -> i32 {
    eprintln!("Error: '{program}' command not found. Please ensure it is in your PATH.");
    EXIT_NOT_FOUND
}
