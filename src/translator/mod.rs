//! Translation engine for the sacman command syntax.
//!
//! Turns a pacman-style invocation such as `sacman -Styu nginx.service` into
//! the equivalent `systemctl` command line. The engine is a pure function
//! over its input: it never executes anything, keeps no state between calls,
//! and always returns a [`TranslationResult`] instead of failing.

use std::collections::BTreeSet;

use thiserror::Error;

pub mod rules;

use rules::{MainOp, OpRules, SelectorRule, ENGINE_DRY_RUN, GLOBAL_MODIFIERS, TARGET_DRY_RUN};

/// Literal program name every invocation must start with.
pub const PROGRAM_NAME: &str = "sacman";

/// Target program used when no override is configured.
pub const DEFAULT_TARGET: &str = "systemctl";

const PROMPT_EMPTY: &str = "Type a sacman command to begin.";
const PROMPT_NO_ARGS: &str = "Please provide options and a unit name.";

/// Validation failures surfaced to the caller as values, never as panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("Command must start with \"sacman\".")]
    MalformedInvocation,

    /// A selector operation (`-Q`, `-F`, `-T`) received none of its
    /// recognized modifiers.
    #[error("Operation -{op} requires a command modifier (e.g., {hint}).")]
    MissingModifier { op: char, hint: &'static str },

    /// A selector operation received more than one recognized modifier;
    /// `found` lists them in decision-table order.
    #[error("Operation -{op} accepts only one command modifier (found: {found}).")]
    ConflictingModifiers { op: char, found: String },

    #[error("Unknown main operation: -{op}")]
    UnknownOperation { op: String },
}

/// Outcome of translating one input line.
///
/// Invariant: `error` present implies `command` and `explanation` are empty;
/// a populated `command` implies `error` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationResult {
    /// The fully-formed target command, empty on errors and prompts.
    pub command: String,
    /// Human-readable description of what the command does.
    pub explanation: String,
    pub error: Option<TranslateError>,
    /// `z` was present: show the command but do not execute it.
    pub engine_dry_run: bool,
    /// `D` was present: the command carries the target's own `--dry-run`.
    pub target_dry_run: bool,
}

impl TranslationResult {
    fn prompt(text: &str) -> Self {
        Self {
            explanation: text.to_string(),
            ..Self::default()
        }
    }

    fn failure(error: TranslateError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Translates sacman invocations into target command lines.
#[derive(Debug, Clone)]
pub struct CommandTranslator {
    target_program: String,
}

impl Default for CommandTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandTranslator {
    /// Create a translator targeting `systemctl`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_target(DEFAULT_TARGET)
    }

    /// Create a translator emitting commands for a different target program.
    pub fn with_target(program: impl Into<String>) -> Self {
        Self {
            target_program: program.into(),
        }
    }

    #[must_use]
    pub fn target_program(&self) -> &str {
        &self.target_program
    }

    /// Translate a single input line.
    ///
    /// Each call is independent and reproducible; the same input always
    /// yields the same result.
    #[must_use]
    pub fn translate(&self, input: &str) -> TranslationResult {
        let input = input.trim();
        if input.is_empty() {
            return TranslationResult::prompt(PROMPT_EMPTY);
        }

        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens[0] != PROGRAM_NAME {
            return TranslationResult::failure(TranslateError::MalformedInvocation);
        }
        if tokens.len() == 1 {
            return TranslationResult::prompt(PROMPT_NO_ARGS);
        }

        // The first `-X...` token (but not `--...`) carries the main
        // operation and modifiers. Without one, everything is handed to the
        // target verbatim.
        let option_token = tokens
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, token)| token.starts_with('-') && !token.starts_with("--"));
        let Some((option_index, option_token)) = option_token.map(|(index, token)| (index, *token))
        else {
            return self.pass_through(&tokens);
        };

        let mut flag_chars = option_token[1..].chars();
        let main_op = flag_chars.next();
        let mut modifiers: BTreeSet<char> = flag_chars.collect();

        // `z` is consumed before resolution and never reaches the command.
        let engine_dry_run = modifiers.remove(&ENGINE_DRY_RUN);
        let target_dry_run = modifiers.contains(&TARGET_DRY_RUN);

        let Some(op) = main_op.and_then(rules::main_op) else {
            let op = main_op.map(String::from).unwrap_or_default();
            return TranslationResult::failure(TranslateError::UnknownOperation { op });
        };

        let non_flag_args: Vec<&str> = tokens
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(index, token)| *index != option_index && !token.starts_with("--"))
            .map(|(_, token)| *token)
            .collect();
        let pass_through_options = tokens
            .iter()
            .skip(1)
            .filter(|token| token.starts_with("--"))
            .copied();
        let targets = non_flag_args.join(" ");

        let (subcommand, explanation) = match resolve(op, &modifiers, &targets) {
            Ok(resolved) => resolved,
            Err(error) => return TranslationResult::failure(error),
        };

        let global_options = GLOBAL_MODIFIERS
            .iter()
            .filter(|global| modifiers.contains(&global.modifier))
            .map(|global| global.option);

        let segments: Vec<&str> = std::iter::once(self.target_program.as_str())
            .chain(global_options)
            .chain(pass_through_options)
            .chain(std::iter::once(subcommand))
            .chain(non_flag_args.iter().copied())
            .filter(|segment| !segment.is_empty())
            .collect();

        TranslationResult {
            command: segments.join(" "),
            explanation,
            error: None,
            engine_dry_run,
            target_dry_run,
        }
    }

    fn pass_through(&self, tokens: &[&str]) -> TranslationResult {
        let command = std::iter::once(self.target_program.as_str())
            .chain(tokens.iter().skip(1).copied())
            .collect::<Vec<_>>()
            .join(" ");
        TranslationResult {
            command,
            explanation: format!(
                "No sacman options detected. Passing arguments directly to {}.",
                self.target_program
            ),
            ..TranslationResult::default()
        }
    }
}

fn resolve(
    op: &'static MainOp,
    modifiers: &BTreeSet<char>,
    targets: &str,
) -> Result<(&'static str, String), TranslateError> {
    match &op.rules {
        OpRules::Chain { steps, fallback } => {
            let rule = steps
                .iter()
                .find(|rule| rule.modifiers.chars().all(|modifier| modifiers.contains(&modifier)))
                .unwrap_or(*fallback);
            Ok((rule.subcommand, render(rule.explanation, targets)))
        }
        OpRules::Selector { choices, hint } => {
            let found: Vec<&SelectorRule> = choices
                .iter()
                .filter(|choice| modifiers.contains(&choice.modifier))
                .collect();
            match found.as_slice() {
                [] => Err(TranslateError::MissingModifier {
                    op: op.letter,
                    hint: *hint,
                }),
                [choice] => Ok((choice.subcommand, render(choice.explanation, targets))),
                conflicting => Err(TranslateError::ConflictingModifiers {
                    op: op.letter,
                    found: conflicting
                        .iter()
                        .map(|choice| choice.modifier.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                }),
            }
        }
    }
}

/// Substitute the joined non-flag arguments into an explanation template.
fn render(template: &str, targets: &str) -> String {
    template.replacen("{}", targets, 1)
}
