//! Static decision tables for the sacman to systemctl mapping.
//!
//! Every surface that restates the mapping (the translation engine, the
//! generated reference tables, the help output) consumes these tables, so
//! the renditions cannot drift apart.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Engine-level dry-run modifier. Stripped from the modifier set before any
/// other resolution; never emitted into the generated command.
pub const ENGINE_DRY_RUN: char = 'z';

/// Modifier mapped to the target's own `--dry-run` option.
pub const TARGET_DRY_RUN: char = 'D';

/// A modifier that maps straight to a target option, independent of the main
/// operation. Generated commands emit these in table order.
#[derive(Debug)]
pub struct GlobalModifier {
    pub modifier: char,
    pub option: &'static str,
    pub summary: &'static str,
}

pub static GLOBAL_MODIFIERS: &[GlobalModifier] = &[
    GlobalModifier {
        modifier: 'u',
        option: "--user",
        summary: "Operate on the user's service manager.",
    },
    GlobalModifier {
        modifier: 'n',
        option: "--now",
        summary: "With enable/disable, also start/stop the unit.",
    },
    GlobalModifier {
        modifier: 'a',
        option: "--all",
        summary: "Show all units and properties.",
    },
    GlobalModifier {
        modifier: 'r',
        option: "--recursive",
        summary: "Also show units of local containers.",
    },
    GlobalModifier {
        modifier: 'f',
        option: "--force",
        summary: "Force the operation.",
    },
    GlobalModifier {
        modifier: TARGET_DRY_RUN,
        option: "--dry-run",
        summary: "Enable systemctl's dry-run mode.",
    },
];

/// One step of a priority chain. A rule fires when every character in
/// `modifiers` is present in the invocation's modifier set; rules are
/// evaluated top to bottom and the first match wins.
#[derive(Debug)]
pub struct ChainRule {
    pub modifiers: &'static str,
    pub subcommand: &'static str,
    /// Explanation template; `{}` is replaced with the space-joined targets.
    pub explanation: &'static str,
    /// Description used in the generated reference tables.
    pub summary: &'static str,
}

/// One choice of a selector operation. Exactly one of an operation's
/// choices must be present in the modifier set.
#[derive(Debug)]
pub struct SelectorRule {
    pub modifier: char,
    pub subcommand: &'static str,
    pub explanation: &'static str,
    pub summary: &'static str,
}

/// How a main operation resolves its modifier set to a subcommand.
#[derive(Debug)]
pub enum OpRules {
    /// Ordered priority rules plus the default taken when none fire.
    Chain {
        steps: &'static [ChainRule],
        fallback: &'static ChainRule,
    },
    /// Mutually exclusive choices; zero or multiple matches is an error.
    /// `hint` is the flag example list shown in the missing-modifier error.
    Selector {
        choices: &'static [SelectorRule],
        hint: &'static str,
    },
}

/// A main operation letter together with its resolution rules.
#[derive(Debug)]
pub struct MainOp {
    pub letter: char,
    pub name: &'static str,
    pub summary: &'static str,
    pub rules: OpRules,
}

pub static MAIN_OPS: &[MainOp] = &[
    MainOp {
        letter: 'S',
        name: "Sync/start",
        summary: "Sync/start operations (enable, start, restart, reload).",
        rules: OpRules::Chain {
            steps: &[
                ChainRule {
                    modifiers: "tydq",
                    subcommand: "try-reload-or-restart",
                    explanation: "Try to reload or restart {}.",
                    summary: "Reload if supported, otherwise restart, only if the unit is running.",
                },
                ChainRule {
                    modifiers: "tyd",
                    subcommand: "reload-or-restart",
                    explanation: "Try to reload or restart {}.",
                    summary: "Reload if supported, otherwise restart the unit.",
                },
                ChainRule {
                    modifiers: "tyc",
                    subcommand: "condrestart",
                    explanation: "Conditionally restart {}.",
                    summary: "Restart the unit only if it is already running.",
                },
                ChainRule {
                    modifiers: "tyq",
                    subcommand: "try-restart",
                    explanation: "Try to restart {}.",
                    summary: "Restart the unit only if it is already running.",
                },
                ChainRule {
                    modifiers: "ty",
                    subcommand: "restart",
                    explanation: "Restart {}.",
                    summary: "Restart a unit.",
                },
                ChainRule {
                    modifiers: "t",
                    subcommand: "start",
                    explanation: "Start {}.",
                    summary: "Start a unit immediately.",
                },
                ChainRule {
                    modifiers: "y",
                    subcommand: "reenable",
                    explanation: "Re-enable {}.",
                    summary: "Disable and enable a unit again, resetting its symlinks.",
                },
                ChainRule {
                    modifiers: "d",
                    subcommand: "reload",
                    explanation: "Reload {}.",
                    summary: "Reload a unit's configuration.",
                },
                ChainRule {
                    modifiers: "m",
                    subcommand: "unmask",
                    explanation: "Unmask {}.",
                    summary: "Undo masking of a unit.",
                },
                ChainRule {
                    modifiers: "e",
                    subcommand: "thaw",
                    explanation: "Thaw (resume) {}.",
                    summary: "Resume execution of a frozen unit.",
                },
            ],
            fallback: &ChainRule {
                modifiers: "",
                subcommand: "enable",
                explanation: "Enable {}.",
                summary: "Enable a unit to start on boot.",
            },
        },
    },
    MainOp {
        letter: 'R',
        name: "Remove/stop",
        summary: "Remove/stop operations (disable, stop, mask, kill).",
        rules: OpRules::Chain {
            steps: &[
                ChainRule {
                    modifiers: "c",
                    subcommand: "clean",
                    explanation: "Clean {}.",
                    summary: "Remove the state, cache and runtime directories of a unit.",
                },
                ChainRule {
                    modifiers: "t",
                    subcommand: "stop",
                    explanation: "Stop {}.",
                    summary: "Stop a unit immediately.",
                },
                ChainRule {
                    modifiers: "m",
                    subcommand: "mask",
                    explanation: "Mask {}.",
                    summary: "Mask a unit, making it impossible to start.",
                },
                ChainRule {
                    modifiers: "k",
                    subcommand: "kill",
                    explanation: "Kill {}.",
                    summary: "Send a signal to a unit's processes.",
                },
                ChainRule {
                    modifiers: "v",
                    subcommand: "revert",
                    explanation: "Revert {}.",
                    summary: "Revert a unit file to its vendor version.",
                },
                ChainRule {
                    modifiers: "e",
                    subcommand: "freeze",
                    explanation: "Freeze (pause) {}.",
                    summary: "Suspend execution of a unit's processes.",
                },
            ],
            fallback: &ChainRule {
                modifiers: "",
                subcommand: "disable",
                explanation: "Disable {}.",
                summary: "Disable a unit from starting on boot.",
            },
        },
    },
    MainOp {
        letter: 'Q',
        name: "Query",
        summary: "Query operations (list units, status, dependencies).",
        rules: OpRules::Selector {
            choices: &[
                SelectorRule {
                    modifier: 'l',
                    subcommand: "list-unit-files",
                    explanation: "List unit files.",
                    summary: "List all installed unit files.",
                },
                SelectorRule {
                    modifier: 'd',
                    subcommand: "list-dependencies",
                    explanation: "List dependencies for {}.",
                    summary: "List dependencies of a unit.",
                },
                SelectorRule {
                    modifier: 'o',
                    subcommand: "list-automounts",
                    explanation: "List automounts.",
                    summary: "List automount units.",
                },
                SelectorRule {
                    modifier: 'm',
                    subcommand: "list-machines",
                    explanation: "List machines.",
                    summary: "List local containers and the host.",
                },
                SelectorRule {
                    modifier: 't',
                    subcommand: "list-timers",
                    explanation: "List timers.",
                    summary: "List timer units.",
                },
                SelectorRule {
                    modifier: 'p',
                    subcommand: "list-paths",
                    explanation: "List paths.",
                    summary: "List path units.",
                },
                SelectorRule {
                    modifier: 'k',
                    subcommand: "list-sockets",
                    explanation: "List sockets.",
                    summary: "List socket units.",
                },
                SelectorRule {
                    modifier: 'y',
                    subcommand: "list-units",
                    explanation: "List units.",
                    summary: "List units currently in memory.",
                },
                SelectorRule {
                    modifier: 'j',
                    subcommand: "list-jobs",
                    explanation: "List jobs.",
                    summary: "List active jobs.",
                },
                SelectorRule {
                    modifier: 'i',
                    subcommand: "status",
                    explanation: "Check status of {}.",
                    summary: "Show the status of a unit.",
                },
            ],
            hint: "-Ql, -Qi, -Qy",
        },
    },
    MainOp {
        letter: 'F',
        name: "File",
        summary: "File operations (edit unit files).",
        rules: OpRules::Selector {
            choices: &[SelectorRule {
                modifier: 'e',
                subcommand: "edit",
                explanation: "Edit unit file for {}.",
                summary: "Edit a unit file with a drop-in.",
            }],
            hint: "-Fe",
        },
    },
    MainOp {
        letter: 'T',
        name: "Test",
        summary: "Test/check operations (is-enabled, is-failed).",
        rules: OpRules::Selector {
            choices: &[
                SelectorRule {
                    modifier: 's',
                    subcommand: "is-enabled",
                    explanation: "Check if {} is enabled.",
                    summary: "Check if a unit is enabled.",
                },
                SelectorRule {
                    modifier: 'c',
                    subcommand: "is-system-running",
                    explanation: "Check if system is running.",
                    summary: "Check whether the system is fully running.",
                },
                SelectorRule {
                    modifier: 'e',
                    subcommand: "is-failed",
                    explanation: "Check if {} has failed.",
                    summary: "Check if a unit has failed.",
                },
            ],
            hint: "-Ts, -Tc",
        },
    },
    MainOp {
        letter: 'J',
        name: "Job",
        summary: "Job operations (list or cancel jobs).",
        rules: OpRules::Chain {
            steps: &[ChainRule {
                modifiers: "c",
                subcommand: "cancel",
                explanation: "Cancel job(s) {}.",
                summary: "Cancel one or more queued jobs.",
            }],
            fallback: &ChainRule {
                modifiers: "",
                subcommand: "list-jobs",
                explanation: "List jobs.",
                summary: "List active jobs.",
            },
        },
    },
    MainOp {
        letter: 'N',
        name: "Environment",
        summary: "Environment block operations.",
        rules: OpRules::Chain {
            steps: &[
                ChainRule {
                    modifiers: "s",
                    subcommand: "set-environment",
                    explanation: "Set environment variables: {}.",
                    summary: "Set service manager environment variables.",
                },
                ChainRule {
                    modifiers: "n",
                    subcommand: "unset-environment",
                    explanation: "Unset environment variables: {}.",
                    summary: "Unset service manager environment variables.",
                },
                ChainRule {
                    modifiers: "i",
                    subcommand: "import-environment",
                    explanation: "Import environment variables.",
                    summary: "Import variables from the caller's environment.",
                },
            ],
            fallback: &ChainRule {
                modifiers: "",
                subcommand: "show-environment",
                explanation: "Show environment.",
                summary: "Show the service manager environment block.",
            },
        },
    },
];

static MAIN_OP_INDEX: Lazy<HashMap<char, &'static MainOp>> =
    Lazy::new(|| MAIN_OPS.iter().map(|op| (op.letter, op)).collect());

/// Look up a main operation by its letter.
#[must_use]
pub fn main_op(letter: char) -> Option<&'static MainOp> {
    MAIN_OP_INDEX.get(&letter).copied()
}
