//! Reference tables for the sacman command syntax.
//!
//! Every table is generated from [`crate::translator::rules`]; nothing in
//! this module restates a mapping by hand, so the reference document cannot
//! fall out of sync with the translation engine.

use std::fmt::Write as _;

use crate::translator::rules::{
    self, ChainRule, MainOp, OpRules, SelectorRule, GLOBAL_MODIFIERS,
};

/// A single renderable reference table.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Build every reference table from the decision tables: the main operation
/// overview, one table per operation, and the global modifiers.
#[must_use]
pub fn tables() -> Vec<ReferenceTable> {
    let mut tables = Vec::with_capacity(rules::MAIN_OPS.len() + 2);
    tables.push(main_operations());
    tables.extend(rules::MAIN_OPS.iter().map(operation_table));
    tables.push(global_modifiers());
    tables
}

/// Render all tables as aligned plain-text columns. This is the body of the
/// executable's `-h`/`--help` output.
#[must_use]
pub fn render_text() -> String {
    let mut out = String::from("Example: sacman -Styu nginx.service\n");
    for table in tables() {
        let mut widths: Vec<usize> = table.headers.iter().map(|header| header.len()).collect();
        for row in &table.rows {
            for (column, cell) in row.iter().enumerate() {
                widths[column] = widths[column].max(cell.len());
            }
        }

        let _ = write!(out, "\n{}:\n  ", table.title);
        for (column, header) in table.headers.iter().enumerate() {
            let _ = write!(out, "{header:<width$}  ", width = widths[column]);
        }
        out.truncate(out.trim_end_matches(' ').len());
        out.push('\n');

        for row in &table.rows {
            out.push_str("  ");
            for (column, cell) in row.iter().enumerate() {
                let _ = write!(out, "{cell:<width$}  ", width = widths[column]);
            }
            out.truncate(out.trim_end_matches(' ').len());
            out.push('\n');
        }
    }
    out
}

fn main_operations() -> ReferenceTable {
    ReferenceTable {
        title: "Main operations".to_string(),
        headers: vec!["Operation", "Description"],
        rows: rules::MAIN_OPS
            .iter()
            .map(|op| vec![format!("-{}", op.letter), op.summary.to_string()])
            .collect(),
    }
}

fn operation_table(op: &'static MainOp) -> ReferenceTable {
    let rows = match &op.rules {
        OpRules::Chain { steps, fallback } => steps
            .iter()
            .chain(std::iter::once(*fallback))
            .map(|rule| chain_row(op, rule))
            .collect(),
        OpRules::Selector { choices, .. } => {
            choices.iter().map(|choice| selector_row(op, choice)).collect()
        }
    };
    ReferenceTable {
        title: format!("{} operations (-{})", op.name, op.letter),
        headers: vec!["Flag", "Command", "Description"],
        rows,
    }
}

fn chain_row(op: &MainOp, rule: &ChainRule) -> Vec<String> {
    vec![
        flag_cell(op.letter, rule.modifiers, rule.explanation),
        rule.subcommand.to_string(),
        rule.summary.to_string(),
    ]
}

fn selector_row(op: &MainOp, choice: &SelectorRule) -> Vec<String> {
    vec![
        flag_cell(op.letter, &choice.modifier.to_string(), choice.explanation),
        choice.subcommand.to_string(),
        choice.summary.to_string(),
    ]
}

/// `-Sty <unit>` style cell; the `<unit>` suffix appears only for rules
/// whose explanation embeds the targets.
fn flag_cell(letter: char, modifiers: &str, explanation: &str) -> String {
    let mut cell = format!("-{letter}{modifiers}");
    if explanation.contains("{}") {
        cell.push_str(" <unit>");
    }
    cell
}

fn global_modifiers() -> ReferenceTable {
    let mut rows: Vec<Vec<String>> = GLOBAL_MODIFIERS
        .iter()
        .map(|global| {
            vec![
                global.modifier.to_string(),
                global.option.to_string(),
                global.summary.to_string(),
            ]
        })
        .collect();
    rows.push(vec![
        rules::ENGINE_DRY_RUN.to_string(),
        "(none)".to_string(),
        "sacman dry run; print the command without executing it.".to_string(),
    ]);
    ReferenceTable {
        title: "Global modifiers".to_string(),
        headers: vec!["Flag", "Option", "Description"],
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_table_per_operation_plus_overviews() {
        assert_eq!(tables().len(), rules::MAIN_OPS.len() + 2);
    }

    #[test]
    fn test_rows_match_headers() {
        for table in tables() {
            for row in &table.rows {
                assert_eq!(row.len(), table.headers.len(), "in {}", table.title);
            }
        }
    }

    #[test]
    fn test_flag_cells_carry_unit_placeholder() {
        let text = render_text();
        assert!(text.contains("-Sty <unit>"));
        assert!(text.contains("-Ql "));
        assert!(!text.contains("-Ql <unit>"));
    }

    #[test]
    fn test_render_mentions_every_subcommand() {
        let text = render_text();
        for subcommand in [
            "try-reload-or-restart",
            "enable",
            "disable",
            "list-unit-files",
            "edit",
            "is-system-running",
            "cancel",
            "show-environment",
        ] {
            assert!(text.contains(subcommand), "missing {subcommand}");
        }
    }

    #[test]
    fn test_render_includes_engine_dry_run_row() {
        assert!(render_text().contains("sacman dry run"));
    }

    #[test]
    fn test_render_has_no_trailing_spaces() {
        for line in render_text().lines() {
            assert_eq!(line, line.trim_end());
        }
    }
}
