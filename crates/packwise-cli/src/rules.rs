//! # Rules Subcommand
//!
//! Lists rule ids per rule group, followed by the declared priority table.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use clap::Args;

use packwise_rules::RuleSet;

/// Arguments for the `packwise rules` subcommand.
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Only print the priority table.
    #[arg(long)]
    pub priority_only: bool,
}

/// Execute the rules subcommand.
pub fn run_rules(args: &RulesArgs, config_path: Option<&Path>) -> Result<u8> {
    let generator = crate::load_generator(config_path)?;
    print!("{}", render_rules(generator.rules(), args.priority_only));
    Ok(0)
}

/// Render the rule listing.
pub fn render_rules(rules: &RuleSet, priority_only: bool) -> String {
    let mut out = String::new();
    if !priority_only {
        for (group, ids) in rules.ids_by_group() {
            let _ = writeln!(out, "{group} ({})", ids.len());
            for id in ids {
                let _ = writeln!(out, "  {id}");
            }
        }
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "priority");
    for (group, weight) in rules.priority.ranked() {
        let _ = writeln!(out, "  {weight}  {group}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_table_is_heaviest_first() {
        let out = render_rules(&RuleSet::builtin(), true);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "priority");
        assert_eq!(lines[1], "  7  transportation");
        assert_eq!(lines[2], "  6  accommodation");
    }

    #[test]
    fn full_listing_includes_every_group() {
        let rules = RuleSet::builtin();
        let out = render_rules(&rules, false);
        for group in rules.ids_by_group().keys() {
            assert!(out.contains(&format!("{group} (")), "missing {group}");
        }
        assert!(out.contains("\npriority\n"));
    }
}
