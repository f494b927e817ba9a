//! Notetag scanning for battle command blocks.
//!
//! Class and actor records carry free-text notes. A note may embed one
//! command block:
//!
//! ```text
//! <Battle Commands>
//! Attack
//! Skill:12
//! ActorCmd
//! Guard
//! </Battle Commands>
//! ```
//!
//! [`extract_commands`] pulls the block out as an ordered list of raw lines;
//! [`Command::parse`] turns one line into a typed command token.

pub mod command;

use std::sync::LazyLock;

use regex::Regex;

pub use command::Command;

/// Matches the delimited command block inside a note. Case-insensitive,
/// delimiters are literal.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<battle commands>\s+(.*?)[\r\n]+\s*</battle commands>")
        .expect("command block regex")
});

/// Extract the ordered command-line list from a record's note text.
///
/// Returns the trimmed, non-empty lines of the first `<Battle Commands>`
/// block, in file order. A note without a block yields an empty list.
pub fn extract_commands(note: &str) -> Vec<String> {
    let Some(caps) = BLOCK_RE.captures(note) else {
        return Vec::new();
    };

    caps[1]
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract and parse in one pass.
pub fn parse_commands(note: &str) -> Vec<Command> {
    extract_commands(note)
        .iter()
        .map(|line| Command::parse(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_block_lines_in_order() {
        let note = "Designer memo.\n<Battle Commands>\nAttack\nSkill:12\nGuard\n</Battle Commands>\nMore memo.";
        let lines = extract_commands(note);
        assert_eq!(lines, vec!["Attack", "Skill:12", "Guard"]);
    }

    #[test]
    fn block_delimiters_are_case_insensitive() {
        let note = "<battle commands>\nattack\n</BATTLE COMMANDS>";
        assert_eq!(extract_commands(note), vec!["attack"]);
    }

    #[test]
    fn trims_indented_lines() {
        let note = "<Battle Commands>\n  Attack  \n\t Items\n</Battle Commands>";
        assert_eq!(extract_commands(note), vec!["Attack", "Items"]);
    }

    #[test]
    fn skips_blank_lines_inside_block() {
        let note = "<Battle Commands>\nAttack\n\n\nGuard\n</Battle Commands>";
        assert_eq!(extract_commands(note), vec!["Attack", "Guard"]);
    }

    #[test]
    fn note_without_block_yields_empty_list() {
        assert!(extract_commands("Just a memo, no commands here.").is_empty());
        assert!(extract_commands("").is_empty());
    }

    #[test]
    fn handles_crlf_notes() {
        let note = "<Battle Commands>\r\nAttack\r\nItems\r\n</Battle Commands>";
        assert_eq!(extract_commands(note), vec!["Attack", "Items"]);
    }

    #[test]
    fn parse_commands_maps_each_line() {
        let note = "<Battle Commands>\nAttack\nActorCmd\nSkill:3\n</Battle Commands>";
        let cmds = parse_commands(note);
        assert_eq!(
            cmds,
            vec![Command::Attack, Command::ActorList, Command::Skill(3)]
        );
    }
}
