//! Notetag linting.
//!
//! Walks every actor and class command block and reports lines that will
//! not produce a menu entry at runtime: ids pointing at missing records,
//! skill types absent from `System.json`, placeholder misuse, and lines no
//! registered extension handler claims.

use std::fmt;

use serde::Serialize;
use tracing::instrument;

use battlemenu_data::Database;
use battlemenu_menu::Catalog;
use battlemenu_notetags::Command;

/// The record a finding belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RecordRef {
    Actor { id: u32, name: String },
    Class { id: u32, name: String },
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actor { id, name } => write!(f, "actor {id} ({name})"),
            Self::Class { id, name } => write!(f, "class {id} ({name})"),
        }
    }
}

/// What is wrong with a command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LintIssue {
    /// The line matches no keyword and no registered extension handler.
    UnrecognizedCommand,
    /// A referenced skill id has no record.
    UnknownSkill { id: u32 },
    /// A referenced item id has no record.
    UnknownItem { id: u32 },
    /// A referenced skill type has no name in `System.json`.
    UnknownSkillType { id: u32 },
    /// `ActorCmd` only means something inside a class block.
    PlaceholderInActorBlock,
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedCommand => write!(f, "unrecognized command"),
            Self::UnknownSkill { id } => write!(f, "unknown skill id {id}"),
            Self::UnknownItem { id } => write!(f, "unknown item id {id}"),
            Self::UnknownSkillType { id } => write!(f, "unknown skill type id {id}"),
            Self::PlaceholderInActorBlock => {
                write!(f, "ActorCmd placeholder in an actor block")
            }
        }
    }
}

/// One lint finding, tied to the record and the offending line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintFinding {
    pub record: RecordRef,
    /// The raw command line as written in the note block.
    pub line: String,
    pub issue: LintIssue,
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: `{}`: {}", self.record, self.line, self.issue)
    }
}

/// Lint every command block in the database.
///
/// `handler_names` are the registered extension command names; an
/// unrecognized line is only reported when no handler claims it.
#[instrument(skip(db))]
pub fn check_database(db: &Database, handler_names: &[&str]) -> Vec<LintFinding> {
    let mut findings = Vec::new();

    for class in db.classes() {
        let record = RecordRef::Class {
            id: class.data.id,
            name: class.data.name.clone(),
        };
        for line in &class.command_lines {
            check_line(db, handler_names, &record, line, false, &mut findings);
        }
    }

    for actor in db.actors() {
        let record = RecordRef::Actor {
            id: actor.data.id,
            name: actor.data.name.clone(),
        };
        for line in &actor.command_lines {
            check_line(db, handler_names, &record, line, true, &mut findings);
        }
    }

    findings
}

fn check_line(
    db: &Database,
    handler_names: &[&str],
    record: &RecordRef,
    line: &str,
    in_actor_block: bool,
    findings: &mut Vec<LintFinding>,
) {
    let mut push = |issue: LintIssue| {
        findings.push(LintFinding {
            record: record.clone(),
            line: line.to_string(),
            issue,
        });
    };

    match Command::parse(line) {
        Command::Attack | Command::Skills | Command::Guard | Command::Items => {}
        Command::ActorList => {
            if in_actor_block {
                push(LintIssue::PlaceholderInActorBlock);
            }
        }
        Command::Skill(id) => {
            if db.skill(id).is_none() {
                push(LintIssue::UnknownSkill { id });
            }
        }
        Command::Item(id) => {
            if db.item(id).is_none() {
                push(LintIssue::UnknownItem { id });
            }
        }
        Command::FirstSkill(ids) | Command::LastSkill(ids) => {
            for id in ids {
                if db.skill(id).is_none() {
                    push(LintIssue::UnknownSkill { id });
                }
            }
        }
        Command::FirstItem(ids) | Command::LastItem(ids) => {
            for id in ids {
                if db.item(id).is_none() {
                    push(LintIssue::UnknownItem { id });
                }
            }
        }
        Command::SkillTypes { types, .. } => {
            for id in types {
                if db.skill_type_name(id).is_none() {
                    push(LintIssue::UnknownSkillType { id });
                }
            }
        }
        Command::Extension(raw) => {
            if !handler_claims(handler_names, &raw) {
                push(LintIssue::UnrecognizedCommand);
            }
        }
    }
}

/// A handler claims a raw line when the line is its name or starts with
/// `<name>:`, case-insensitively. Mirrors the dispatch in the menu builder.
fn handler_claims(handler_names: &[&str], raw: &str) -> bool {
    handler_names.iter().any(|name| {
        raw.eq_ignore_ascii_case(name)
            || raw
                .get(..name.len() + 1)
                .is_some_and(|head| head.eq_ignore_ascii_case(&format!("{name}:")))
    })
}
