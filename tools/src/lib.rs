//! Command-line helpers for the entwire text protocol.
//!
//! This crate backs the `entwire-tools` binary:
//!
//! - Encode JSON Lines entity events into wire commands
//! - Load alternative symbol tables from JSON
//! - Print the active symbol tables
//!
//! # Design Principles
//!
//! - **Same encoder** - Everything goes through `codec::Serializer`.
//! - **Human-readable output** - Errors point at the offending input line.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use codec::{EntityEvent, Serializer};
use serde::{Deserialize, Serialize};
use symbols::{CommandKind, EntityType, SymbolTables};

/// Symbol table overrides as read from JSON.
///
/// Every section is optional and applies on top of the standard tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TablesFile {
    pub attributes: BTreeMap<String, String>,
    pub commands: BTreeMap<String, String>,
    pub types: BTreeMap<String, String>,
}

impl TablesFile {
    /// Applies the overrides to the standard tables and validates the result.
    pub fn build(&self) -> Result<SymbolTables> {
        let mut builder = SymbolTables::builder();
        for (name, code) in &self.attributes {
            builder = builder.attribute(name.as_str(), code.as_str());
        }
        for (name, code) in &self.commands {
            let kind: CommandKind = name.parse()?;
            builder = builder.command(kind, code.as_str());
        }
        for (name, code) in &self.types {
            let entity_type: EntityType = name.parse()?;
            builder = builder.entity_type(entity_type, code.as_str());
        }
        builder.build().context("validate symbol tables")
    }
}

/// Parses and validates symbol table overrides from JSON text.
pub fn tables_from_json(json: &str) -> Result<SymbolTables> {
    let file: TablesFile = serde_json::from_str(json).context("parse tables json")?;
    file.build()
}

/// Encodes JSON Lines events from `input`, writing one command per line.
///
/// Blank lines are skipped. Returns the number of commands written.
pub fn encode_lines<R, W>(serializer: &Serializer<'_>, input: R, mut output: W) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut written = 0;
    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("read line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }
        let event: EntityEvent = serde_json::from_str(&line)
            .with_context(|| format!("parse event on line {line_no}"))?;
        let command = serializer
            .encode_event(&event)
            .with_context(|| format!("encode event on line {line_no}"))?;
        writeln!(output, "{command}").context("write command")?;
        written += 1;
    }
    tracing::debug!(commands = written, "encoded events");
    Ok(written)
}

/// One `(name, code)` table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    pub name: String,
    pub code: String,
}

/// All symbol tables in printable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablesReport {
    pub attributes: Vec<TableEntry>,
    pub commands: Vec<TableEntry>,
    pub types: Vec<TableEntry>,
}

impl TablesReport {
    /// Collects rows from `tables` in registration order.
    #[must_use]
    pub fn new(tables: &SymbolTables) -> Self {
        let entry = |name: &str, code: &str| TableEntry {
            name: name.to_string(),
            code: code.to_string(),
        };
        Self {
            attributes: tables
                .attributes()
                .iter()
                .map(|(name, code)| entry(name, code))
                .collect(),
            commands: tables
                .commands()
                .iter()
                .map(|(kind, code)| entry(kind.name(), code))
                .collect(),
            types: tables
                .types()
                .iter()
                .map(|(ty, code)| entry(ty.name(), code))
                .collect(),
        }
    }
}

/// Formats a tables report as aligned text.
#[must_use]
pub fn format_tables_pretty(report: &TablesReport) -> String {
    let mut out = String::new();
    for (title, rows) in [
        ("commands", &report.commands),
        ("types", &report.types),
        ("attributes", &report.attributes),
    ] {
        let _ = writeln!(out, "{title}:");
        let width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);
        for row in rows {
            let _ = writeln!(out, "  {:<width$}  {}", row.name, row.code);
        }
    }
    out
}
