// crates/iec61850-mapper/src/bindings.rs

//! Loads located variables (`name AT %address : TYPE;`) from Structured Text.

use crate::error::MapperError;
use crate::types::Resolution;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use log::debug;
use regex::Regex;

/// A located variable declaration, with the name and address captured.
/// Lines are matched after trimming, so the pattern is anchored at both ends.
const DECLARATION_PATTERN: &str = r"^([a-zA-Z0-9_]+) AT (%[A-Z0-9.]+) : [a-zA-Z0-9_]+;$";

const BLOCK_START: &str = "VAR";
const BLOCK_END: &str = "END_VAR";

/// Maps PLC variable names to their located addresses (e.g. `%IX0.0`).
///
/// Read-only once loaded; the last declaration of a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingTable {
    entries: BTreeMap<String, String>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a binding, replacing any earlier address for `name`.
    pub fn insert(&mut self, name: impl Into<String>, address: impl Into<String>) {
        self.entries.insert(name.into(), address.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Looks up `name`, keeping a miss explicit.
    pub fn resolve(&self, name: &str) -> Resolution {
        match self.get(name) {
            Some(address) => Resolution::Found(address.to_string()),
            None => {
                debug!("No located variable named '{}'", name);
                Resolution::Unresolved
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, address)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parses Structured Text source and collects every located variable declared
/// inside a `VAR ... END_VAR` block.
///
/// Lines that do not match the declaration grammar are skipped silently, as
/// is everything outside a `VAR` block (including `VAR_INPUT` and friends).
///
/// # Errors
/// Only fails if the declaration pattern cannot be compiled; malformed
/// source text is never an error.
pub fn load_bindings_from_str(source: &str) -> Result<BindingTable, MapperError> {
    let pattern = Regex::new(DECLARATION_PATTERN)?;
    let mut table = BindingTable::new();
    let mut in_block = false;

    for raw_line in source.lines() {
        let line = raw_line.trim();

        if !in_block {
            if line == BLOCK_START {
                in_block = true;
            }
            continue;
        }

        if line == BLOCK_END {
            in_block = false;
            continue;
        }

        if let Some(caps) = pattern.captures(line) {
            table.insert(&caps[1], &caps[2]);
        }
    }

    debug!("Loaded {} located variables", table.len());
    Ok(table)
}
