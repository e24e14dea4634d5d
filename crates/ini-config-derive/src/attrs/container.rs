//! Struct-level attribute definitions.

use super::types::RenameStrategy;

/// Struct-level INI attributes, parsed from `#[ini(...)]` on structs.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Rename strategy for fields without an explicit tag.
    pub rename_all: RenameStrategy,
}
