//! Decode INI text into caller-defined records.
//!
//! Records describe themselves through `#[derive(IniRecord)]`. Each field is
//! looked up by its tag, case-insensitively: an explicit `#[ini(name = "...")]`
//! or the field name. Nested records become sections, and a field tagged `-`
//! merges its fields into the enclosing scope.
//!
//! ```
//! use ini_config::IniRecord;
//!
//! #[derive(Debug, Default, IniRecord)]
//! struct Config {
//!     name: String,
//!     #[ini(name = "port")]
//!     ports: Vec<u16>,
//!     verbose: bool,
//! }
//!
//! let mut config = Config::default();
//! ini_config::decode(b"Name = demo\nport=80\nport=8080\nverbose=yes\n", &mut config).unwrap();
//! assert_eq!(config.name, "demo");
//! assert_eq!(config.ports, vec![80, 8080]);
//! assert!(config.verbose);
//! ```

extern crate self as ini_config;

pub mod config;
pub mod convert;
pub mod decode;
pub mod decoder;
pub mod error;
pub mod field;
pub mod model;

pub use config::{DecodeOptions, DuplicateTagPolicy, SectionLookup, UnknownSection};
pub use convert::{parse_bool, IniValue, ValueKind};
pub use decode::{classify, DecodeState, Line, Unmatched};
pub use decoder::Decoder;
pub use error::{ErrorKind, IniError};
pub use field::{Access, FieldKind, IniField, IniRecord};
pub use model::{build_model, normalize_tag, FieldEntry, Model, ModelBuilder, Target};

// Re-export the derive so users only need to depend on `ini-config`
pub use ini_config_derive::IniRecord;

/// Decode INI `bytes` into `record` with default options.
///
/// Lines that match nothing are not errors; use [`Decoder`] to inspect them.
pub fn decode<T: IniField>(bytes: &[u8], record: &mut T) -> Result<(), IniError> {
    decode_with_options(bytes, record, &DecodeOptions::default())
}

/// Decode INI `bytes` into `record` using the provided options.
pub fn decode_with_options<T: IniField>(
    bytes: &[u8],
    record: &mut T,
    options: &DecodeOptions,
) -> Result<(), IniError> {
    decoder::decode_bytes(bytes, record, options).0
}

/// Decode an INI string into a freshly defaulted record.
pub fn from_str<T: IniRecord + Default>(contents: &str) -> Result<T, IniError> {
    let mut record = T::default();
    decode(contents.as_bytes(), &mut record)?;
    Ok(record)
}
