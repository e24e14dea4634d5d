use std::path::PathBuf;

use crate::error::ErrorKind;

/// Broad category of a scalar target, used for diagnostics and model inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Bool,
    Signed,
    Unsigned,
    Float,
}

/// A scalar that can be produced from the trimmed right-hand side of a `key=value` line.
pub trait IniValue: Sized + 'static {
    const TYPE_NAME: &'static str;
    const KIND: ValueKind;

    fn from_ini(raw: &str) -> Result<Self, ErrorKind>;
}

/// Returns true for truthy values like t/true/y/yes/1, false otherwise.
pub fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.to_lowercase().as_str(),
        "t" | "true" | "y" | "yes" | "1"
    )
}

/// Parse a base-10 signed integer as i64, then narrow to the target width.
pub fn parse_signed<T: TryFrom<i64>>(raw: &str, target_type: &'static str) -> Result<T, ErrorKind> {
    let wide: i64 = raw
        .parse()
        .map_err(|_| ErrorKind::invalid_number(raw, target_type))?;
    T::try_from(wide).map_err(|_| ErrorKind::out_of_range(raw, target_type))
}

/// Parse a base-10 unsigned integer as u64, then narrow to the target width.
///
/// A leading sign is rejected, `+` included.
pub fn parse_unsigned<T: TryFrom<u64>>(
    raw: &str,
    target_type: &'static str,
) -> Result<T, ErrorKind> {
    if raw.starts_with('+') {
        return Err(ErrorKind::invalid_number(raw, target_type));
    }
    let wide: u64 = raw
        .parse()
        .map_err(|_| ErrorKind::invalid_number(raw, target_type))?;
    T::try_from(wide).map_err(|_| ErrorKind::out_of_range(raw, target_type))
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

macro_rules! impl_float_value {
    ($ty:ty, $name:literal) => {
        impl IniValue for $ty {
            const TYPE_NAME: &'static str = $name;
            const KIND: ValueKind = ValueKind::Float;

            fn from_ini(raw: &str) -> Result<Self, ErrorKind> {
                let value: $ty = raw
                    .parse()
                    .map_err(|_| ErrorKind::invalid_number(raw, $name))?;
                // std saturates to infinity where a range error is wanted
                if value.is_infinite() && !is_infinity_literal(raw) {
                    return Err(ErrorKind::out_of_range(raw, $name));
                }
                Ok(value)
            }
        }
    };
}

macro_rules! impl_signed_value {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl IniValue for $ty {
                const TYPE_NAME: &'static str = $name;
                const KIND: ValueKind = ValueKind::Signed;

                fn from_ini(raw: &str) -> Result<Self, ErrorKind> {
                    parse_signed(raw, $name)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_value {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl IniValue for $ty {
                const TYPE_NAME: &'static str = $name;
                const KIND: ValueKind = ValueKind::Unsigned;

                fn from_ini(raw: &str) -> Result<Self, ErrorKind> {
                    parse_unsigned(raw, $name)
                }
            }
        )*
    };
}

impl IniValue for String {
    const TYPE_NAME: &'static str = "string";
    const KIND: ValueKind = ValueKind::String;

    fn from_ini(raw: &str) -> Result<Self, ErrorKind> {
        Ok(raw.to_string())
    }
}

impl IniValue for PathBuf {
    const TYPE_NAME: &'static str = "path";
    const KIND: ValueKind = ValueKind::String;

    fn from_ini(raw: &str) -> Result<Self, ErrorKind> {
        Ok(PathBuf::from(raw))
    }
}

impl IniValue for bool {
    const TYPE_NAME: &'static str = "bool";
    const KIND: ValueKind = ValueKind::Bool;

    fn from_ini(raw: &str) -> Result<Self, ErrorKind> {
        Ok(parse_bool(raw))
    }
}

impl_signed_value!(
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    isize => "isize",
);

impl_unsigned_value!(
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    usize => "usize",
);

impl_float_value!(f32, "f32");
impl_float_value!(f64, "f64");
