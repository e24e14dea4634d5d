//! Enum types for INI attribute configuration.

/// Rename strategy applied to declared field names that carry no explicit tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenameStrategy {
    #[default]
    None,
    KebabCase,
    SnakeCase,
    Lowercase,
    Uppercase,
}

impl RenameStrategy {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "kebab-case" => Some(RenameStrategy::KebabCase),
            "snake_case" => Some(RenameStrategy::SnakeCase),
            "lowercase" => Some(RenameStrategy::Lowercase),
            "UPPERCASE" => Some(RenameStrategy::Uppercase),
            "none" => Some(RenameStrategy::None),
            _ => None,
        }
    }

    pub fn apply(&self, name: &str) -> String {
        match self {
            RenameStrategy::None => name.to_string(),
            RenameStrategy::KebabCase => to_kebab_case(name),
            RenameStrategy::SnakeCase => to_snake_case(name),
            RenameStrategy::Lowercase => name.to_lowercase(),
            RenameStrategy::Uppercase => name.to_uppercase(),
        }
    }
}

fn to_separated(s: &str, sep: char) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;

    for c in s.chars() {
        if c == '_' || c == '-' {
            result.push(sep);
            prev_lower = false;
        } else if c.is_ascii_uppercase() {
            if prev_lower {
                result.push(sep);
            }
            result.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            result.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }

    result
}

fn to_kebab_case(s: &str) -> String {
    to_separated(s, '-')
}

fn to_snake_case(s: &str) -> String {
    to_separated(s, '_')
}

#[cfg(test)]
mod tests {
    use super::RenameStrategy;

    #[test]
    fn rename_strategy_kebab() {
        assert_eq!(
            RenameStrategy::KebabCase.apply("listenPort"),
            "listen-port"
        );
        assert_eq!(
            RenameStrategy::KebabCase.apply("listen_port"),
            "listen-port"
        );
    }

    #[test]
    fn rename_strategy_snake() {
        assert_eq!(
            RenameStrategy::SnakeCase.apply("listenPort"),
            "listen_port"
        );
        assert_eq!(
            RenameStrategy::SnakeCase.apply("listen-port"),
            "listen_port"
        );
    }

    #[test]
    fn rename_strategy_case() {
        assert_eq!(RenameStrategy::Lowercase.apply("LogLevel"), "loglevel");
        assert_eq!(RenameStrategy::Uppercase.apply("log_level"), "LOG_LEVEL");
    }

    #[test]
    fn rename_strategy_parse() {
        assert_eq!(RenameStrategy::parse("kebab-case"), Some(RenameStrategy::KebabCase));
        assert_eq!(RenameStrategy::parse("camelCase"), None);
    }
}
