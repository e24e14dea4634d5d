/// How a `[section]` header line is turned into a model lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionLookup {
    /// The whole header, brackets included, lowercased: `[Server]` looks up `[server]`.
    #[default]
    Literal,
    /// Brackets stripped and the name trimmed: `[ Server ]` looks up `server`.
    Bare,
}

/// What happens when two declared fields normalize to the same tag in one scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateTagPolicy {
    /// The later field replaces the earlier one.
    #[default]
    LastWins,
    /// Report a structural error naming the tag.
    Error,
}

/// Where property lines go after a header that names no known section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownSection {
    /// Every property line is unmatched until the next known header.
    #[default]
    Unmatched,
    /// Property lines are looked up among top-level tags.
    TopLevel,
}

#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub section_lookup: SectionLookup,
    pub unknown_section: UnknownSection,
    pub duplicate_tags: DuplicateTagPolicy,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section_lookup(mut self, lookup: SectionLookup) -> Self {
        self.section_lookup = lookup;
        self
    }

    pub fn unknown_section(mut self, policy: UnknownSection) -> Self {
        self.unknown_section = policy;
        self
    }

    pub fn duplicate_tags(mut self, policy: DuplicateTagPolicy) -> Self {
        self.duplicate_tags = policy;
        self
    }

    /// Lookup key for a trimmed header line that starts with `[` and ends with `]`.
    pub fn section_key(&self, header: &str) -> String {
        match self.section_lookup {
            SectionLookup::Literal => header.to_lowercase(),
            SectionLookup::Bare => {
                let inner = header
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
                    .unwrap_or(header);
                inner.trim().to_lowercase()
            }
        }
    }
}
