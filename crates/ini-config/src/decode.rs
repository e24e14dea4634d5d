use std::borrow::Cow;
use std::fmt;

use crate::config::{DecodeOptions, UnknownSection};
use crate::error::IniError;
use crate::model::{normalize_tag, FieldEntry, Model};

/// One input line, classified. Expects a trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    /// The full header, brackets included.
    Section(&'a str),
    /// Split at the first `=`; both sides trimmed.
    Property { key: &'a str, value: &'a str },
    Other,
}

pub fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with([';', '#']) {
        return Line::Comment;
    }
    if line.starts_with('[') && line.ends_with(']') {
        return Line::Section(line);
    }
    match line.split_once('=') {
        Some((key, value)) => Line::Property {
            key: key.trim(),
            value: value.trim(),
        },
        None => Line::Other,
    }
}

/// A line that matched no field in the scope it appeared in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unmatched {
    /// 1-based line number.
    pub line: usize,
    /// The trimmed line text.
    pub text: String,
}

impl fmt::Display for Unmatched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.line, self.text)
    }
}

/// Input bytes as text; invalid UTF-8 is replaced rather than rejected.
pub(crate) fn source_text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

enum Scope<'m, R> {
    TopLevel,
    Section(&'m FieldEntry<R>),
    Unknown,
}

impl<R> Clone for Scope<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Scope<'_, R> {}

/// State for one pass over the input lines.
pub struct DecodeState<'m, R> {
    model: &'m Model<R>,
    options: &'m DecodeOptions,
    scope: Scope<'m, R>,
    line_number: usize,
    error: Option<IniError>,
    unmatched: Vec<Unmatched>,
}

impl<'m, R> DecodeState<'m, R> {
    /// `error` carries a structural error raised while building `model`, if any.
    pub fn new(model: &'m Model<R>, options: &'m DecodeOptions, error: Option<IniError>) -> Self {
        Self {
            model,
            options,
            scope: Scope::TopLevel,
            line_number: 0,
            error,
            unmatched: Vec::new(),
        }
    }

    /// Feed lines until they run out, a fatal error occurs, or a structural
    /// error has been recorded.
    pub fn run<'a, I>(&mut self, lines: I, record: &mut R) -> Result<(), IniError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            if self.error.is_some() {
                break;
            }
            self.feed(line, record)?;
        }

        log::debug!(
            "decoded {} ini lines, {} unmatched",
            self.line_number,
            self.unmatched.len()
        );

        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Process one raw line. Only fatal conversion errors are returned; structural
    /// errors are kept until `run` finishes.
    pub fn feed(&mut self, raw: &str, record: &mut R) -> Result<(), IniError> {
        self.line_number += 1;
        let line = raw.trim();
        let class = classify(line);
        log::trace!("line {}: {:?}", self.line_number, class);

        match class {
            Line::Blank | Line::Comment => {}
            Line::Section(header) => self.enter_section(header),
            Line::Property { key, value } => {
                if !self.apply(key, value, line, record)? {
                    self.unmatch(line);
                }
            }
            Line::Other => self.unmatch(line),
        }
        Ok(())
    }

    pub fn unmatched(&self) -> &[Unmatched] {
        &self.unmatched
    }

    pub fn into_unmatched(self) -> Vec<Unmatched> {
        self.unmatched
    }

    fn enter_section(&mut self, header: &str) {
        let model = self.model;
        let key = self.options.section_key(header);
        self.scope = match model.get(&key) {
            Some(entry) => Scope::Section(entry),
            None => match self.options.unknown_section {
                UnknownSection::Unmatched => Scope::Unknown,
                UnknownSection::TopLevel => Scope::TopLevel,
            },
        };
    }

    fn apply(&mut self, key: &str, value: &str, line: &str, record: &mut R) -> Result<bool, IniError> {
        let key = normalize_tag(key);
        let model = self.model;
        let entry = match self.scope {
            Scope::TopLevel => model.get(&key),
            Scope::Section(section) => section.children.get(&key),
            Scope::Unknown => None,
        };
        let Some(entry) = entry else {
            return Ok(false);
        };

        if let Err(kind) = entry.target.assign(record, value) {
            let err = IniError::new(self.line_number, line, kind);
            if err.is_fatal() {
                return Err(err);
            }
            if self.error.is_none() {
                self.error = Some(err);
            }
        }
        Ok(true)
    }

    fn unmatch(&mut self, line: &str) {
        log::trace!("line {} unmatched: {}", self.line_number, line);
        self.unmatched.push(Unmatched {
            line: self.line_number,
            text: line.to_string(),
        });
    }
}
