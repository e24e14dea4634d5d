//! Lookup model built from a destination record's declared shape.
//!
//! The model maps normalized tags to writable targets. Structured fields get a
//! child model of their own (a namespace selected by a section header), except
//! when tagged `-`, in which case their fields are merged into the enclosing
//! scope instead.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::config::{DecodeOptions, DuplicateTagPolicy};
use crate::error::{ErrorKind, IniError};
use crate::field::{Access, FieldKind, IniField};

/// Tag that flattens a structured field into its parent's scope.
pub const FLATTEN_TAG: &str = "-";

/// Trim and lowercase a tag or key for lookup.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Setter for one field of `R`.
pub struct Target<R> {
    assign: Rc<dyn Fn(&mut R, &str) -> Result<(), ErrorKind>>,
}

impl<R> Target<R> {
    pub fn assign(&self, record: &mut R, raw: &str) -> Result<(), ErrorKind> {
        (self.assign)(record, raw)
    }
}

impl<R> Clone for Target<R> {
    fn clone(&self) -> Self {
        Self {
            assign: Rc::clone(&self.assign),
        }
    }
}

pub struct FieldEntry<R> {
    pub tag: String,
    pub kind: FieldKind,
    pub target: Target<R>,
    pub children: Model<R>,
}

impl<R> fmt::Debug for FieldEntry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldEntry")
            .field("tag", &self.tag)
            .field("kind", &self.kind)
            .field("children", &self.children)
            .finish()
    }
}

pub struct Model<R> {
    entries: HashMap<String, FieldEntry<R>>,
}

impl<R> Model<R> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Look up an already-normalized tag.
    pub fn get(&self, tag: &str) -> Option<&FieldEntry<R>> {
        self.entries.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    fn insert(&mut self, entry: FieldEntry<R>) -> Option<FieldEntry<R>> {
        self.entries.insert(entry.tag.clone(), entry)
    }
}

impl<R> Default for Model<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Model<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<&FieldEntry<R>> = self.entries.values().collect();
        entries.sort_by(|a, b| a.tag.cmp(&b.tag));
        f.debug_list().entries(entries).finish()
    }
}

/// Walks declared fields and fills models.
///
/// Shape problems do not stop the walk; the first one is kept and reported
/// once building is done.
pub struct ModelBuilder<'a> {
    options: &'a DecodeOptions,
    error: Option<IniError>,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(options: &'a DecodeOptions) -> Self {
        Self {
            options,
            error: None,
        }
    }

    pub fn options(&self) -> &DecodeOptions {
        self.options
    }

    /// Record a structural error unless one is already held.
    pub fn save_error(&mut self, kind: ErrorKind) {
        if self.error.is_none() {
            self.error = Some(IniError::before_input(kind));
        }
    }

    /// Register one declared field of a record into `scope`.
    ///
    /// `tag` is the explicit annotation, if any; otherwise `declared` is used.
    pub fn field<R: 'static, T: IniField>(
        &mut self,
        scope: &mut Model<R>,
        declared: &str,
        tag: Option<&str>,
        access: Access<R, T>,
    ) {
        let tag = normalize_tag(tag.filter(|t| !t.is_empty()).unwrap_or(declared));
        let kind = T::kind();

        if tag == FLATTEN_TAG {
            if kind == FieldKind::Record {
                T::describe(&access, self, scope);
            }
            return;
        }

        let setter = access.clone();
        let mut entry = FieldEntry {
            tag,
            kind,
            target: Target {
                assign: Rc::new(move |record: &mut R, raw: &str| setter.get(record).assign(raw)),
            },
            children: Model::new(),
        };

        if kind == FieldKind::Record {
            T::describe(&access, self, &mut entry.children);
        }

        if scope.contains(&entry.tag) {
            match self.options.duplicate_tags {
                DuplicateTagPolicy::LastWins => {
                    log::debug!("tag '{}' declared again, replacing earlier field", entry.tag);
                }
                DuplicateTagPolicy::Error => {
                    self.save_error(ErrorKind::DuplicateTag {
                        tag: entry.tag.clone(),
                    });
                }
            }
        }
        scope.insert(entry);
    }

    pub fn finish(self) -> Option<IniError> {
        self.error
    }
}

/// Build the root model for a destination of type `T`.
///
/// A destination that is not a structured record yields an empty model and an
/// `UnsupportedTarget` error.
pub fn build_model<T: IniField>(options: &DecodeOptions) -> (Model<T>, Option<IniError>) {
    let mut builder = ModelBuilder::new(options);
    let mut root = Model::new();

    match T::kind() {
        FieldKind::Record => T::describe(&Access::root(), &mut builder, &mut root),
        other => builder.save_error(ErrorKind::UnsupportedTarget { kind: other.name() }),
    }

    log::debug!("built ini model with {} top-level tags", root.len());
    (root, builder.finish())
}
