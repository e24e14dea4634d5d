use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::rc::Rc;

use crate::convert::{IniValue, ValueKind};
use crate::error::ErrorKind;
use crate::model::{Model, ModelBuilder};

/// Shape of a declared field as seen by the model builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(ValueKind),
    List(ValueKind),
    Record,
    Map,
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Scalar(ValueKind::String) => "string",
            FieldKind::Scalar(ValueKind::Bool) => "bool",
            FieldKind::Scalar(ValueKind::Signed) => "int",
            FieldKind::Scalar(ValueKind::Unsigned) => "uint",
            FieldKind::Scalar(ValueKind::Float) => "float",
            FieldKind::List(_) => "list",
            FieldKind::Record => "struct",
            FieldKind::Map => "map",
        }
    }
}

/// A writable location of type `T` inside a destination record `R`.
///
/// Projections compose, so a field three sections deep is reached by chaining
/// `project` from [`Access::root`].
pub struct Access<R, T: ?Sized> {
    get: Rc<dyn Fn(&mut R) -> &mut T>,
}

fn accessor<R, T: ?Sized, F>(f: F) -> F
where
    F: Fn(&mut R) -> &mut T,
{
    f
}

impl<R: 'static> Access<R, R> {
    pub fn root() -> Self {
        Self {
            get: Rc::new(accessor(|record: &mut R| record)),
        }
    }
}

impl<R: 'static, T: ?Sized + 'static> Access<R, T> {
    pub fn project<U, F>(&self, f: F) -> Access<R, U>
    where
        U: ?Sized + 'static,
        F: Fn(&mut T) -> &mut U + 'static,
    {
        let get = Rc::clone(&self.get);
        Access {
            get: Rc::new(accessor(move |record: &mut R| f(get(record)))),
        }
    }

    pub fn get<'a>(&self, record: &'a mut R) -> &'a mut T {
        (self.get)(record)
    }
}

impl<R, T: ?Sized> Clone for Access<R, T> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
        }
    }
}

/// A type that can sit in a destination record.
///
/// `#[derive(IniRecord)]` implements this for structs, registering each field in
/// `describe`. Scalars, lists of scalars, boxes and maps are covered here.
pub trait IniField: 'static {
    fn kind() -> FieldKind;

    /// Write one raw value into this field.
    fn assign(&mut self, raw: &str) -> Result<(), ErrorKind>;

    /// Register the children of a structured field into `scope`.
    fn describe<R: 'static>(
        _access: &Access<R, Self>,
        _builder: &mut ModelBuilder<'_>,
        _scope: &mut Model<R>,
    ) {
    }
}

/// Marker for structured types produced by `#[derive(IniRecord)]`.
pub trait IniRecord: IniField {}

macro_rules! impl_scalar_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IniField for $ty {
                fn kind() -> FieldKind {
                    FieldKind::Scalar(<$ty as IniValue>::KIND)
                }

                fn assign(&mut self, raw: &str) -> Result<(), ErrorKind> {
                    *self = <$ty as IniValue>::from_ini(raw)?;
                    Ok(())
                }
            }
        )*
    };
}

impl_scalar_field!(
    String, PathBuf, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64,
);

/// Repeated keys append; the list is never cleared by decoding.
impl<T: IniValue> IniField for Vec<T> {
    fn kind() -> FieldKind {
        FieldKind::List(T::KIND)
    }

    fn assign(&mut self, raw: &str) -> Result<(), ErrorKind> {
        self.push(T::from_ini(raw)?);
        Ok(())
    }
}

impl<T: IniField> IniField for Box<T> {
    fn kind() -> FieldKind {
        T::kind()
    }

    fn assign(&mut self, raw: &str) -> Result<(), ErrorKind> {
        (**self).assign(raw)
    }

    fn describe<R: 'static>(
        access: &Access<R, Self>,
        builder: &mut ModelBuilder<'_>,
        scope: &mut Model<R>,
    ) {
        T::describe(&access.project::<T, _>(|boxed: &mut Box<T>| &mut **boxed), builder, scope);
    }
}

impl<T: IniRecord> IniRecord for Box<T> {}

impl<K: 'static, V: 'static, S: 'static> IniField for HashMap<K, V, S> {
    fn kind() -> FieldKind {
        FieldKind::Map
    }

    fn assign(&mut self, _raw: &str) -> Result<(), ErrorKind> {
        Err(ErrorKind::UnsupportedField { kind: "map" })
    }
}

impl<K: 'static, V: 'static> IniField for BTreeMap<K, V> {
    fn kind() -> FieldKind {
        FieldKind::Map
    }

    fn assign(&mut self, _raw: &str) -> Result<(), ErrorKind> {
        Err(ErrorKind::UnsupportedField { kind: "map" })
    }
}
