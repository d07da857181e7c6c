use crate::error::{Result, TableError};
use crate::hash::{CodePointSum, KeyHasher};
use crate::hash_table::HashTable;

/// A dynamically typed value, for tables that hold a mix of types.
///
/// Integers are stored as `i64`. `isize` converts directly, `u64` and
/// `usize` go through `TryFrom` since they can exceed `i64::MAX`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

/// A table of dynamically typed values
pub type AnyTable<H = CodePointSum> = HashTable<Value, H>;

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn mismatch(&self, expected: &'static str) -> TableError {
        TableError::TypeMismatch {
            expected,
            found: self.type_name(),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Int,
    u16 => Int,
    u32 => Int,
    f32 => Float,
    f64 => Float,
    String => Str,
    &str => Str,
}

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Value::Int(v as i64)
    }
}

macro_rules! impl_try_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for Value {
                type Error = TableError;

                fn try_from(v: $ty) -> Result<Self> {
                    i64::try_from(v).map(Value::Int).map_err(|_| TableError::OutOfRange {
                        value: v as i128,
                        target: "int",
                    })
                }
            }
        )*
    };
}

impl_try_from_unsigned!(u64, usize);

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl TryFrom<&Value> for bool {
    type Error = TableError;

    fn try_from(v: &Value) -> Result<Self> {
        match v {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch("bool")),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = TableError;

    fn try_from(v: &Value) -> Result<Self> {
        match v {
            Value::Int(i) => Ok(*i),
            other => Err(other.mismatch("int")),
        }
    }
}

/// Largest magnitude an `i64` can have and still convert to `f64` exactly
const MAX_EXACT_FLOAT_INT: u64 = 1 << 53;

impl TryFrom<&Value> for f64 {
    type Error = TableError;

    fn try_from(v: &Value) -> Result<Self> {
        match v {
            Value::Float(f) => Ok(*f),
            Value::Int(i) if i.unsigned_abs() <= MAX_EXACT_FLOAT_INT => Ok(*i as f64),
            Value::Int(i) => Err(TableError::OutOfRange {
                value: *i as i128,
                target: "float",
            }),
            other => Err(other.mismatch("float")),
        }
    }
}

impl TryFrom<&Value> for usize {
    type Error = TableError;

    fn try_from(v: &Value) -> Result<Self> {
        match v {
            Value::Int(i) => usize::try_from(*i).map_err(|_| TableError::OutOfRange {
                value: *i as i128,
                target: "usize",
            }),
            other => Err(other.mismatch("int")),
        }
    }
}

impl TryFrom<&Value> for String {
    type Error = TableError;

    fn try_from(v: &Value) -> Result<Self> {
        match v {
            Value::Str(s) => Ok(s.clone()),
            other => Err(other.mismatch("str")),
        }
    }
}

impl TryFrom<&Value> for Vec<Value> {
    type Error = TableError;

    fn try_from(v: &Value) -> Result<Self> {
        match v {
            Value::List(items) => Ok(items.clone()),
            other => Err(other.mismatch("list")),
        }
    }
}

impl<H: KeyHasher> HashTable<Value, H> {
    /// Looks up `key` and converts the value to `T`.
    /// A missing key is `Ok(None)`. A value of the wrong type, or a number
    /// that would lose precision in `T`, is an error.
    pub fn lookup_as<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: for<'a> TryFrom<&'a Value, Error = TableError>,
    {
        self.lookup(key).map(T::try_from).transpose()
    }
}
