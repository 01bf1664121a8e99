//! Result rows and field conversion used by hydration.

use crate::error::HydrateError;
use crate::value::Value;

/// One fetched row: column names mapped to values, in result-set order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: Vec::with_capacity(capacity),
        }
    }

    /// Append a column. Lookups return the first column with a given name.
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.push((column.into(), value.into()));
    }

    /// Builder form of [`Row::push`].
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Read a required column, converting it to the field type.
    pub fn read<T: FromValue>(&self, column: &str) -> Result<T, HydrateError> {
        let value = self.get(column).ok_or_else(|| HydrateError::missing(column))?;
        T::from_value(column, value)
    }

    /// Read a column for strict or partial hydration.
    ///
    /// Strict hydration treats a missing column as an error; partial
    /// hydration leaves the field at its default.
    pub fn read_or_default<T: FromValue + Default>(
        &self,
        column: &str,
        strict: bool,
    ) -> Result<T, HydrateError> {
        match self.get(column) {
            Some(value) => T::from_value(column, value),
            None if strict => Err(HydrateError::missing(column)),
            None => Ok(T::default()),
        }
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

/// Conversion from a stored [`Value`] into a record field.
pub trait FromValue: Sized {
    fn from_value(column: &str, value: &Value) -> Result<Self, HydrateError>;
}

fn mismatch(column: &str, expected: &'static str, found: &Value) -> HydrateError {
    HydrateError::TypeMismatch {
        column: column.to_string(),
        expected,
        found: found.kind(),
    }
}

impl FromValue for Value {
    fn from_value(_column: &str, value: &Value) -> Result<Self, HydrateError> {
        Ok(value.clone())
    }
}

impl FromValue for i64 {
    fn from_value(column: &str, value: &Value) -> Result<Self, HydrateError> {
        match value {
            Value::Integer(n) => Ok(*n),
            other => Err(mismatch(column, "integer", other)),
        }
    }
}

macro_rules! narrow_integer {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                fn from_value(column: &str, value: &Value) -> Result<Self, HydrateError> {
                    let wide = i64::from_value(column, value)?;
                    <$ty>::try_from(wide).map_err(|_| HydrateError::OutOfRange {
                        column: column.to_string(),
                        value: wide,
                        target: stringify!($ty),
                    })
                }
            }
        )*
    };
}

narrow_integer!(i32, u32, u64);

impl FromValue for f64 {
    fn from_value(column: &str, value: &Value) -> Result<Self, HydrateError> {
        match value {
            Value::Real(r) => Ok(*r),
            #[allow(clippy::cast_precision_loss)]
            Value::Integer(n) => Ok(*n as f64),
            other => Err(mismatch(column, "real", other)),
        }
    }
}

impl FromValue for bool {
    fn from_value(column: &str, value: &Value) -> Result<Self, HydrateError> {
        match value {
            Value::Integer(n) => Ok(*n != 0),
            other => Err(mismatch(column, "boolean", other)),
        }
    }
}

impl FromValue for String {
    fn from_value(column: &str, value: &Value) -> Result<Self, HydrateError> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            other => Err(mismatch(column, "text", other)),
        }
    }
}

impl FromValue for Vec<u8> {
    fn from_value(column: &str, value: &Value) -> Result<Self, HydrateError> {
        match value {
            Value::Blob(b) => Ok(b.clone()),
            Value::Text(s) => Ok(s.as_bytes().to_vec()),
            other => Err(mismatch(column, "blob", other)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(column: &str, value: &Value) -> Result<Self, HydrateError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(column, other).map(Some),
        }
    }
}
