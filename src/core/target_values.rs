use std::fmt;

use serde_json::Value;
use smallvec::SmallVec;

/// Set of values a trace property is matched against.
///
/// A scalar becomes a one-element set; a list (including a JSON array) is
/// used as-is. Membership uses exact `serde_json::Value` equality, so `1`
/// and `1.0` are different targets.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetValues {
    values: SmallVec<[Value; 2]>,
    from_list: bool,
}

impl TargetValues {
    #[must_use]
    pub fn one(value: impl Into<Value>) -> Self {
        let mut values = SmallVec::new();
        values.push(value.into());
        Self {
            values,
            from_list: false,
        }
    }

    #[must_use]
    pub fn many<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            from_list: true,
        }
    }

    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.values.iter().any(|candidate| candidate == value)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Value> for TargetValues {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::many(items),
            other => Self::one(other),
        }
    }
}

impl From<&str> for TargetValues {
    fn from(value: &str) -> Self {
        Self::one(value)
    }
}

impl From<String> for TargetValues {
    fn from(value: String) -> Self {
        Self::one(value)
    }
}

impl From<bool> for TargetValues {
    fn from(value: bool) -> Self {
        Self::one(value)
    }
}

impl From<i64> for TargetValues {
    fn from(value: i64) -> Self {
        Self::one(value)
    }
}

impl From<i32> for TargetValues {
    fn from(value: i32) -> Self {
        Self::one(value)
    }
}

impl From<u64> for TargetValues {
    fn from(value: u64) -> Self {
        Self::one(value)
    }
}

impl From<f64> for TargetValues {
    fn from(value: f64) -> Self {
        Self::one(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for TargetValues {
    fn from(values: Vec<T>) -> Self {
        Self::many(values)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for TargetValues {
    fn from(values: [T; N]) -> Self {
        Self::many(values)
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for TargetValues {
    fn from(values: &[T]) -> Self {
        Self::many(values.iter().cloned())
    }
}

/// Renders strings bare and lists in brackets, the way the no-match notice
/// quotes the criteria back to the user.
impl fmt::Display for TargetValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.from_list {
            if let Some(value) = self.values.first() {
                return write_value(f, value);
            }
        }
        f.write_str("[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_value(f, value)?;
        }
        f.write_str("]")
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::String(text) => f.write_str(text),
        other => write!(f, "{other}"),
    }
}
