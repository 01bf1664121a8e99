//! Filter, order and limit criteria for collection queries.

use serde::{Deserialize, Serialize};

use crate::value::Value;

// ── Filters ─────────────────────────────────────────────────────────────────

/// Desired value(s) for one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Column equals the value.
    ///
    /// Rendered as SQL `=`, so `Value::Null` never matches, not even rows
    /// whose column is NULL. The same holds for NULL inside [`Filter::OneOf`].
    Equals(Value),
    /// Column is one of the values. A single value degrades to equality;
    /// an empty list is not honoured.
    OneOf(Vec<Value>),
}

impl Filter {
    pub fn equals(value: impl Into<Value>) -> Self {
        Self::Equals(value.into())
    }

    pub fn one_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::OneOf(values.into_iter().map(Into::into).collect())
    }
}

/// Property → filter mapping, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filters {
    entries: Vec<(String, Filter)>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter for a property, replacing any previous one in place.
    pub fn insert(&mut self, property: impl Into<String>, filter: Filter) {
        let property = property.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = filter,
            None => self.entries.push((property, filter)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&Filter> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, f)| f)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Filter)> {
        self.entries.iter().map(|(p, f)| (p.as_str(), f))
    }
}

impl<P: Into<String>> FromIterator<(P, Filter)> for Filters {
    fn from_iter<I: IntoIterator<Item = (P, Filter)>>(iter: I) -> Self {
        let mut filters = Self::new();
        for (property, filter) in iter {
            filters.insert(property, filter);
        }
        filters
    }
}

// ── Ordering ────────────────────────────────────────────────────────────────

/// Sort direction, applied to every ORDER BY column at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Parse a direction token. Anything other than `desc` sorts ascending.
    pub fn parse(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

// ── Criteria ────────────────────────────────────────────────────────────────

/// Everything a filtered collection query is built from.
///
/// `limit` holds positional bounds exactly as supplied: one value caps the
/// row count, two values are rendered as `LIMIT <first>, <second>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default)]
    pub filters: Filters,
    #[serde(default)]
    pub order: Vec<String>,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub limit: Vec<Value>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, property: impl Into<String>, filter: Filter) -> Self {
        self.filters.insert(property, filter);
        self
    }

    /// Require `property` to equal `value`.
    pub fn eq(self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(property, Filter::equals(value))
    }

    /// Require `property` to be one of `values`.
    pub fn one_of<I, V>(self, property: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.filter(property, Filter::one_of(values))
    }

    pub fn order_by(mut self, property: impl Into<String>) -> Self {
        self.order.push(property.into());
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn descending(self) -> Self {
        self.direction(Direction::Desc)
    }

    /// Cap the number of rows returned.
    pub fn limit(mut self, count: u64) -> Self {
        self.limit = vec![Value::Integer(clamp(count))];
        self
    }

    /// Two positional bounds, rendered as `LIMIT <first>, <second>`.
    pub fn limit_bounds(mut self, first: u64, second: u64) -> Self {
        self.limit = vec![Value::Integer(clamp(first)), Value::Integer(clamp(second))];
        self
    }

    /// Raw positional bounds, e.g. taken from user input. Malformed values
    /// are ignored when the query is built.
    pub fn limit_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.limit = values.into_iter().map(Into::into).collect();
        self
    }
}

fn clamp(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
