//! JSON body sent with a trigger.

use serde::{Serialize, Serializer};

/// A single ingredient value: text or a number.
///
/// Serialized untagged, so `Text("a")` becomes `"a"` and `Integer(1)` becomes `1`.
/// Non-finite floats fail to serialize; JSON would otherwise carry them as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Ingredient {
    /// A string value
    Text(String),
    /// A whole number
    Integer(i64),
    /// A floating-point number
    Float(#[serde(serialize_with = "serialize_finite")] f64),
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde hands fields over by reference
fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(serde::ser::Error::custom(format!(
            "ingredient {value} is not a finite number"
        )));
    }
    serializer.serialize_f64(*value)
}

impl From<&str> for Ingredient {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Ingredient {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Ingredient {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Ingredient {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for Ingredient {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Ingredient {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// The three optional values passed to an applet.
///
/// Absent values are left out of the JSON object entirely; they are never
/// sent as `null`. An empty set serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ingredients {
    #[serde(skip_serializing_if = "Option::is_none")]
    value1: Option<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value2: Option<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value3: Option<Ingredient>,
}

impl Ingredients {
    /// Creates an empty set of ingredients.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates ingredients from three positional optional values.
    #[must_use]
    pub fn from_options<A, B, C>(value1: Option<A>, value2: Option<B>, value3: Option<C>) -> Self
    where
        A: Into<Ingredient>,
        B: Into<Ingredient>,
        C: Into<Ingredient>,
    {
        Self {
            value1: value1.map(Into::into),
            value2: value2.map(Into::into),
            value3: value3.map(Into::into),
        }
    }

    /// Sets `value1`.
    #[must_use]
    pub fn value1(mut self, value: impl Into<Ingredient>) -> Self {
        self.value1 = Some(value.into());
        self
    }

    /// Sets `value2`.
    #[must_use]
    pub fn value2(mut self, value: impl Into<Ingredient>) -> Self {
        self.value2 = Some(value.into());
        self
    }

    /// Sets `value3`.
    #[must_use]
    pub fn value3(mut self, value: impl Into<Ingredient>) -> Self {
        self.value3 = Some(value.into());
        self
    }

    /// Returns the values in positional order.
    #[must_use]
    pub const fn values(&self) -> [Option<&Ingredient>; 3] {
        [
            self.value1.as_ref(),
            self.value2.as_ref(),
            self.value3.as_ref(),
        ]
    }

    /// Number of values present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values().iter().filter(|v| v.is_some()).count()
    }

    /// Returns true if no value is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
