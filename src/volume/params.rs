//! Parameter table attached to importable objects.
//!
//! Loaders read optional settings from the target through this table (for
//! example the byte offset into a raw volume file), and the post-import
//! catalog lists the parameters that were applied.

use std::collections::HashMap;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Integer parameter
    Int(i64),
    /// Floating-point parameter
    Float(f64),
    /// String parameter
    String(String),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::String(v) => write!(f, "{}", v),
        }
    }
}

/// Named parameters of an importable object.
#[derive(Debug, Clone, Default)]
pub struct ParamSet {
    values: HashMap<String, ParamValue>,
}

impl ParamSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an integer parameter.
    pub fn set_int(&mut self, name: impl Into<String>, value: i64) {
        self.values.insert(name.into(), ParamValue::Int(value));
    }

    /// Set a floating-point parameter.
    pub fn set_float(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), ParamValue::Float(value));
    }

    /// Set a string parameter.
    pub fn set_string(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(name.into(), ParamValue::String(value.into()));
    }

    /// Look up an integer parameter, falling back to `default` when the name
    /// is absent or bound to a non-integer value.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        match self.values.get(name) {
            Some(ParamValue::Int(v)) => *v,
            _ => default,
        }
    }

    /// Look up a string parameter.
    pub fn get_string(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ParamValue::String(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Number of parameters set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All parameters, sorted by name for stable listing.
    pub fn entries(&self) -> Vec<(&str, &ParamValue)> {
        let mut entries: Vec<_> = self
            .values
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        entries.sort_by_key(|(k, _)| *k);
        entries
    }
}
