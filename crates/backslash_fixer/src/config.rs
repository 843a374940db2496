//! Options for the native function invocation rule.
//!
//! Configuration arrives either typed, through the builder methods on
//! [`FunctionInvocationConfig`], or raw, as the JSON object a host reads from
//! its config file:
//!
//! ```json
//! { "exclude": ["json_encode"], "opcache-only": true }
//! ```
//!
//! Both paths end in the same validation, so a configured rule never holds
//! an invalid exclude list.

use serde::Deserialize;
use serde_json::Value;

use crate::ConfigError;

/// Validated options of [`NativeFunctionInvocation`](crate::NativeFunctionInvocation).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionInvocationConfig {
    exclude: Vec<String>,
    opcache_only: bool,
}

/// Raw option object. Unknown keys are rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RawConfig {
    exclude: Vec<Value>,
    opcache_only: bool,
}

impl FunctionInvocationConfig {
    pub fn new() -> Self {
        FunctionInvocationConfig::default()
    }

    /// Parse and validate a JSON option object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Validate an already parsed option object.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let exclude = raw
            .exclude
            .into_iter()
            .map(exclude_entry)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FunctionInvocationConfig {
            exclude,
            opcache_only: raw.opcache_only,
        })
    }

    /// Replace the exclude list. Checked by [`validate`](Self::validate).
    #[must_use]
    pub fn with_exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_opcache_only(mut self, opcache_only: bool) -> Self {
        self.opcache_only = opcache_only;
        self
    }

    /// Function names that must never be qualified, in configured order.
    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    /// Restrict targets to functions the opcache compiles specially.
    pub fn opcache_only(&self) -> bool {
        self.opcache_only
    }

    /// Check every exclude entry is non-empty and trimmed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in &self.exclude {
            if !is_valid_name(name) {
                return Err(invalid_entry(&Value::String(name.clone())));
            }
        }
        Ok(())
    }
}

fn exclude_entry(value: Value) -> Result<String, ConfigError> {
    match value {
        Value::String(name) if is_valid_name(&name) => Ok(name),
        other => Err(invalid_entry(&other)),
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.trim() == name
}

fn invalid_entry(value: &Value) -> ConfigError {
    ConfigError::InvalidExcludeEntry {
        value: value.to_string(),
        kind: php_type_name(value),
    }
}

/// Type name as PHP's `gettype` would report it.
fn php_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
