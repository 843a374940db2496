//! The set of function names a rule instance qualifies.

use std::borrow::Cow;

use rustc_hash::FxHashSet;

use crate::FunctionInvocationConfig;

/// Functions the opcache compiles to dedicated opcodes, or resolves at
/// compile time, when they are called by their fully qualified name.
///
/// `in_array` only benefits when its strict flag is the literal `true`; the
/// scanner enforces that separately.
pub const OPCACHE_FUNCTIONS: [&str; 38] = [
    "array_slice",
    "assert",
    "boolval",
    "call_user_func",
    "call_user_func_array",
    "chr",
    "count",
    "defined",
    "doubleval",
    "floatval",
    "func_get_args",
    "func_num_args",
    "get_called_class",
    "get_class",
    "gettype",
    "in_array",
    "intval",
    "is_array",
    "is_bool",
    "is_double",
    "is_float",
    "is_int",
    "is_integer",
    "is_long",
    "is_null",
    "is_object",
    "is_real",
    "is_resource",
    "is_string",
    "ord",
    "strlen",
    "strval",
    "function_exists",
    "is_callable",
    "extension_loaded",
    "dirname",
    "constant",
    "define",
];

/// Lowercased function names to qualify.
///
/// Built once per configured rule as `source − exclude`, where `source` is
/// either the caller's list of builtin functions or [`OPCACHE_FUNCTIONS`].
/// Exclusion always wins and unknown excluded names are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetCatalog {
    names: FxHashSet<String>,
}

impl TargetCatalog {
    /// Build the catalog for `config`.
    ///
    /// `builtins` is every globally defined internal function name known to
    /// the host. It is ignored in opcache-only mode.
    pub fn build<I, S>(config: &FunctionInvocationConfig, builtins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: FxHashSet<String> = if config.opcache_only() {
            OPCACHE_FUNCTIONS.iter().map(|name| name.to_ascii_lowercase()).collect()
        } else {
            builtins
                .into_iter()
                .map(|name| name.as_ref().to_ascii_lowercase())
                .collect()
        };

        for excluded in config.exclude() {
            names.remove(excluded.to_ascii_lowercase().as_str());
        }

        TargetCatalog { names }
    }

    /// Whether `name` is a target, ignoring ASCII case.
    pub fn contains(&self, name: &str) -> bool {
        let name = if name.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(name.to_ascii_lowercase())
        } else {
            Cow::Borrowed(name)
        };
        self.names.contains(&*name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All target names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
