//! The contract every rewriting rule implements.
//!
//! A host tool tokenizes each file once, asks each rule whether the file is
//! worth looking at, and lets it rewrite the stream in place. Rules carry a
//! static [`RuleDefinition`] for documentation and to flag risky rewrites.

use backslash_ir::TokenStream;

/// A configured, stateless token stream rewrite.
///
/// Implementations hold only immutable configuration, so one instance can
/// fix any number of streams, from any number of threads.
pub trait Fixer: Send + Sync {
    /// Name, documentation and option descriptions.
    fn definition(&self) -> &'static RuleDefinition;

    /// Snake-case rule name.
    fn name(&self) -> &'static str {
        self.definition().name
    }

    /// Whether applying the rule can change program behaviour.
    fn is_risky(&self) -> bool {
        self.definition().risky_description.is_some()
    }

    /// Cheap check that `tokens` could contain something to fix.
    ///
    /// `false` means [`fix`](Self::fix) would leave the stream unchanged.
    fn is_candidate(&self, tokens: &dyn TokenStream) -> bool;

    /// Rewrite `tokens` in place.
    fn fix(&self, tokens: &mut dyn TokenStream);
}

/// Static description of a rule.
#[derive(Debug)]
pub struct RuleDefinition {
    pub name: &'static str,
    /// One line.
    pub summary: &'static str,
    pub description: Option<&'static str>,
    /// Set for risky rules: when the rewrite can change behaviour.
    pub risky_description: Option<&'static str>,
    pub options: &'static [OptionDescriptor],
    /// Inputs the rule changes, for generated documentation.
    pub samples: &'static [CodeSample],
}

/// One configuration option of a rule.
#[derive(Debug)]
pub struct OptionDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// Default value, as JSON.
    pub default: &'static str,
}

/// Example input for a rule.
#[derive(Debug)]
pub struct CodeSample {
    pub source: &'static str,
    /// Options as a JSON object; `None` means defaults.
    pub config: Option<&'static str>,
}
