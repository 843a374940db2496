//! `native_function_invocation`: prefix calls to internal functions with `\`.
//!
//! Inside a namespace, PHP resolves an unqualified `strlen()` by first looking
//! for `Current\Namespace\strlen` and only then falling back to the global
//! function. A leading `\` skips the lookup and lets the opcache replace
//! several functions with specialised opcodes.

use backslash_ir::{TokenKind, TokenStream};

use crate::fixer::{CodeSample, Fixer, OptionDescriptor, RuleDefinition};
use crate::{rewriter, scanner, ConfigError, FunctionInvocationConfig, TargetCatalog};

static DEFINITION: RuleDefinition = RuleDefinition {
    name: "native_function_invocation",
    summary: "Add leading `\\` before function invocation to speed up resolving.",
    description: None,
    risky_description: Some("Risky when any of the functions are overridden."),
    options: &[
        OptionDescriptor {
            name: "exclude",
            description: "List of functions to ignore.",
            default: "[]",
        },
        OptionDescriptor {
            name: "opcache-only",
            description: "Only fix function calls that are made to functions that are \
                          optimized by the opcache.",
            default: "false",
        },
    ],
    samples: &[
        CodeSample {
            source: "<?php\n\nfunction baz($options)\n{\n    if (!array_key_exists(\"foo\", $options)) {\n        throw new \\InvalidArgumentException();\n    }\n\n    return json_encode($options);\n}\n",
            config: None,
        },
        CodeSample {
            source: "<?php\n\nfunction baz($options)\n{\n    if (!array_key_exists(\"foo\", $options)) {\n        throw new \\InvalidArgumentException();\n    }\n\n    return json_encode($options);\n}\n",
            config: Some(r#"{"exclude": ["json_encode"]}"#),
        },
        CodeSample {
            source: "<?php\n\nfunction baz($options)\n{\n    if (is_array($options) && in_array(\"foo\", $options, true)) {\n        return count($options);\n    }\n\n    return json_encode($options);\n}\n",
            config: Some(r#"{"opcache-only": true}"#),
        },
    ],
};

/// Qualifies unqualified calls to internal functions with the root namespace.
///
/// The rewrite is risky: it assumes no targeted function is redefined in the
/// namespace of the call site.
#[derive(Clone, Debug)]
pub struct NativeFunctionInvocation {
    config: FunctionInvocationConfig,
    catalog: TargetCatalog,
}

impl NativeFunctionInvocation {
    /// Validate `config` and build the target catalog.
    ///
    /// `builtins` lists every internal function of the PHP runtime the host
    /// targets. It is not consulted in opcache-only mode.
    pub fn configure<I, S>(config: FunctionInvocationConfig, builtins: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        let catalog = TargetCatalog::build(&config, builtins);
        tracing::debug!(
            targets = catalog.len(),
            excluded = config.exclude().len(),
            opcache_only = config.opcache_only(),
            "target catalog built"
        );
        Ok(NativeFunctionInvocation { config, catalog })
    }

    pub fn config(&self) -> &FunctionInvocationConfig {
        &self.config
    }

    pub fn catalog(&self) -> &TargetCatalog {
        &self.catalog
    }

    /// Indices `fix` would insert a separator before, without mutating.
    pub fn call_sites(&self, tokens: &dyn TokenStream) -> Vec<usize> {
        scanner::scan(tokens, &self.catalog, &self.config)
    }
}

impl Fixer for NativeFunctionInvocation {
    fn definition(&self) -> &'static RuleDefinition {
        &DEFINITION
    }

    fn is_candidate(&self, tokens: &dyn TokenStream) -> bool {
        tokens.has_any_kind(&[TokenKind::Identifier])
    }

    #[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
    fn fix(&self, tokens: &mut dyn TokenStream) {
        if !self.is_candidate(&*tokens) {
            return;
        }

        // All indices refer to the stream as it is now; nothing is inserted
        // until the scan is complete.
        let call_sites = self.call_sites(&*tokens);
        rewriter::apply(tokens, &call_sites);
        tracing::debug!(qualified = call_sites.len(), "native function calls qualified");
    }
}

#[cfg(test)]
mod tests;
