//! Text pattern primitives for the resolution registries.
//!
//! All registry rules are expressed through [`TextPattern`], an opaque
//! wrapper over `regex::Regex`. The regex engine runs in time linear in the
//! input length for every pattern shape, so matching stays bounded even on
//! very large or adversarial prompts.

use regex::Regex;

use crate::error::Result;

/// A compiled text pattern exposing match and capture operations.
#[derive(Debug, Clone)]
pub struct TextPattern {
    regex: Regex,
}

impl TextPattern {
    /// Compile a pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Test whether the pattern matches anywhere in `input`.
    pub fn matches(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// Extract the first capture group of the first match, if any.
    pub fn capture<'t>(&self, input: &'t str) -> Option<&'t str> {
        self.regex
            .captures(input)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// The source text the pattern was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// A single classification rule: pattern, confidence, human-readable label.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// The pattern to test against the prompt.
    pub pattern: TextPattern,
    /// Confidence assigned when this rule matches, in `[0, 1]`.
    pub confidence: f64,
    /// Short description used in resolution reasons.
    pub description: &'static str,
}

impl PatternRule {
    /// Build a rule from a pattern literal.
    ///
    /// Registry literals are part of the source; a failure to compile is a
    /// programming error surfaced by the registry tests, so this unwraps.
    pub fn new(pattern: &str, confidence: f64, description: &'static str) -> Self {
        Self {
            pattern: TextPattern::new(pattern).unwrap(),
            confidence,
            description,
        }
    }
}

/// An ordered group of rules targeting one agent.
///
/// A `Vec<CategoryCheck>` in declared order defines cross-category
/// priority: the first category with any matching rule wins.
#[derive(Debug, Clone)]
pub struct CategoryCheck {
    /// Agent id this category resolves to.
    pub handler: &'static str,
    /// Category label used in resolution reasons.
    pub label: &'static str,
    /// Rules tested in declared order; first match wins.
    pub rules: Vec<PatternRule>,
}

/// A file-path inference rule.
#[derive(Debug, Clone)]
pub struct ContextRule {
    /// Pattern tested against the file path.
    pub pattern: TextPattern,
    /// Agent id this rule resolves to.
    pub handler: &'static str,
    /// Confidence assigned when this rule matches, in `[0, 1]`.
    pub confidence: f64,
    /// Short description used in resolution reasons.
    pub description: &'static str,
}

impl ContextRule {
    /// Build a context rule from a pattern literal. Unwraps like
    /// [`PatternRule::new`]; covered by the registry tests.
    pub fn new(
        pattern: &str,
        handler: &'static str,
        confidence: f64,
        description: &'static str,
    ) -> Self {
        Self {
            pattern: TextPattern::new(pattern).unwrap(),
            handler,
            confidence,
            description,
        }
    }
}
