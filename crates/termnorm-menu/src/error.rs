//! Error types for candidate extraction.
//!
//! Both kinds are detected before any line of command output is read: the
//! pattern is compiled and the templates are checked against its groups up
//! front, so a failure always aborts the whole call.

use thiserror::Error;

/// Errors in a value or label template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template text could not be parsed.
    #[error("malformed template {template:?}: {reason}")]
    Syntax {
        /// Offending template text
        template: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// The template references a group the pattern does not define.
    #[error("template references unknown group {name:?}")]
    UnknownField {
        /// Referenced name, without the leading `.`
        name: String,
    },
}

/// Errors returned by [`crate::extract`] and [`crate::Extractor::new`].
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The filter is not a valid regular expression.
    #[error("invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A template is malformed or references a missing group.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl ExtractError {
    /// Returns true if the filter pattern was at fault.
    pub fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern(_))
    }
}
