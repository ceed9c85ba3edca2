//! Error types for wayfinder.
//!
//! Everything here is a registration-time failure. A path that matches no
//! route is not an error: resolution reports it as `None`.
//!
//! - [`TemplateError`] - Template parsing, compilation and expansion errors
//! - [`BuildError`] - Route and collection construction errors

use thiserror::Error;

/// A boxed error type returned by hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while compiling or expanding a route template.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// A `[` without a matching `]`, or a stray `]`.
    #[error("unbalanced optional bracket at byte {position}")]
    UnbalancedBracket {
        /// Byte offset of the offending bracket.
        position: usize,
    },

    /// A `<` with no closing `>`.
    #[error("unclosed parameter starting at byte {position}")]
    UnclosedParameter {
        /// Byte offset of the opening `<`.
        position: usize,
    },

    /// `<>` or `< pattern>`.
    #[error("empty parameter name at byte {position}")]
    EmptyParameterName {
        /// Byte offset of the opening `<`.
        position: usize,
    },

    /// Parameter names must be identifiers: `[A-Za-z_][A-Za-z0-9_]*`.
    #[error("invalid parameter name `{name}`")]
    InvalidParameterName {
        /// The rejected name.
        name: String,
    },

    /// The same parameter is declared twice in one template.
    #[error("parameter `{name}` declared more than once")]
    DuplicateParameter {
        /// The repeated name.
        name: String,
    },

    /// The compiled expression was rejected by the regex engine.
    #[error("invalid pattern for parameter `{name}`")]
    InvalidPattern {
        /// Parameter whose constraint is at fault, or the template itself.
        name: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// Expansion needs a value for a required parameter.
    #[error("missing value for required parameter `{name}`")]
    MissingParameter {
        /// The parameter without a value.
        name: String,
    },

    /// The expanded path does not satisfy the template's own constraints.
    #[error("expanded path `{path}` does not match its template")]
    ExpansionMismatch {
        /// The rendered path.
        path: String,
    },
}

/// Errors raised while registering routes.
#[derive(Error, Debug)]
pub enum BuildError {
    /// The route template failed to compile.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// A callback was registered for a name the route can never produce.
    #[error("callback registered for unknown parameter `{name}` on route `{template}`")]
    UnknownCallbackParameter {
        /// The callback key.
        name: String,
        /// Template of the offending route.
        template: String,
    },

    /// Two routes share a name.
    #[error("route name `{0}` is already registered")]
    DuplicateName(String),

    /// No route is registered under the given name.
    #[error("no route named `{0}`")]
    UnknownRoute(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_error_display() {
        let err = BuildError::DuplicateName("home".to_string());
        assert_eq!(err.to_string(), "route name `home` is already registered");

        let err = BuildError::from(TemplateError::UnbalancedBracket { position: 3 });
        assert_eq!(
            err.to_string(),
            "template error: unbalanced optional bracket at byte 3"
        );
    }
}
