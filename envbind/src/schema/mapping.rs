//! Per-field key mapping declarations.

/// Key value that means "never look this field up".
pub const SKIP_MARKER: &str = "-";

/// How a field maps onto an environment key.
///
/// The derive macro resolves the attribute syntax into one of these variants
/// once, at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mapping {
    /// Look the field up under its own name.
    #[default]
    Unspecified,
    /// Look the field up under this key; [`SKIP_MARKER`] skips the field.
    Literal(&'static str),
    /// Never look the field up.
    Skipped,
    /// Record form: an optional key override and an optional parser.
    Keyed {
        /// Key override; `None` falls back to the field name and
        /// [`SKIP_MARKER`] skips the field.
        key: Option<&'static str>,
        /// Parser declared for the field.
        parser: Option<ParserRef>,
    },
}

impl Mapping {
    /// Parser declared by a [`Mapping::Keyed`] mapping.
    #[must_use]
    pub const fn parser(&self) -> Option<&ParserRef> {
        match self {
            Self::Keyed {
                parser: Some(parser),
                ..
            } => Some(parser),
            _ => None,
        }
    }
}

/// Record of the parser bound to a field.
///
/// The callable itself lives in the generated populate body; the schema only
/// keeps what is needed to describe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserRef {
    /// Source text of the parser expression.
    pub name: &'static str,
    /// Whether the parser replaces or extends built-in parsing.
    pub kind: ParserKind,
}

impl ParserRef {
    /// Describes a parser that fully replaces built-in parsing.
    #[must_use]
    pub const fn custom(name: &'static str) -> Self {
        Self {
            name,
            kind: ParserKind::Custom,
        }
    }

    /// Describes a validator that runs after built-in parsing.
    #[must_use]
    pub const fn validator(name: &'static str) -> Self {
        Self {
            name,
            kind: ParserKind::Validator,
        }
    }
}

/// Flavour of a declared parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserKind {
    /// Replaces built-in parsing entirely.
    Custom,
    /// Applies a check to the built-in parse result.
    Validator,
}
