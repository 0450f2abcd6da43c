use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::BlockKind;

/// Result type for faasit-spec operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename of an IR document, reducing
/// parameter passing in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        self.parse_error(source.message(), span)
    }

    /// Create a parse error from a JSON error.
    ///
    /// serde_json reports 1-based line/column pairs; they are converted into a
    /// byte offset so the report can point into the source.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        self.parse_error(source.to_string(), span)
    }

    /// Create a parse error with an optional span.
    pub fn parse_error(&self, message: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

/// Convert a 1-based line/column position into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let col = column.saturating_sub(1).min(text.len());
            return Some(offset + col);
        }
        offset += text.len();
    }
    Some(src.len())
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the IR document with --ir <path>"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse IR document: {message}")]
    #[diagnostic(code(faasit::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("no @application block")]
    #[diagnostic(
        code(faasit::missing_application),
        help("declare exactly one `application` block in the entry package")
    )]
    MissingApplication,

    #[error("found {count} @application blocks: {names}")]
    #[diagnostic(
        code(faasit::ambiguous_application),
        help("keep a single `application` block in the entry package")
    )]
    AmbiguousApplication { count: usize, names: String },

    #[error("invalid value at '{path}': expected {expected}, found {actual}")]
    #[diagnostic(code(faasit::schema_violation))]
    SchemaViolation {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("unknown field '{field}' at '{path}'")]
    #[diagnostic(
        code(faasit::unknown_field),
        help("this block kind does not accept fields outside its schema")
    )]
    UnknownField { path: String, field: String },

    #[error("no {kind} block named '{name}'")]
    #[diagnostic(
        code(faasit::dangling_reference),
        help("declare a `{kind}` block named '{name}' or fix the reference")
    )]
    DanglingReference { kind: BlockKind, name: String },

    #[error("block '{name}' is a {actual}, expected a {expected}")]
    #[diagnostic(code(faasit::kind_mismatch))]
    KindMismatch {
        name: String,
        expected: BlockKind,
        actual: String,
    },
}

impl Error {
    /// Create a missing application error
    pub fn missing_application() -> Box<Self> {
        Box::new(Error::MissingApplication)
    }

    /// Create an ambiguous application error from the names of all candidates
    pub fn ambiguous_application<S: AsRef<str>>(names: &[S]) -> Box<Self> {
        Box::new(Error::AmbiguousApplication {
            count: names.len(),
            names: names
                .iter()
                .map(|n| format!("'{}'", n.as_ref()))
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    /// Create a schema violation
    pub fn violation(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::SchemaViolation {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        })
    }

    /// Create an unknown field error
    pub fn unknown_field(path: impl Into<String>, field: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnknownField {
            path: path.into(),
            field: field.into(),
        })
    }

    /// Create a dangling reference error
    pub fn dangling(kind: BlockKind, name: impl Into<String>) -> Box<Self> {
        Box::new(Error::DanglingReference {
            kind,
            name: name.into(),
        })
    }

    /// Create a kind mismatch error
    pub fn kind_mismatch(
        name: impl Into<String>,
        expected: BlockKind,
        actual: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::KindMismatch {
            name: name.into(),
            expected,
            actual: actual.into(),
        })
    }

    /// The offending field path, for schema violations and unknown fields.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::SchemaViolation { path, .. } | Error::UnknownField { path, .. } => Some(path),
            _ => None,
        }
    }
}
