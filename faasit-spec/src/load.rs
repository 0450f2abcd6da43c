//! Loading IR documents from files and strings.

use std::path::{Path, PathBuf};

use faasit_ir::Spec;
use tracing::debug;

use crate::{Error, Result, SourceContext};

/// The serialization of an IR document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrFormat {
    Json,
    Toml,
}

impl IrFormat {
    /// Pick the format from a file extension: `.toml` is TOML, anything else JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => IrFormat::Toml,
            _ => IrFormat::Json,
        }
    }
}

/// Parse an IR document with the given filename for error reporting.
pub fn parse_str(content: &str, filename: &str, format: IrFormat) -> Result<Spec> {
    let source_ctx = SourceContext::new(content, filename);
    let spec: Spec = match format {
        IrFormat::Json => serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?,
        IrFormat::Toml => toml::from_str(content).map_err(|e| source_ctx.toml_error(e))?,
    };
    debug!(
        filename,
        packages = spec.packages.len(),
        blocks = spec.blocks().count(),
        "parsed IR document"
    );
    Ok(spec)
}

/// An IR document on disk with both raw content and the parsed document.
#[derive(Debug)]
pub struct IrFile {
    path: PathBuf,
    content: String,
    spec: Spec,
}

impl IrFile {
    /// Open and parse an IR file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let spec = parse_str(&content, &filename, IrFormat::from_path(&path))?;

        Ok(Self {
            path,
            content,
            spec,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed document.
    pub fn spec(&self) -> &Spec {
        &self.spec
    }
}
