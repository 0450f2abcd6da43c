use std::fmt;

use thiserror::Error;

/// An operation a plugin may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Generate,
    Deploy,
    Invoke,
    Build,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Generate => "generate",
            Operation::Deploy => "deploy",
            Operation::Invoke => "invoke",
            Operation::Build => "build",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum PluginError {
    /// The plugin does not implement the requested operation.
    #[error("plugin '{plugin}' does not support {operation}")]
    Unsupported { plugin: String, operation: Operation },

    #[error("no {role} plugin registered for '{name}'")]
    NotFound { role: &'static str, name: String },
}

impl PluginError {
    pub fn unsupported(plugin: impl Into<String>, operation: Operation) -> Self {
        PluginError::Unsupported {
            plugin: plugin.into(),
            operation,
        }
    }

    pub fn not_found(role: &'static str, name: impl Into<String>) -> Self {
        PluginError::NotFound {
            role,
            name: name.into(),
        }
    }
}

/// Whether a plugin failure means the operation is not implemented.
pub fn is_unsupported(err: &eyre::Report) -> bool {
    matches!(
        err.downcast_ref::<PluginError>(),
        Some(PluginError::Unsupported { .. })
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message() {
        let err = PluginError::unsupported("aliyun", Operation::Build);
        assert_eq!(err.to_string(), "plugin 'aliyun' does not support build");
    }

    #[test]
    fn test_is_unsupported_through_report() {
        let report = eyre::Report::new(PluginError::unsupported("knative", Operation::Invoke));
        assert!(is_unsupported(&report));

        let other = eyre::Report::new(PluginError::not_found("provider", "aws"));
        assert!(!is_unsupported(&other));
        assert!(!is_unsupported(&eyre::eyre!("deploy failed")));
    }
}
