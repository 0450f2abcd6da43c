//! Block kind discriminators.

use std::{fmt, str::FromStr};

/// The block kinds understood by the schema registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockKind {
    Application,
    Function,
    Workflow,
    Provider,
    Event,
    Secret,
    Trigger,
}

impl BlockKind {
    /// Every known kind, in registry order.
    pub const ALL: [BlockKind; 7] = [
        BlockKind::Application,
        BlockKind::Function,
        BlockKind::Workflow,
        BlockKind::Provider,
        BlockKind::Event,
        BlockKind::Secret,
        BlockKind::Trigger,
    ];

    /// The discriminator string used in the IR.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Application => "application",
            BlockKind::Function => "function",
            BlockKind::Workflow => "workflow",
            BlockKind::Provider => "provider",
            BlockKind::Event => "event",
            BlockKind::Secret => "secret",
            BlockKind::Trigger => "trigger",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown block kind '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_kinds() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.as_str().parse::<BlockKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind() {
        assert!("route".parse::<BlockKind>().is_err());
        assert!("Application".parse::<BlockKind>().is_err());
    }
}
