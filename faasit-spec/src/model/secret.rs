use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{BlockKind, Entity};

/// A named secret value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    pub name: String,
    pub value: String,
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}

impl Entity for Secret {
    const KIND: BlockKind = BlockKind::Secret;
}
