use serde::{Deserialize, Serialize};

/// `public`, `private`, `protected`, `internal` (package-private / module-private).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Protected,
    Internal,
}

impl Visibility {
    /// Kotlin and TypeScript default absent modifiers to `public`.
    pub fn default_kotlin_or_ts() -> Self {
        Visibility::Public
    }

    /// Java top-level declarations without a visibility modifier default to
    /// package-private, modeled here as `Internal`.
    pub fn default_java() -> Self {
        Visibility::Internal
    }
}
