//! Tag categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three fixed tag categories
///
/// Declaration order is display order: scope, tools, focus.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Domain or area of work (Frontend, Backend, ...)
    Scope,
    /// Technologies, frameworks and platforms; the fallback for unknown tags
    #[default]
    Tools,
    /// Type of work or solution delivered
    Focus,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Self; 3] = [Self::Scope, Self::Tools, Self::Focus];

    /// Sort priority: scope 0, tools 1, focus 2
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Scope => 0,
            Self::Tools => 1,
            Self::Focus => 2,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scope => "scope",
            Self::Tools => "tools",
            Self::Focus => "focus",
        }
    }

    /// Heading used by filter UIs
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scope => "Scope",
            Self::Tools => "Tools",
            Self::Focus => "Focus",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scope" => Ok(Self::Scope),
            "tools" | "tool" => Ok(Self::Tools),
            "focus" => Ok(Self::Focus),
            other => Err(format!("Unknown tag category: {other}")),
        }
    }
}
