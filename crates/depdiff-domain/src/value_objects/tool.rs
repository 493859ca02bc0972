use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Static-analysis tool whose output can be reconciled
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// ENRE entity relation extractor
    Enre,
    /// SciTools Understand
    Understand,
    /// Sourcetrail source explorer
    Sourcetrail,
    /// Depends dependency extractor
    Depends,
    /// Code2Graph
    Code2Graph,
}

impl ToolKind {
    /// Every known tool
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Enre,
        ToolKind::Understand,
        ToolKind::Sourcetrail,
        ToolKind::Depends,
        ToolKind::Code2Graph,
    ];

    /// Dataset tag written into records produced by this tool
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enre => "enre",
            Self::Understand => "understand",
            Self::Sourcetrail => "sourcetrail",
            Self::Depends => "depends",
            Self::Code2Graph => "code2graph",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == wanted)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "Unknown tool '{s}'. Use one of: enre, understand, sourcetrail, depends, code2graph"
                ))
            })
    }
}
