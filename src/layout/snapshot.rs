use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::layout::{Placement, VisualKind};

/// Serializable arrangement of a visual tree after one pass.
///
/// Snapshots are the target keyframes handed to animation: interpolating
/// between two snapshots of the same tree is left to the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualSnapshot {
    pub kind: VisualKind,
    pub placement: Option<Placement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<VisualSnapshot>,
}

impl VisualSnapshot {
    #[must_use]
    pub fn leaf(kind: VisualKind, placement: Option<Placement>) -> Self {
        Self {
            kind,
            placement,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn container(
        kind: VisualKind,
        placement: Option<Placement>,
        children: Vec<VisualSnapshot>,
    ) -> Self {
        Self {
            kind,
            placement,
            children,
        }
    }

    /// Depth-first placements of every node, `None` where unarranged.
    #[must_use]
    pub fn flatten(&self) -> Vec<(VisualKind, Option<Placement>)> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<(VisualKind, Option<Placement>)>) {
        out.push((self.kind, self.placement));
        for child in &self.children {
            child.flatten_into(out);
        }
    }

    /// Whether every node in the tree has been arranged.
    #[must_use]
    pub fn is_fully_arranged(&self) -> bool {
        self.placement.is_some() && self.children.iter().all(Self::is_fully_arranged)
    }

    pub fn to_json_pretty(&self) -> LayoutResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Serialization(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json(json: &str) -> LayoutResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| LayoutError::Serialization(format!("failed to parse snapshot: {e}")))
    }
}
