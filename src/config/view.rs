use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::PanelConfig;
use crate::error::{DashboardError, Result};

/// Slot ids a panel view actually renders.
///
/// A panel's [`PanelConfig::slots`] say what it wants to write into; the
/// view says what exists. Slots missing from the view are resolved as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDefinition {
    pub slots: Vec<String>,
}

impl ViewDefinition {
    /// Built-in view: provides every slot the panel declares.
    pub fn builtin(panel: &PanelConfig) -> Self {
        Self {
            slots: panel.slots.iter().map(|s| s.id.clone()).collect(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DashboardError::ViewLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| DashboardError::ViewLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn slot_set(&self) -> HashSet<&str> {
        self.slots.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;

    #[test]
    fn test_builtin_view_provides_all_declared_slots() {
        let config = DashboardConfig::default();
        let panel = config.panel("electrical").unwrap();
        let view = ViewDefinition::builtin(panel);
        let provided = view.slot_set();
        assert!(panel.slots.iter().all(|s| provided.contains(s.id.as_str())));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hydraulic.yml");
        fs::write(&path, "slots: [kpi-head, rows]\n").unwrap();

        let view = ViewDefinition::from_file(&path).unwrap();
        assert!(view.slot_set().contains("rows"));
        assert!(!view.slot_set().contains("liveChart"));
        assert_eq!(view.slot_set().len(), 2);
    }

    #[test]
    fn test_missing_file_is_view_load_error() {
        let err = ViewDefinition::from_file(Path::new("/nonexistent/view.yml")).unwrap_err();
        assert!(matches!(err, DashboardError::ViewLoad { .. }));
    }
}
