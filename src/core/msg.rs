use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::record::UserRecord;

/// Application messages
///
/// Presenters and the key translator only ever emit these; the coordinator
/// is the single place that turns them into store calls and view updates.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Msg {
    // System control
    Quit,
    Suspend,
    Resume,
    Tick,
    Render,
    Resize(u16, u16),

    // Dialog navigation
    OpenList,
    StartCreate,
    StartEdit(String),
    Close,
    TogglePanel,

    // Record mutations
    SubmitEditor(UserRecord),
    DeleteRecord(String),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Tick | Msg::Render)
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::Tick.is_frequent());
        assert!(Msg::Render.is_frequent());
        assert!(!Msg::OpenList.is_frequent());
        assert!(!Msg::DeleteRecord("user_1".to_string()).is_frequent());
    }

    #[test]
    fn test_msg_display() {
        assert_eq!(Msg::OpenList.to_string(), "OpenList");
        assert_eq!(Msg::StartEdit("user_1".to_string()).to_string(), "StartEdit");
    }

    #[test]
    fn test_msg_serialization() -> Result<()> {
        let msg = Msg::SubmitEditor(UserRecord::new("Ana"));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
