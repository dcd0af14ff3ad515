use uuid::Uuid;

use super::gate::RequestKind;
use super::settings::SettingsField;

/// User input and timer callbacks. Card and entry indices refer to the
/// current lists; an index that no longer exists is ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    RequestBookList,
    AddBook(usize),
    RequestOverview(usize),
    /// The page was scrolled to its end.
    LoadMore,
    ToggleRun,
    ToggleEntry { index: usize, checked: bool },
    SetAllEntries(bool),
    OpenSidebar,
    CloseSidebar,
    OpenSettings,
    CloseSettings,
    EditSettings(SettingsField, String),
    SaveSettings,
    CloseOverview,
    DismissToast(Uuid),
    ToggleTheme,
    ReleaseGate { kind: RequestKind, until_ms: f64 },
    ExpireToast(Uuid),
    HideSavedMessage(u64),
}
