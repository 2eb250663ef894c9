use strum::{EnumIter, IntoStaticStr};

/// Fixed UI text. The string form of each variant is its catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
pub enum Label {
    WindowTitle,
    DeviceType,
    LoadButton,
    Language,
    #[strum(serialize = "ID")]
    Id,
    Designation,
    Name,
    Description,
    Properties,
    Property,
    Value,
    Devices,
    ErrorLoadingDevices,
    ErrorLoadingData,
    SelectDeviceType,
    SelectDevice,
    Loading,
    Help,
    Quit,
    HelpMoveSelection,
    HelpJumpRows,
    HelpSwitchPanel,
    HelpClearDevice,
    HelpReloadTypes,
}

impl Label {
    /// Catalog key of this label.
    pub fn key(self) -> &'static str {
        self.into()
    }
}
