// ── Built-in resource bundle ──
//
// UI chrome for both languages plus the device-name translations shipped
// with the application. Deployments extend or override these with TOML
// bundles (see `LocalizationCatalog::from_toml_str`).

pub(crate) const EN: &[(&str, &str)] = &[
    ("WindowTitle", "Reference Information System"),
    ("DeviceType", "Device type"),
    ("LoadButton", "Load"),
    ("Language", "Language: English"),
    ("ID", "ID"),
    ("Designation", "Designation"),
    ("Name", "Name"),
    ("Description", "Description"),
    ("Properties", "Properties"),
    ("Property", "Property"),
    ("Value", "Value"),
    ("Devices", "Devices"),
    ("ErrorLoadingDevices", "Error loading device types"),
    ("ErrorLoadingData", "Error loading data"),
    ("SelectDeviceType", "Please select a device type."),
    ("SelectDevice", "Please select a device."),
    ("Loading", "Loading…"),
    ("Help", "help"),
    ("Quit", "quit"),
    ("HelpMoveSelection", "move selection"),
    ("HelpJumpRows", "first / last row"),
    ("HelpSwitchPanel", "next / previous panel"),
    ("HelpClearDevice", "clear device selection"),
    ("HelpReloadTypes", "reload device types"),
];

pub(crate) const RU: &[(&str, &str)] = &[
    ("WindowTitle", "Справочная информационная система"),
    ("DeviceType", "Тип устройства"),
    ("LoadButton", "Загрузить"),
    ("Language", "Язык: Русский"),
    ("ID", "ИД"),
    ("Designation", "Обозначение"),
    ("Name", "Наименование"),
    ("Description", "Описание"),
    ("Properties", "Свойства"),
    ("Property", "Свойство"),
    ("Value", "Значение"),
    ("Devices", "Устройства"),
    ("ErrorLoadingDevices", "Ошибка загрузки типов устройств"),
    ("ErrorLoadingData", "Ошибка загрузки данных"),
    ("SelectDeviceType", "Выберите тип устройства."),
    ("SelectDevice", "Выберите устройство."),
    ("Loading", "Загрузка…"),
    ("Help", "справка"),
    ("Quit", "выход"),
    ("HelpMoveSelection", "перемещение по списку"),
    ("HelpJumpRows", "первая / последняя строка"),
    ("HelpSwitchPanel", "следующая / предыдущая панель"),
    ("HelpClearDevice", "сбросить выбор устройства"),
    ("HelpReloadTypes", "обновить типы устройств"),
    // Device names
    ("TempSensor01", "Датчик температуры"),
    ("PressureSensor01", "Датчик давления"),
    ("HumiditySensor01", "Датчик влажности"),
    ("BallValve01", "Шаровой кран"),
    ("GateValve01", "Задвижка"),
    ("FlowMeter01", "Расходомер"),
];
