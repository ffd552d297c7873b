//! Static menu tree.
//!
//! Three flat menus with fixed items. Every selectable position maps to a
//! display window (which items are visible and which row carries the
//! cursor); action positions are entered only through Enter and have no
//! window of their own.

pub mod navigator;

pub use navigator::{Advance, Navigator};

/// Which item list is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Submenu {
    Main,
    Settings,
    Measurement,
}

impl Submenu {
    /// First selectable position (Up clamps here).
    pub const fn first(self) -> MenuPosition {
        match self {
            Submenu::Main => MenuPosition::Settings,
            Submenu::Settings => MenuPosition::CfgHelices,
            Submenu::Measurement => MenuPosition::Start,
        }
    }

    /// Last selectable position (Down clamps here).
    pub const fn last(self) -> MenuPosition {
        match self {
            Submenu::Main => MenuPosition::LastResults,
            Submenu::Settings => MenuPosition::SettingsBack,
            Submenu::Measurement => MenuPosition::MeasurementBack,
        }
    }

    /// Item texts as shown on the LCD.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Submenu::Main => &MAIN_LABELS,
            Submenu::Settings => &SETTINGS_LABELS,
            Submenu::Measurement => &MEASUREMENT_LABELS,
        }
    }
}

const MAIN_LABELS: [&str; 3] = ["Ajustes", "Medicion", "Ult. Medidas"];
const SETTINGS_LABELS: [&str; 6] = [
    "Cfg. Helices",
    "Cfg. Periodo",
    "Ref. Lugar",
    "Cfg. Date",
    "Buzzer",
    "Atras",
];
const MEASUREMENT_LABELS: [&str; 2] = ["Inicio", "Atras"];

/// Current menu position. Declaration order is context order: Down moves
/// to the next variant, Up to the previous one, within the submenu bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuPosition {
    // Main
    Settings,
    Measurement,
    LastResults,
    // Settings submenu
    CfgHelices,
    CfgPeriod,
    RefPlace,
    CfgDate,
    Buzzer,
    SettingsBack,
    // Measurement submenu
    Start,
    MeasurementBack,
    // Actions (modal editors)
    MeasurementRunning,
    EditingDateTime,
    EditingPeriod,
}

impl MenuPosition {
    pub const ALL: [MenuPosition; 14] = [
        MenuPosition::Settings,
        MenuPosition::Measurement,
        MenuPosition::LastResults,
        MenuPosition::CfgHelices,
        MenuPosition::CfgPeriod,
        MenuPosition::RefPlace,
        MenuPosition::CfgDate,
        MenuPosition::Buzzer,
        MenuPosition::SettingsBack,
        MenuPosition::Start,
        MenuPosition::MeasurementBack,
        MenuPosition::MeasurementRunning,
        MenuPosition::EditingDateTime,
        MenuPosition::EditingPeriod,
    ];

    pub(crate) fn next(self) -> Option<Self> {
        Self::ALL.get(self as usize + 1).copied()
    }

    pub(crate) fn prev(self) -> Option<Self> {
        (self as usize)
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Display window for this position; `None` for action positions.
    pub fn window(self) -> Option<&'static Window> {
        WINDOWS[self as usize].as_ref()
    }

    /// True for positions that hand control to a modal editor.
    pub fn is_action(self) -> bool {
        self.window().is_none()
    }

    /// Menu item whose Enter leads to this action position.
    pub fn origin(self) -> Option<MenuPosition> {
        match self {
            MenuPosition::MeasurementRunning => Some(MenuPosition::Start),
            MenuPosition::EditingDateTime => Some(MenuPosition::CfgDate),
            MenuPosition::EditingPeriod => Some(MenuPosition::CfgPeriod),
            _ => None,
        }
    }
}

/// Visible slice of a submenu for one selected position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub submenu: Submenu,
    /// Index of the first visible item.
    pub start: u8,
    /// Number of visible items (at most the row count).
    pub count: u8,
    /// Row that carries the `>` marker.
    pub cursor_row: u8,
}

const fn window(submenu: Submenu, start: u8, count: u8, cursor_row: u8) -> Option<Window> {
    Some(Window {
        submenu,
        start,
        count,
        cursor_row,
    })
}

/// Indexed by `MenuPosition as usize`.
static WINDOWS: [Option<Window>; 14] = [
    window(Submenu::Main, 0, 2, 0),        // Settings
    window(Submenu::Main, 0, 2, 1),        // Measurement
    window(Submenu::Main, 2, 1, 0),        // LastResults
    window(Submenu::Settings, 0, 2, 0),    // CfgHelices
    window(Submenu::Settings, 0, 2, 1),    // CfgPeriod
    window(Submenu::Settings, 2, 2, 0),    // RefPlace
    window(Submenu::Settings, 2, 2, 1),    // CfgDate
    window(Submenu::Settings, 4, 2, 0),    // Buzzer
    window(Submenu::Settings, 4, 2, 1),    // SettingsBack
    window(Submenu::Measurement, 0, 2, 0), // Start
    window(Submenu::Measurement, 0, 2, 1), // MeasurementBack
    None,                                  // MeasurementRunning
    None,                                  // EditingDateTime
    None,                                  // EditingPeriod
];
