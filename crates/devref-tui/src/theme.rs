//! Palette and semantic styles.

use devref_core::PropertyValue;
use ratatui::style::{Color, Modifier, Style};

pub const AMBER: Color = Color::Rgb(255, 184, 76); // #ffb84c
pub const TEAL: Color = Color::Rgb(94, 234, 212); // #5eead4
pub const SKY: Color = Color::Rgb(125, 211, 252); // #7dd3fc
pub const LIME: Color = Color::Rgb(190, 242, 100); // #bef264
pub const ROSE: Color = Color::Rgb(251, 113, 133); // #fb7185
pub const FOG: Color = Color::Rgb(203, 213, 225); // #cbd5e1
pub const SLATE: Color = Color::Rgb(100, 116, 139); // #64748b
pub const BG_ROW: Color = Color::Rgb(30, 41, 59); // #1e293b
pub const BG_TOAST: Color = Color::Rgb(15, 23, 42); // #0f172a

pub fn title() -> Style {
    Style::default().fg(TEAL).add_modifier(Modifier::BOLD)
}

pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(AMBER)
    } else {
        Style::default().fg(SLATE)
    }
}

pub fn table_header() -> Style {
    Style::default()
        .fg(TEAL)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn text() -> Style {
    Style::default().fg(FOG)
}

pub fn muted() -> Style {
    Style::default().fg(SLATE).add_modifier(Modifier::ITALIC)
}

pub fn selected() -> Style {
    Style::default()
        .fg(AMBER)
        .bg(BG_ROW)
        .add_modifier(Modifier::BOLD)
}

/// Marks the category whose devices are on screen.
pub fn loaded_marker() -> Style {
    Style::default().fg(LIME)
}

/// Property values are tinted by kind.
pub fn property_value(value: &PropertyValue) -> Style {
    match value {
        PropertyValue::Integer(_) | PropertyValue::Float(_) => Style::default().fg(SKY),
        PropertyValue::Boolean(_) => Style::default().fg(LIME),
        PropertyValue::Text(_) => text(),
        PropertyValue::Null => muted(),
    }
}

pub fn key_hint() -> Style {
    Style::default().fg(SLATE)
}

pub fn key_hint_key() -> Style {
    Style::default().fg(TEAL).add_modifier(Modifier::BOLD)
}

pub fn toast_info() -> Style {
    Style::default().fg(SKY).bg(BG_TOAST)
}

pub fn toast_error() -> Style {
    Style::default().fg(ROSE).bg(BG_TOAST)
}
