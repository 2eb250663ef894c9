//! The browser screen: device types on the left, the loaded device table
//! top-right, and the selected device's properties below it.
//!
//! Owns the session's [`BrowserState`]; every mutation arrives as an
//! [`Action`] through [`Component::update`].

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState},
};

use devref_core::{BrowserState, FetchKind, Label};

use crate::action::{Action, Notification};
use crate::component::Component;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Categories,
    Devices,
    Properties,
}

impl Panel {
    fn next(self) -> Self {
        match self {
            Self::Categories => Self::Devices,
            Self::Devices => Self::Properties,
            Self::Properties => Self::Categories,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Categories => Self::Properties,
            Self::Devices => Self::Categories,
            Self::Properties => Self::Devices,
        }
    }
}

pub struct BrowserScreen {
    state: BrowserState,
    focus: Panel,
    property_cursor: usize,
    in_flight: usize,
}

impl BrowserScreen {
    pub fn new(state: BrowserState) -> Self {
        Self {
            state,
            focus: Panel::Categories,
            property_cursor: 0,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn focus(&self) -> Panel {
        self.focus
    }

    /// Whether any fetch started from this screen is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    fn finish_fetch(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    fn move_cursor(&self, delta: isize) -> Option<Action> {
        let (current, len) = match self.focus {
            Panel::Categories => (
                self.state.selected_category_index(),
                self.state.categories().len(),
            ),
            Panel::Devices => (
                self.state.selected_device_index(),
                self.state.devices().len(),
            ),
            Panel::Properties => (
                Some(self.property_cursor),
                self.state.selected_properties().len(),
            ),
        };
        if len == 0 {
            return None;
        }
        let target = match current {
            None => 0,
            Some(i) => i.saturating_add_signed(delta).min(len - 1),
        };
        self.cursor_action(target)
    }

    fn jump(&self, to_end: bool) -> Option<Action> {
        let len = match self.focus {
            Panel::Categories => self.state.categories().len(),
            Panel::Devices => self.state.devices().len(),
            Panel::Properties => self.state.selected_properties().len(),
        };
        if len == 0 {
            return None;
        }
        self.cursor_action(if to_end { len - 1 } else { 0 })
    }

    fn cursor_action(&self, index: usize) -> Option<Action> {
        match self.focus {
            Panel::Categories => Some(Action::SelectCategory(index)),
            Panel::Devices => Some(Action::SelectDevice(Some(index))),
            Panel::Properties => Some(Action::ScrollProperties(index)),
        }
    }

    fn activate(&mut self) -> Option<Action> {
        match self.focus {
            Panel::Categories => Some(Action::RequestLoad),
            Panel::Devices => match self.state.require_selected_properties() {
                Ok(_) => {
                    self.focus = Panel::Properties;
                    None
                }
                Err(e) => Some(Action::Notify(Notification::info(
                    self.state.describe_error(&e, FetchKind::Devices),
                ))),
            },
            Panel::Properties => None,
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn panel_block(&self, panel: Panel, label: Label) -> Block<'static> {
        Block::bordered()
            .title(Span::styled(
                format!(" {} ", self.state.label(label)),
                theme::title(),
            ))
            .border_style(theme::border(self.focus == panel))
    }

    fn render_categories(&self, frame: &mut Frame, area: Rect) {
        let block = self.panel_block(Panel::Categories, Label::DeviceType);
        let categories = self.state.categories();
        if categories.is_empty() {
            frame.render_widget(self.placeholder(block, self.is_loading()), area);
            return;
        }

        let loaded = self.state.loaded_category();
        let items: Vec<ListItem> = categories
            .iter()
            .map(|c| {
                let marker = if loaded.is_some_and(|key| c.matches(key)) {
                    Span::styled("● ", theme::loaded_marker())
                } else {
                    Span::raw("  ")
                };
                ListItem::new(Line::from(vec![
                    marker,
                    Span::styled(c.display_name.clone(), theme::text()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(theme::selected());
        let mut list_state =
            ListState::default().with_selected(self.state.selected_category_index());
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_devices(&self, frame: &mut Frame, area: Rect) {
        let title = match self.state.loaded_category() {
            Some(key) => {
                let name = self
                    .state
                    .categories()
                    .iter()
                    .find(|c| c.matches(key))
                    .map_or(key, |c| c.display_name.as_str());
                format!(" {} · {name} ", self.state.label(Label::Devices))
            }
            None => format!(" {} ", self.state.label(Label::Devices)),
        };
        let block = Block::bordered()
            .title(Span::styled(title, theme::title()))
            .border_style(theme::border(self.focus == Panel::Devices));

        let devices = self.state.devices();
        if devices.is_empty() {
            frame.render_widget(self.placeholder(block, self.is_loading()), area);
            return;
        }

        let header = Row::new(
            [Label::Id, Label::Designation, Label::Name, Label::Description]
                .map(|l| Cell::from(self.state.label(l).to_owned())),
        )
        .style(theme::table_header());

        let rows: Vec<Row> = devices
            .iter()
            .map(|d| {
                Row::new(vec![
                    Cell::from(d.id.to_string()),
                    Cell::from(d.code.clone().unwrap_or_default()),
                    Cell::from(d.name.clone().unwrap_or_default()),
                    Cell::from(d.description.clone().unwrap_or_default()),
                ])
                .style(theme::text())
            })
            .collect();

        let widths = [
            Constraint::Length(6),
            Constraint::Length(14),
            Constraint::Fill(1),
            Constraint::Fill(2),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(theme::selected());
        let mut table_state =
            TableState::default().with_selected(self.state.selected_device_index());
        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn render_properties(&self, frame: &mut Frame, area: Rect) {
        let block = self.panel_block(Panel::Properties, Label::Properties);
        if self.state.selected_device().is_none() {
            let prompt = if self.state.devices().is_empty() {
                String::new()
            } else {
                self.state.label(Label::SelectDevice).to_owned()
            };
            frame.render_widget(
                Paragraph::new(Line::styled(prompt, theme::muted())).block(block),
                area,
            );
            return;
        }

        let header = Row::new(
            [Label::Property, Label::Value].map(|l| Cell::from(self.state.label(l).to_owned())),
        )
        .style(theme::table_header());
        let rows: Vec<Row> = self
            .state
            .selected_properties()
            .into_iter()
            .map(|p| {
                let style = theme::property_value(&p.value);
                Row::new(vec![
                    Cell::from(p.property_name).style(theme::text()),
                    Cell::from(p.value.to_string()).style(style),
                ])
            })
            .collect();

        let table = Table::new(rows, [Constraint::Percentage(35), Constraint::Fill(1)])
            .header(header)
            .block(block)
            .row_highlight_style(theme::selected());
        let selected = (self.focus == Panel::Properties).then_some(self.property_cursor);
        let mut table_state = TableState::default().with_selected(selected);
        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn placeholder(&self, block: Block<'static>, loading: bool) -> Paragraph<'static> {
        let text = if loading {
            self.state.label(Label::Loading).to_owned()
        } else {
            String::new()
        };
        Paragraph::new(Line::styled(text, theme::muted())).block(block)
    }
}

impl Component for BrowserScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1),
            KeyCode::Char('g') | KeyCode::Home => self.jump(false),
            KeyCode::Char('G') | KeyCode::End => self.jump(true),
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => self.activate(),
            KeyCode::Esc if self.focus == Panel::Devices => Some(Action::SelectDevice(None)),
            KeyCode::Char('r') => Some(Action::FetchCategories),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        let follow_up = match action {
            Action::FetchCategories | Action::FetchDevices(_) => {
                self.in_flight += 1;
                None
            }
            Action::CategoriesLoaded(result) => {
                self.finish_fetch();
                match result {
                    Ok(categories) => {
                        self.state.set_categories(categories.clone());
                        None
                    }
                    Err(e) => Some(Action::Notify(Notification::error(
                        self.state.describe_error(e, FetchKind::Categories),
                    ))),
                }
            }
            Action::DevicesLoaded { category, result } => {
                self.finish_fetch();
                match result {
                    Ok(devices) => {
                        self.state.set_devices(category, devices.clone());
                        self.property_cursor = 0;
                        self.focus = Panel::Devices;
                        None
                    }
                    Err(e) => Some(Action::Notify(Notification::error(
                        self.state.describe_error(e, FetchKind::Devices),
                    ))),
                }
            }
            Action::SelectCategory(index) => {
                self.state.select_category(*index);
                None
            }
            Action::RequestLoad => match self.state.pending_load() {
                Ok(category) => Some(Action::FetchDevices(category.key)),
                Err(e) => Some(Action::Notify(Notification::info(
                    self.state.describe_error(&e, FetchKind::Devices),
                ))),
            },
            Action::SelectDevice(index) => {
                self.state.select_device(*index);
                self.property_cursor = 0;
                None
            }
            Action::ScrollProperties(index) => {
                self.property_cursor = *index;
                None
            }
            Action::ToggleLanguage => {
                self.state.toggle_locale();
                None
            }
            _ => None,
        };
        Ok(follow_up)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(28), Constraint::Fill(1)]).areas(area);
        let [top, bottom] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Fill(1)]).areas(right);

        self.render_categories(frame, left);
        self.render_devices(frame, top);
        self.render_properties(frame, bottom);
    }
}
