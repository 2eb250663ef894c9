//! Application core: event loop, fetch tasks, overlays, and action dispatch.

use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use devref_core::{BrowserState, DeviceService, Label};

use crate::action::{Action, Notification, NotificationLevel};
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screens::BrowserScreen;
use crate::theme;
use crate::tui::Tui;

const TOAST_TTL: Duration = Duration::from_secs(4);

pub struct App {
    screen: BrowserScreen,
    service: DeviceService,
    running: bool,
    help_visible: bool,
    notification: Option<(Notification, Instant)>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(service: DeviceService, state: BrowserState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            screen: BrowserScreen::new(state),
            service,
            running: true,
            help_visible: false,
            notification: None,
            action_tx,
            action_rx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        let mut events = EventReader::new(Duration::from_millis(250), Duration::from_millis(33));
        self.action_tx.send(Action::FetchCategories)?;
        info!(base_url = %self.service.base_url(), "event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render | Event::Resize => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;
                if matches!(action, Action::Render) {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        tui.exit();
        info!("event loop ended");
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?' | 'q') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Char('q')) => {
                Ok(Some(Action::Quit))
            }
            (_, KeyCode::Char('?')) => Ok(Some(Action::ToggleHelp)),
            (_, KeyCode::Char('t')) => Ok(Some(Action::ToggleLanguage)),
            (_, KeyCode::Esc) if self.notification.is_some() => {
                Ok(Some(Action::DismissNotification))
            }
            _ => self.screen.handle_key_event(key),
        }
    }

    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,
            Action::ToggleHelp => self.help_visible = !self.help_visible,
            Action::Notify(notification) => {
                if notification.level == NotificationLevel::Error {
                    warn!(error = %notification.message, "fetch failed");
                }
                self.notification = Some((notification.clone(), Instant::now()));
            }
            Action::DismissNotification => self.notification = None,
            Action::Tick => {
                if self
                    .notification
                    .as_ref()
                    .is_some_and(|(_, shown)| shown.elapsed() >= TOAST_TTL)
                {
                    self.notification = None;
                }
            }
            Action::FetchCategories => self.spawn_category_fetch(),
            Action::FetchDevices(key) => self.spawn_device_fetch(key.clone()),
            _ => {}
        }

        if let Some(follow_up) = self.screen.update(action)? {
            self.action_tx.send(follow_up)?;
        }

        if matches!(action, Action::ToggleLanguage) {
            info!(locale = %self.screen.state().locale(), "language toggled");
        }
        Ok(())
    }

    fn spawn_category_fetch(&self) {
        let service = self.service.clone();
        let tx = self.action_tx.clone();
        debug!("fetching device types");
        tokio::spawn(async move {
            let result = service.fetch_categories().await.map_err(Arc::new);
            let _ = tx.send(Action::CategoriesLoaded(result));
        });
    }

    fn spawn_device_fetch(&self, category: String) {
        let service = self.service.clone();
        let tx = self.action_tx.clone();
        debug!(%category, "fetching devices");
        tokio::spawn(async move {
            let result = service.fetch_devices(&category).await.map_err(Arc::new);
            let _ = tx.send(Action::DevicesLoaded { category, result });
        });
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let [header, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(frame, header);
        self.screen.render(frame, body);
        self.render_status_bar(frame, status);

        if let Some((ref notification, _)) = self.notification {
            render_notification(frame, body, notification);
        }
        if self.help_visible {
            self.render_help(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let state = self.screen.state();
        let line = Line::from(vec![
            Span::styled(format!(" {}", state.label(Label::WindowTitle)), theme::title()),
            Span::styled("  │  ", theme::key_hint()),
            Span::styled(state.label(Label::Language).to_owned(), theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let state = self.screen.state();
        let mut spans = Vec::new();
        if self.screen.is_loading() {
            spans.push(Span::styled(
                format!(" ◐ {} ", state.label(Label::Loading)),
                theme::loaded_marker(),
            ));
        }
        for (key, label) in [
            ("Enter", Label::LoadButton),
            ("t", Label::Language),
            ("?", Label::Help),
            ("q", Label::Quit),
        ] {
            spans.push(Span::styled(format!(" {key} "), theme::key_hint_key()));
            spans.push(Span::styled(state.label(label).to_owned(), theme::key_hint()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let state = self.screen.state();
        let help_area = centered(area, 48, 13);
        frame.render_widget(Clear, help_area);

        let block = Block::bordered()
            .title(Span::styled(
                format!(" {} ", state.label(Label::Help)),
                theme::title(),
            ))
            .border_style(theme::border(true));

        let entry = |keys: &str, text: String| {
            Line::from(vec![
                Span::styled(format!("  {keys:<12}"), theme::key_hint_key()),
                Span::styled(text, theme::text()),
            ])
        };
        let lines = vec![
            Line::from(""),
            entry("Enter / l", state.label(Label::LoadButton).to_owned()),
            entry("j / k", state.label(Label::HelpMoveSelection).to_owned()),
            entry("g / G", state.label(Label::HelpJumpRows).to_owned()),
            entry("Tab / h", state.label(Label::HelpSwitchPanel).to_owned()),
            entry("Esc", state.label(Label::HelpClearDevice).to_owned()),
            entry("r", state.label(Label::HelpReloadTypes).to_owned()),
            entry("t", state.label(Label::Language).to_owned()),
            entry("?", state.label(Label::Help).to_owned()),
            entry("q", state.label(Label::Quit).to_owned()),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), help_area);
    }
}

fn render_notification(frame: &mut Frame, area: Rect, notification: &Notification) {
    let (style, icon) = match notification.level {
        NotificationLevel::Error => (theme::toast_error(), "✗"),
        NotificationLevel::Info => (theme::toast_info(), "·"),
    };

    let text = format!("{icon} {}", notification.message);
    let chars = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let width = chars.saturating_add(4).clamp(24, 72).min(area.width);
    let inner_width = width.saturating_sub(4).max(1);
    let height = (chars.div_ceil(inner_width) + 2).min(8);

    let toast = Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + area.height.saturating_sub(height + 1),
        width,
        height.min(area.height),
    );
    frame.render_widget(Clear, toast);
    frame.render_widget(
        Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().border_style(style)),
        toast,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use devref_core::{Locale, LocalizationCatalog, ServiceConfig};
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn app(base_url: &str, locale: Locale) -> App {
        let service = DeviceService::new(&ServiceConfig::parse(base_url).unwrap()).unwrap();
        App::new(service, BrowserState::new(LocalizationCatalog::builtin(), locale))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn render_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    /// Wait for the next spawned-task result and apply it plus follow-ups.
    async fn settle(app: &mut App) {
        let action = tokio::time::timeout(Duration::from_secs(5), app.action_rx.recv())
            .await
            .unwrap()
            .unwrap();
        app.process_action(&action).unwrap();
        while let Ok(action) = app.action_rx.try_recv() {
            app.process_action(&action).unwrap();
        }
    }

    #[test]
    fn global_keys() {
        let mut app = app("http://127.0.0.1:9", Locale::En);
        assert!(matches!(app.handle_key_event(key(KeyCode::Char('q'))).unwrap(), Some(Action::Quit)));
        assert!(matches!(
            app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
                .unwrap(),
            Some(Action::Quit)
        ));
        assert!(matches!(
            app.handle_key_event(key(KeyCode::Char('t'))).unwrap(),
            Some(Action::ToggleLanguage)
        ));
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = app("http://127.0.0.1:9", Locale::En);
        app.process_action(&Action::ToggleHelp).unwrap();

        assert!(app.handle_key_event(key(KeyCode::Char('t'))).unwrap().is_none());
        assert!(matches!(
            app.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::ToggleHelp)
        ));
    }

    #[test]
    fn header_shows_language_label_once() {
        let mut app = app("http://127.0.0.1:9", Locale::En);
        let english = render_text(&app);
        assert!(english.contains("Language: English"));
        assert!(!english.contains("English: EN"));

        app.process_action(&Action::ToggleLanguage).unwrap();
        let russian = render_text(&app);
        assert!(russian.contains("Язык: Русский"));
        assert!(!russian.contains("Русский: RU"));
    }

    #[test]
    fn help_overlay_follows_locale() {
        let mut app = app("http://127.0.0.1:9", Locale::Ru);
        app.process_action(&Action::ToggleHelp).unwrap();

        let russian = render_text(&app);
        assert!(russian.contains("перемещение по списку"));
        assert!(russian.contains("обновить типы устройств"));
        assert!(!russian.contains("move selection"));

        app.process_action(&Action::ToggleLanguage).unwrap();
        let english = render_text(&app);
        assert!(english.contains("move selection"));
        assert!(english.contains("reload device types"));
    }

    #[test]
    fn notifications_expire_on_tick() {
        let mut app = app("http://127.0.0.1:9", Locale::En);
        app.process_action(&Action::Notify(Notification::info("hello")))
            .unwrap();
        app.process_action(&Action::Tick).unwrap();
        assert!(app.notification.is_some());

        let shown = Instant::now().checked_sub(TOAST_TTL).unwrap();
        app.notification = Some((Notification::info("hello"), shown));
        app.process_action(&Action::Tick).unwrap();
        assert!(app.notification.is_none());
    }

    #[test]
    fn load_without_selection_shows_prompt_toast() {
        let mut app = app("http://127.0.0.1:9", Locale::Ru);
        app.process_action(&Action::RequestLoad).unwrap();
        let follow_up = app.action_rx.try_recv().unwrap();
        app.process_action(&follow_up).unwrap();

        let (notification, _) = app.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Info);
        assert_eq!(
            notification.message,
            app.screen.state().label(Label::SelectDeviceType)
        );
    }

    #[tokio::test]
    async fn fetch_tasks_feed_the_screen() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"Name":"sensors","Description":"Датчики"}]"#,
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/sensors"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"Id":1,"Code":"TS-01","Name":"TempSensor01","voltage":12}]"#,
            ))
            .mount(&server)
            .await;

        let mut app = app(&server.uri(), Locale::Ru);
        app.process_action(&Action::FetchCategories).unwrap();
        assert!(app.screen.is_loading());
        settle(&mut app).await;
        assert_eq!(app.screen.state().categories()[0].display_name, "Датчики");

        app.process_action(&Action::SelectCategory(0)).unwrap();
        app.process_action(&Action::RequestLoad).unwrap();
        let fetch = app.action_rx.try_recv().unwrap();
        app.process_action(&fetch).unwrap();
        settle(&mut app).await;

        assert!(!app.screen.is_loading());
        let device = &app.screen.state().devices()[0];
        assert_eq!(device.description.as_deref(), Some("Датчик температуры"));
    }

    #[tokio::test]
    async fn fetch_failure_becomes_error_toast() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let mut app = app(&server.uri(), Locale::En);
        app.process_action(&Action::FetchCategories).unwrap();
        settle(&mut app).await;

        let (notification, _) = app.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert!(notification.message.starts_with("Error loading device types: "));
        assert!(app.screen.state().categories().is_empty());
    }
}
