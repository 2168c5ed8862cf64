//! Main application orchestrator.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use crate::application::{NotificationManager, TranslateUseCase};
use crate::domain::errors::{SpeechError, TranslateError};
use crate::domain::ports::{ClipboardPort, SpeechPort, TranslationPort, TranslationRequest};
use crate::domain::{Language, Pane, Session};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{self, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    NotificationPopup, ScreenAction, TranslatorScreen, TranslatorScreenState,
};

const TICK_RATE: Duration = Duration::from_millis(100);

const TRANSLATE_FAILED_TITLE: &str = "Translation failed";
const TRANSLATE_FAILED_MESSAGE: &str = "Could not translate the text. Please try again.";

/// Results reported back to the loop by background tasks.
#[derive(Debug)]
enum Action {
    TranslationFinished {
        result: Result<String, TranslateError>,
        source: Language,
        target: Language,
    },
    SpeechFinished(Result<(), SpeechError>),
}

/// Outbound adapters used by the app.
pub struct AppPorts {
    /// Remote translation service.
    pub translation: Arc<dyn TranslationPort>,
    /// System clipboard.
    pub clipboard: Arc<dyn ClipboardPort>,
    /// Text-to-speech.
    pub speech: Arc<dyn SpeechPort>,
}

/// Owns the translator view and drives its event loop.
pub struct App {
    screen: TranslatorScreenState,
    registry: CommandRegistry,
    translate_use_case: TranslateUseCase,
    clipboard: Arc<dyn ClipboardPort>,
    speech: Arc<dyn SpeechPort>,
    notifications: NotificationManager,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Builds the app around an initial session.
    #[must_use]
    pub fn new(
        session: Session,
        ports: AppPorts,
        registry: CommandRegistry,
        theme: Theme,
        notification_duration: Duration,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let screen = TranslatorScreenState::new(session, theme, &registry);

        Self {
            screen,
            registry,
            translate_use_case: TranslateUseCase::new(ports.translation),
            clipboard: ports.clipboard,
            speech: ports.speech,
            notifications: NotificationManager::new(notification_duration),
            action_tx,
            action_rx,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick_interval = interval(TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        loop {
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = tick_interval.tick() => {
                    if self.tick(Instant::now()) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                event = terminal_event => {
                    match event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(event) == EventResult::Exit {
                                break;
                            }
                            terminal.draw(|frame| self.render(frame))?;
                        }
                        Some(Err(e)) => {
                            error!(error = %e, "Failed to read terminal event");
                            return Err(e.into());
                        }
                        None => break,
                    }
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_stateful_widget(
            TranslatorScreen::new(crate::NAME, crate::VERSION),
            area,
            &mut self.screen,
        );

        if let Some(notification) = self.notifications.current_notification() {
            frame.render_widget(NotificationPopup::new(notification, self.screen.theme()), area);
        }
    }

    fn tick(&mut self, now: Instant) -> bool {
        let toast_changed = self.notifications.tick();
        let indicator_changed = self.screen.tick(now);
        toast_changed || indicator_changed
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if events::is_key_press(&key) => self.handle_key(key),
            Event::Paste(text) => {
                self.screen.handle_paste(&text);
                EventResult::Continue
            }
            Event::Mouse(mouse) => {
                if let Some((column, row)) = events::left_click_position(&mouse) {
                    self.screen.handle_click(column, row);
                }
                EventResult::Continue
            }
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        match self.screen.handle_key(key, &self.registry) {
            ScreenAction::Quit => return EventResult::Exit,
            ScreenAction::Translate => self.start_translation(),
            ScreenAction::Copy(pane) => self.copy(pane),
            ScreenAction::Speak(pane) => self.speak(pane),
            ScreenAction::None => {}
        }
        EventResult::Continue
    }

    fn start_translation(&mut self) {
        let session = self.screen.session_mut();
        if !session.start_loading() {
            debug!(
                loading = session.is_loading(),
                "Translate ignored: nothing to translate or request in flight"
            );
            return;
        }

        let request = TranslationRequest::new(
            session.source_text(),
            session.source_language(),
            session.target_language(),
        );
        let (source, target) = (request.source, request.target);
        let use_case = self.translate_use_case.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let result = use_case.execute(request).await;
            let _ = tx.send(Action::TranslationFinished {
                result,
                source,
                target,
            });
        });
    }

    fn copy(&mut self, pane: Pane) {
        let text = self.screen.session().text_of(pane);
        if text.is_empty() {
            debug!(?pane, "Copy ignored: pane is empty");
            return;
        }

        self.clipboard.set_text(text.to_string());
        self.screen.session_mut().mark_copied(pane, Instant::now());
    }

    fn speak(&mut self, pane: Pane) {
        let session = self.screen.session();
        let text = session.text_of(pane).to_string();
        if text.is_empty() {
            return;
        }

        if !self.speech.is_available() {
            self.notifications.warn(
                "Speech unavailable",
                "No text-to-speech program was found on this system.",
            );
            return;
        }

        let language = session.language_of(pane);
        let speech = self.speech.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let result = speech.speak(&text, language).await;
            let _ = tx.send(Action::SpeechFinished(result));
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::TranslationFinished {
                result,
                source,
                target,
            } => {
                self.screen.session_mut().finish_loading();
                match result {
                    Ok(text) => {
                        self.screen.show_translation(text);
                        self.notifications
                            .success("Translated", format!("{source} → {target}"));
                    }
                    Err(e) => {
                        if !e.is_rejection() {
                            error!(error = %e, "Translation request failed");
                        }
                        self.notifications
                            .error(TRANSLATE_FAILED_TITLE, TRANSLATE_FAILED_MESSAGE);
                    }
                }
            }
            Action::SpeechFinished(Ok(())) => debug!("Speech playback finished"),
            Action::SpeechFinished(Err(e)) => {
                warn!(error = %e, "Speech playback failed");
                self.notifications.warn("Speech failed", e.to_string());
            }
        }
    }
}
