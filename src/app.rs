use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::Config;
use crate::event::AppEvent;
use crate::generator::WordSource;
use crate::generator::fetch::{FetchTracker, spawn_fetch};
use crate::session::input::Keystroke;
use crate::session::result::SessionResult;
use crate::session::state::Session;
use crate::ui::components::controls::{Control, visible_control};
use crate::ui::theme::Theme;

pub struct App {
    pub session: Session,
    pub config: Config,
    pub theme: &'static Theme,
    pub should_quit: bool,
    fetch: FetchTracker,
    word_source: Arc<dyn WordSource>,
    events: Sender<AppEvent>,
}

impl App {
    pub fn new(
        config: Config,
        theme: &'static Theme,
        word_source: Arc<dyn WordSource>,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            session: Session::new(),
            config,
            theme,
            should_quit: false,
            fetch: FetchTracker::new(),
            word_source,
            events,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_pending()
    }

    pub fn visible_control(&self) -> Option<Control> {
        visible_control(&self.session, self.is_loading())
    }

    /// The finished round's metrics, hidden while the next sentence loads.
    pub fn visible_result(&self) -> Option<&SessionResult> {
        if self.is_loading() || !self.session.has_ended() {
            return None;
        }
        self.session.result.as_ref()
    }

    /// Request a new sentence. The round begins once it arrives.
    pub fn start(&mut self) {
        let generation = self.fetch.begin();
        tracing::info!(generation, "requesting sentence");
        spawn_fetch(Arc::clone(&self.word_source), generation, self.events.clone());
    }

    pub fn restart(&mut self) {
        self.start();
    }

    pub fn cancel_fetch(&mut self) {
        if self.fetch.is_pending() {
            tracing::debug!("abandoning outstanding sentence fetch");
        }
        self.fetch.cancel();
    }

    pub fn quit(&mut self) {
        self.cancel_fetch();
        self.should_quit = true;
    }

    pub fn on_sentence_fetched(&mut self, generation: u64, sentence: &str) {
        if !self.fetch.complete(generation) {
            tracing::debug!(generation, "dropping stale sentence");
            return;
        }
        self.session.begin(sentence, Instant::now());
        tracing::info!(
            generation,
            chars = self.session.sentence.len(),
            "round started"
        );
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::SentenceFetched {
                generation,
                sentence,
            } => self.on_sentence_fetched(generation, &sentence),
            AppEvent::Tick | AppEvent::Resize(_, _) => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Release/repeat reports would double count
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Enter => match self.visible_control() {
                Some(Control::Start) => self.start(),
                Some(Control::Restart) => self.restart(),
                None => {}
            },
            _ => self.type_key(&key),
        }
    }

    fn type_key(&mut self, key: &KeyEvent) {
        let was_running = self.session.is_running();
        if let Some(ev) = self.session.handle_key(Keystroke::from(key), Instant::now()) {
            tracing::debug!(
                expected = %ev.expected,
                actual = %ev.actual,
                correct = ev.correct,
                "keystroke"
            );
        }

        if was_running && self.session.has_ended() {
            if let Some(ref result) = self.session.result {
                tracing::info!(
                    wpm = result.wpm,
                    accuracy = result.accuracy,
                    correct = result.correct,
                    incorrect = result.incorrect,
                    elapsed_secs = result.elapsed_secs,
                    "round finished"
                );
            }
        }
    }
}
