#![forbid(unsafe_code)]

//! Application model: navigation stack, global keys, gesture routing.
//!
//! The host feeds [`App::handle_event`] and [`App::tick`] and renders with
//! [`App::view`]. Both return a [`Cmd`] the host must act on. Navigation
//! commands are consumed here; only `Quit`, `OpenUrl`, and batches of those
//! reach the host.
//!
//! # Invariants
//!
//! 1. The stack is never empty while the app runs; popping the root quits.
//! 2. A pushed screen always starts from fresh state.
//! 3. Escape during a pointer drag cancels the drag instead of navigating.

use std::time::Duration;

use insight_core::event::{Event, KeyCode};
use insight_core::gesture::{GestureConfig, GestureRecognizer};
use insight_core::geometry::Rect;
use insight_core::semantic_event::Gesture;
use insight_widgets::PanelMotion;
use insight_widgets::gradient::GradientBackground;
use web_time::Instant;

use crate::config::AppConfig;
use crate::frame::{Frame, MUTED, TextStyle, WHITE};
use crate::screens::{HelpEntry, Input, Route, Screen};

/// Effects requested by an update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    #[default]
    None,
    Quit,
    /// Hand a link to the outside world.
    OpenUrl(String),
    /// Mount `Route` on top of the stack.
    Push(Route),
    /// Unmount the top screen.
    Pop,
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Batch that drops `None`s and unwraps a single command.
    #[must_use]
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.remove(0),
            _ => Self::Batch(cmds),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub fn open_url(url: impl Into<String>) -> Self {
        Self::OpenUrl(url.into())
    }
}

/// Everything screens need when they are mounted.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub panel_motion: PanelMotion,
    pub gesture: GestureConfig,
    pub gradient_period: Duration,
    /// Fixed gradient seed; `None` draws from the OS.
    pub seed: Option<u64>,
    pub memo_phrase: String,
    pub memo_words_per_second: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default(), None)
    }
}

impl AppSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig, seed: Option<u64>) -> Self {
        Self {
            panel_motion: config.panel_motion(),
            gesture: config.gesture_config(),
            gradient_period: config.gradient_period(),
            seed,
            memo_phrase: config.memo.phrase.clone(),
            memo_words_per_second: config.memo.words_per_second,
        }
    }
}

pub struct App {
    settings: AppSettings,
    stack: Vec<Box<dyn Screen>>,
    recognizer: GestureRecognizer,
    gradient: GradientBackground,
    status: Option<String>,
}

impl App {
    #[must_use]
    pub fn new(settings: AppSettings, root: Route) -> Self {
        let gradient = match settings.seed {
            Some(seed) => GradientBackground::seeded(settings.gradient_period, seed),
            None => GradientBackground::from_entropy(settings.gradient_period),
        };
        let recognizer = GestureRecognizer::new(settings.gesture.clone());
        let stack = vec![root.mount(&settings)];
        Self {
            settings,
            stack,
            recognizer,
            gradient,
            status: None,
        }
    }

    /// Route of the visible screen.
    #[must_use]
    pub fn route(&self) -> Option<Route> {
        self.stack.last().map(|s| s.route())
    }

    /// Routes from root to top.
    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        self.stack.iter().map(|s| s.route()).collect()
    }

    /// The visible screen has no gesture or animation in flight.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.recognizer.is_dragging() && self.stack.last().is_none_or(|s| s.is_settled())
    }

    /// Last link or notice shown in the status bar.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    // -----------------------------------------------------------------------
    // Update
    // -----------------------------------------------------------------------

    pub fn handle_event(&mut self, event: &Event, now: Instant) -> Cmd {
        let gestures = self.recognizer.process(event, now);

        if let Event::Key(key) = event {
            if !key.is_press() {
                return Cmd::None;
            }
            if key.ctrl() && key.is_char('c') {
                return Cmd::Quit;
            }
            if key.code == KeyCode::Escape {
                // The recognizer turns Escape into DragCancel mid-drag.
                if gestures.iter().any(|g| matches!(g, Gesture::DragCancel)) {
                    return self.dispatch_gestures(gestures);
                }
                return self.apply(Cmd::Pop);
            }
            let cmd = self.dispatch(&Input::Key(*key));
            return Cmd::batch(vec![cmd, self.dispatch_gestures(gestures)]);
        }

        self.dispatch_gestures(gestures)
    }

    /// Advance animations and fire pending long presses.
    pub fn tick(&mut self, dt: Duration, now: Instant) -> Cmd {
        self.gradient.tick(dt);
        if let Some(screen) = self.stack.last_mut() {
            screen.tick(dt);
        }
        match self.recognizer.check_long_press(now) {
            Some(gesture) => self.dispatch(&Input::Gesture(gesture)),
            None => Cmd::None,
        }
    }

    fn dispatch_gestures(&mut self, gestures: Vec<Gesture>) -> Cmd {
        let cmds = gestures
            .into_iter()
            .map(|g| self.dispatch(&Input::Gesture(g)))
            .collect();
        Cmd::batch(cmds)
    }

    fn dispatch(&mut self, input: &Input) -> Cmd {
        let cmd = match self.stack.last_mut() {
            Some(screen) => screen.update(input),
            None => Cmd::Quit,
        };
        self.apply(cmd)
    }

    /// Consume navigation; return what the host must handle.
    fn apply(&mut self, cmd: Cmd) -> Cmd {
        match cmd {
            Cmd::None => Cmd::None,
            Cmd::Quit => Cmd::Quit,
            Cmd::Push(route) => {
                self.release_pointer();
                self.status = None;
                self.stack.push(route.mount(&self.settings));
                tracing::info!(?route, depth = self.stack.len(), "navigate");
                Cmd::None
            }
            Cmd::Pop => {
                self.release_pointer();
                self.status = None;
                self.stack.pop();
                match self.stack.last() {
                    Some(top) => {
                        tracing::info!(route = ?top.route(), depth = self.stack.len(), "back");
                        Cmd::None
                    }
                    None => Cmd::Quit,
                }
            }
            Cmd::OpenUrl(url) => {
                tracing::info!(%url, "open link");
                self.status = Some(format!("Open in browser: {url}"));
                Cmd::OpenUrl(url)
            }
            Cmd::Batch(cmds) => {
                let out = cmds.into_iter().map(|c| self.apply(c)).collect();
                Cmd::batch(out)
            }
        }
    }

    /// End any pointer gesture before the top screen changes. A drag in
    /// progress is cancelled on the screen that saw it start, so it never
    /// stays mid-drag while covered.
    fn release_pointer(&mut self) {
        if self.recognizer.is_dragging()
            && let Some(screen) = self.stack.last_mut()
        {
            tracing::debug!(route = ?screen.route(), "cancel drag before navigation");
            let _ = screen.update(&Input::Gesture(Gesture::DragCancel));
        }
        self.recognizer.reset();
    }

    // -----------------------------------------------------------------------
    // View
    // -----------------------------------------------------------------------

    pub fn view(&self, frame: &mut Frame) {
        let bounds = frame.bounds();
        for y in 0..bounds.height {
            let bg = self.gradient.color_at(y, bounds.height);
            frame.fill_bg(Rect::new(0, y, bounds.width, 1), bg);
        }
        if bounds.height < 2 {
            return;
        }

        let content = Rect::new(0, 0, bounds.width, bounds.height - 1);
        if let Some(screen) = self.stack.last() {
            screen.view(frame, content);
            self.view_status(frame, bounds.height - 1, screen.keybindings());
        }
    }

    fn view_status(&self, frame: &mut Frame, y: u16, bindings: Vec<HelpEntry>) {
        if let Some(status) = &self.status {
            frame.print(1, y, status, TextStyle::fg(WHITE));
            return;
        }
        let mut x = 1;
        let mut all = bindings;
        all.push(HelpEntry {
            key: "Esc",
            action: "Back",
        });
        for entry in all {
            x = frame.print(x, y, entry.key, TextStyle::fg(WHITE).bold());
            x = frame.print(x + 1, y, entry.action, TextStyle::fg(MUTED));
            x += 2;
        }
    }
}
