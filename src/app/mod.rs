//! Application state and intent handlers.
//!
//! [`App`] owns every piece of cross-cutting state: the wallet and ledger,
//! favorites, locally submitted reviews, the active session and whichever
//! modal is open. All mutation goes through the named intent methods here
//! and in the submodules; spawned tasks report back through [`AppMessage`].

mod driver;
mod handlers;
mod input;
mod keys;
mod messages;
mod types;

pub use input::InputBuffer;
pub use messages::AppMessage;
pub use types::{Focus, Overlay, Tab};

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::adapters::{FileStore, InMemoryStore, ReqwestHttpClient};
use crate::billing::{BillingFlow, BillingToken};
use crate::capture::{SimulatedCaptureDevice, UnavailableCaptureDevice};
use crate::catalog::{self, ALL_CATEGORY, CATEGORIES};
use crate::config::{AppConfig, CaptureMode, GeneratorKind};
use crate::error::SoulError;
use crate::generation::{GeminiClient, ScriptedGenerator, TextGenerator};
use crate::models::{HealerId, HealerProfile, Money, Review, Theme, UserProfile};
use crate::preferences::Preferences;
use crate::reviews::SessionSummary;
use crate::session::{Session, SessionId, SessionOutcome};
use crate::traits::{CaptureDevice, KeyValueStore};
use crate::wallet::Wallet;

/// External collaborators the app talks to.
#[derive(Clone)]
pub struct AppDeps {
    pub generator: Arc<dyn TextGenerator>,
    pub capture: Arc<dyn CaptureDevice>,
    pub store: Arc<dyn KeyValueStore>,
}

impl AppDeps {
    /// Production collaborators selected by `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        let generator: Arc<dyn TextGenerator> = match config.generator {
            GeneratorKind::Scripted => {
                info!("using offline scripted generator");
                Arc::new(ScriptedGenerator::new())
            }
            GeneratorKind::Remote => {
                if config.api_key.is_none() {
                    warn!("no API key configured, persona replies will use fallback lines");
                }
                Arc::new(GeminiClient::new(ReqwestHttpClient::new(), config.gemini()))
            }
        };

        let capture: Arc<dyn CaptureDevice> = match config.capture {
            CaptureMode::Simulated => Arc::new(SimulatedCaptureDevice),
            CaptureMode::Off => Arc::new(UnavailableCaptureDevice),
        };

        let store: Arc<dyn KeyValueStore> = match config.resolved_data_dir() {
            Some(dir) => Arc::new(FileStore::in_dir(dir)),
            None => {
                warn!("no home directory, preferences will not persist");
                Arc::new(InMemoryStore::new())
            }
        };

        Self {
            generator,
            capture,
            store,
        }
    }
}

/// Main application state
pub struct App {
    pub config: AppConfig,
    /// Seed catalog in declaration order
    catalog: Vec<HealerProfile>,
    /// Current bottom-bar tab
    pub tab: Tab,
    /// Where typed characters go
    pub focus: Focus,
    /// Cursor into the list shown by the current tab
    pub selected: usize,
    pub search: InputBuffer,
    /// Index into [`CATEGORIES`]
    pub category_index: usize,
    /// Chat line or review comment being typed
    pub input: InputBuffer,
    pub theme: Theme,
    pub user: UserProfile,
    pub wallet: Wallet,
    favorites: BTreeSet<HealerId>,
    reviews: HashMap<HealerId, Vec<Review>>,
    /// Healer whose detail overlay is open
    pub detail: Option<HealerId>,
    pub session: Option<Session>,
    pub summary: Option<SessionSummary>,
    pub billing: Option<BillingFlow>,
    /// Most recently finished session, shown on the sessions tab
    pub last_session: Option<SessionOutcome>,
    /// One-line notice for the status bar
    pub status: Option<String>,
    generator: Arc<dyn TextGenerator>,
    capture: Arc<dyn CaptureDevice>,
    preferences: Preferences,
    next_session_id: SessionId,
    next_billing_token: u64,
    /// Connect delay, clock and generation tasks of the active session
    session_tasks: Vec<JoinHandle<()>>,
    billing_task: Option<JoinHandle<()>>,
    /// Receiver for async messages (taken by the run loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Tick counter for animations (spinner)
    pub tick_count: u64,
    /// Set on state mutations, cleared after each draw
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    /// Create an app wired to the production collaborators.
    pub fn new(config: AppConfig) -> Self {
        let deps = AppDeps::from_config(&config);
        Self::with_deps(config, deps)
    }

    /// Create an app with explicit collaborators.
    pub fn with_deps(config: AppConfig, deps: AppDeps) -> Self {
        let preferences = Preferences::new(deps.store);
        let theme = preferences.load_theme(config.default_theme);
        let favorites = preferences.load_favorites();
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        info!(%theme, favorites = favorites.len(), "app initialized");

        Self {
            wallet: Wallet::new(config.initial_balance),
            config,
            catalog: catalog::mock_healers(),
            tab: Tab::default(),
            focus: Focus::default(),
            selected: 0,
            search: InputBuffer::new(),
            category_index: 0,
            input: InputBuffer::new(),
            theme,
            user: UserProfile::default(),
            favorites,
            reviews: HashMap::new(),
            detail: None,
            session: None,
            summary: None,
            billing: None,
            last_session: None,
            status: None,
            generator: deps.generator,
            capture: deps.capture,
            preferences,
            next_session_id: SessionId::first(),
            next_billing_token: 1,
            session_tasks: Vec::new(),
            billing_task: None,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        let animating = self.session.as_ref().is_some_and(|s| !s.is_active() || s.is_composing())
            || self.billing.is_some();
        if animating {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.abort_session_tasks();
        if let Some(session) = self.session.as_mut() {
            session.release_capture();
        }
        if let Some(task) = self.billing_task.take() {
            task.abort();
        }
        self.should_quit = true;
    }

    /// The topmost modal layer. A live session covers everything.
    pub fn overlay(&self) -> Overlay {
        if self.session.is_some() {
            Overlay::Session
        } else if self.summary.is_some() {
            Overlay::Summary
        } else if self.billing.is_some() {
            Overlay::Billing
        } else if self.detail.is_some() {
            Overlay::Detail
        } else {
            Overlay::None
        }
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// Catalog with ratings recomputed from local reviews.
    pub fn healers(&self) -> Vec<HealerProfile> {
        self.catalog
            .iter()
            .map(|h| match self.reviews.get(&h.id) {
                Some(reviews) => catalog::with_reviews(h, reviews),
                None => h.clone(),
            })
            .collect()
    }

    pub fn healer(&self, id: &HealerId) -> Option<HealerProfile> {
        self.healers().into_iter().find(|h| &h.id == id)
    }

    pub fn category(&self) -> &'static str {
        CATEGORIES.get(self.category_index).copied().unwrap_or(ALL_CATEGORY)
    }

    pub fn search_term(&self) -> &str {
        self.search.as_str()
    }

    pub fn filtered_healers(&self) -> Vec<HealerProfile> {
        catalog::filter_healers(&self.healers(), self.search_term(), self.category())
    }

    /// Favorited healers in catalog order.
    pub fn favorite_healers(&self) -> Vec<HealerProfile> {
        self.healers()
            .into_iter()
            .filter(|h| self.favorites.contains(&h.id))
            .collect()
    }

    /// Online healers among the filtered set.
    pub fn online_count(&self) -> usize {
        catalog::online_count(&self.filtered_healers())
    }

    pub fn favorites(&self) -> &BTreeSet<HealerId> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &HealerId) -> bool {
        self.favorites.contains(id)
    }

    pub fn reviews_for(&self, id: &HealerId) -> &[Review] {
        self.reviews.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The list the current tab navigates over.
    pub fn visible_healers(&self) -> Vec<HealerProfile> {
        match self.tab {
            Tab::Home | Tab::Search => self.filtered_healers(),
            Tab::Sessions => self.favorite_healers(),
            Tab::Profile => Vec::new(),
        }
    }

    pub fn selected_healer(&self) -> Option<HealerProfile> {
        self.visible_healers().into_iter().nth(self.selected)
    }

    // ------------------------------------------------------------------
    // Intents
    // ------------------------------------------------------------------

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.selected = 0;
        self.focus = if tab == Tab::Search { Focus::Search } else { Focus::List };
    }

    pub fn select_next(&mut self) {
        let len = self.visible_healers().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_healers().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search.set(term);
        self.clamp_selection();
    }

    pub fn select_category(&mut self, category: &str) -> bool {
        match CATEGORIES.iter().position(|c| *c == category) {
            Some(index) => {
                self.category_index = index;
                self.clamp_selection();
                true
            }
            None => {
                warn!(category, "unknown category");
                false
            }
        }
    }

    pub fn cycle_category(&mut self, forward: bool) {
        let len = CATEGORIES.len();
        self.category_index = if forward {
            (self.category_index + 1) % len
        } else {
            (self.category_index + len - 1) % len
        };
        self.clamp_selection();
    }

    pub fn open_detail(&mut self, id: &HealerId) {
        if self.catalog.iter().any(|h| &h.id == id) {
            self.detail = Some(id.clone());
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Add the healer to favorites if absent, remove it if present.
    pub fn toggle_favorite(&mut self, id: &HealerId) {
        if !self.favorites.remove(id) {
            self.favorites.insert(id.clone());
        }
        debug!(healer = %id, favorite = self.favorites.contains(id), "favorite toggled");
        if let Err(e) = self.preferences.save_favorites(&self.favorites) {
            self.report(e.into());
        }
        self.clamp_selection();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = self.preferences.save_theme(self.theme) {
            self.report(e.into());
        }
    }

    /// Credit the wallet. Together with session debits this is the only
    /// path that changes the balance.
    pub fn add_funds(&mut self, amount: Money) {
        self.wallet.credit_top_up(amount);
    }

    /// Append the summary's review to its healer and close the summary.
    pub fn submit_review(&mut self) -> bool {
        let Some(summary) = self.summary.take() else {
            debug!("no finished session to review");
            return false;
        };
        let review = summary.to_review();
        info!(healer = %summary.healer.id, rating = review.rating.get(), "review submitted");
        self.reviews.entry(summary.healer.id.clone()).or_default().push(review);
        self.input.clear();
        self.focus = Focus::List;
        true
    }

    /// Close the summary without leaving a review.
    pub fn skip_review(&mut self) {
        if self.summary.take().is_some() {
            self.input.clear();
            self.focus = Focus::List;
        }
    }

    pub fn open_billing(&mut self) -> bool {
        if self.session.is_some() || self.billing.is_some() {
            return false;
        }
        let token = BillingToken::new(self.next_billing_token);
        self.next_billing_token += 1;
        self.billing = Some(BillingFlow::new(token));
        true
    }

    /// Abandon the billing flow. Any pending settle is cancelled.
    pub fn close_billing(&mut self) {
        if let Some(task) = self.billing_task.take() {
            task.abort();
        }
        self.billing = None;
    }

    /// Credit the selected plan once the flow has succeeded and close it.
    pub fn finish_billing(&mut self) -> Option<Money> {
        let credit = self.billing.as_ref()?.finish()?;
        self.add_funds(credit);
        self.billing = None;
        self.billing_task = None;
        Some(credit)
    }

    /// Log a failure the app recovered from and show it on the status line.
    pub(crate) fn report(&mut self, err: SoulError) {
        warn!(code = err.error_code(), retryable = err.is_retryable(), "{}", err);
        self.status = Some(err.user_message());
    }

    fn abort_session_tasks(&mut self) {
        for task in self.session_tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.abort_session_tasks();
        if let Some(task) = self.billing_task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockGenerator;
    use crate::models::SessionMode;
    use crate::preferences::{FAVORITES_KEY, THEME_KEY};

    fn app_with_store(store: InMemoryStore) -> App {
        let deps = AppDeps {
            generator: Arc::new(MockGenerator::new()),
            capture: Arc::new(SimulatedCaptureDevice),
            store: Arc::new(store),
        };
        App::with_deps(AppConfig::default(), deps)
    }

    fn app() -> App {
        app_with_store(InMemoryStore::new())
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.wallet.balance(), Money::from_dollars(150));
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(app.overlay(), Overlay::None);
        assert_eq!(app.healers().len(), 3);
        assert_eq!(app.online_count(), 2);
    }

    #[test]
    fn test_loads_preferences() {
        let store = InMemoryStore::new()
            .with(THEME_KEY, "light")
            .with(FAVORITES_KEY, r#"["h2"]"#);
        let app = app_with_store(store);
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.favorite_healers()[0].name, "Master Kenji");
    }

    #[test]
    fn test_filtering_views() {
        let mut app = app();
        app.set_search_term("japan");
        assert_eq!(app.filtered_healers().len(), 1);
        app.set_search_term("");
        assert!(app.select_category("Astrology"));
        let names: Vec<_> = app.filtered_healers().into_iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["Elena Vance"]);
        assert_eq!(app.online_count(), 0);
        assert!(!app.select_category("Crystals"));
    }

    #[test]
    fn test_toggle_favorite_persists() {
        let store = InMemoryStore::new();
        let mut app = app_with_store(store.clone());
        let id = HealerId::new("h3");
        app.toggle_favorite(&id);
        assert!(app.is_favorite(&id));
        assert_eq!(store.raw(FAVORITES_KEY).as_deref(), Some(r#"["h3"]"#));
        app.toggle_favorite(&id);
        assert!(app.favorites().is_empty());
        assert_eq!(store.raw(FAVORITES_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_toggle_theme_persists() {
        let store = InMemoryStore::new();
        let mut app = app_with_store(store.clone());
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(store.raw(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_failed_save_shows_status() {
        let store = InMemoryStore::new();
        store.fail_writes(true);
        let mut app = app_with_store(store);
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.status.as_deref(), Some("Could not save your preferences."));
    }

    #[tokio::test]
    async fn test_unavailable_capture_shows_status() {
        let deps = AppDeps {
            generator: Arc::new(MockGenerator::new()),
            capture: Arc::new(UnavailableCaptureDevice),
            store: Arc::new(InMemoryStore::new()),
        };
        let mut app = App::with_deps(AppConfig::default(), deps);
        assert!(app.start_session(&HealerId::new("h1"), SessionMode::Video));
        assert_eq!(app.status.as_deref(), Some("Camera or microphone unavailable."));
    }

    #[tokio::test]
    async fn test_finished_reply_tasks_are_pruned() {
        let mut app = app();
        assert!(app.start_session(&HealerId::new("h1"), SessionMode::Text));
        let id = app.session.as_ref().unwrap().id();
        app.handle_message(AppMessage::SessionConnected { session: id });

        let mut rx = app.message_rx.take().unwrap();
        for line in ["one", "two", "three", "four", "five"] {
            for _ in 0..16 {
                tokio::task::yield_now().await;
            }
            while let Ok(msg) = rx.try_recv() {
                app.handle_message(msg);
            }
            app.input.set(line);
            assert!(app.send_chat());
            // connect timer, clock and the reply just sent
            assert!(app.session_tasks.len() <= 3, "{} tasks", app.session_tasks.len());
        }
    }

    #[test]
    fn test_submit_review_without_summary_is_noop() {
        let mut app = app();
        assert!(!app.submit_review());
        assert!(app.reviews_for(&HealerId::new("h1")).is_empty());
    }

    #[test]
    fn test_billing_cannot_open_twice() {
        let mut app = app();
        assert!(app.open_billing());
        assert!(!app.open_billing());
        assert_eq!(app.overlay(), Overlay::Billing);
        app.close_billing();
        assert_eq!(app.overlay(), Overlay::None);
        assert_eq!(app.finish_billing(), None);
    }

    #[test]
    fn test_selection_clamps_to_list() {
        let mut app = app();
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 2);
        app.set_search_term("kenji");
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_healer().unwrap().id, HealerId::new("h2"));
    }
}
