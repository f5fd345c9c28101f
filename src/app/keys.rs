//! Keyboard handling.
//!
//! Keys are routed by the topmost overlay first, then by focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus, Overlay, Tab};
use crate::billing::BillingStep;
use crate::models::SessionMode;

fn mode_for(c: char) -> Option<SessionMode> {
    match c {
        'v' => Some(SessionMode::Video),
        'a' => Some(SessionMode::Voice),
        't' => Some(SessionMode::Text),
        _ => None,
    }
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.overlay() {
            Overlay::Session => self.handle_session_key(key, ctrl),
            Overlay::Summary => self.handle_summary_key(key),
            Overlay::Billing => self.handle_billing_key(key),
            Overlay::Detail => self.handle_detail_key(key),
            Overlay::None => match self.focus {
                Focus::Search => self.handle_search_key(key),
                _ => self.handle_list_key(key),
            },
        }
    }

    /// Shared single-line editing keys. Returns true if consumed.
    fn edit_input(&mut self, key: KeyEvent) -> bool {
        let buffer = if self.focus == Focus::Search {
            &mut self.search
        } else {
            &mut self.input
        };
        match key.code {
            KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                return false
            }
            KeyCode::Char(c) => buffer.insert_char(c),
            KeyCode::Backspace => buffer.backspace(),
            KeyCode::Delete => buffer.delete(),
            KeyCode::Left => buffer.move_left(),
            KeyCode::Right => buffer.move_right(),
            KeyCode::Home => buffer.move_home(),
            KeyCode::End => buffer.move_end(),
            _ => return false,
        }
        true
    }

    /// Insert pasted text into whichever input has focus.
    pub fn handle_paste(&mut self, text: &str) {
        match self.focus {
            Focus::Search => {
                self.search.insert_str(text);
                self.clamp_selection();
            }
            Focus::Chat => self.input.insert_str(text),
            Focus::ReviewComment => {
                self.input.insert_str(text);
                self.sync_comment();
            }
            Focus::List => return,
        }
        self.mark_dirty();
    }

    fn sync_comment(&mut self) {
        if let Some(summary) = self.summary.as_mut() {
            summary.comment = self.input.as_str().to_string();
        }
    }

    fn handle_session_key(&mut self, key: KeyEvent, ctrl: bool) {
        if ctrl && key.code == KeyCode::Char('e') {
            self.end_session();
            return;
        }

        if self.focus == Focus::Chat {
            match key.code {
                KeyCode::Enter => {
                    self.send_chat();
                }
                KeyCode::Esc => self.focus = Focus::List,
                _ => {
                    self.edit_input(key);
                }
            }
            return;
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char('m') => session.toggle_mute(),
            KeyCode::Char('c') => session.toggle_camera(),
            KeyCode::Char('t') => {
                session.toggle_chat();
                if session.is_chat_open() {
                    self.focus = Focus::Chat;
                }
            }
            KeyCode::Char('i') | KeyCode::Enter if session.is_chat_open() => {
                self.focus = Focus::Chat;
            }
            _ => {}
        }
    }

    fn handle_summary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit_review();
            }
            KeyCode::Esc => self.skip_review(),
            KeyCode::Up => {
                if let Some(summary) = self.summary.as_mut() {
                    summary.rating_up();
                }
            }
            KeyCode::Down => {
                if let Some(summary) = self.summary.as_mut() {
                    summary.rating_down();
                }
            }
            _ => {
                self.focus = Focus::ReviewComment;
                if self.edit_input(key) {
                    self.sync_comment();
                }
            }
        }
    }

    fn handle_billing_key(&mut self, key: KeyEvent) {
        let Some(step) = self.billing.as_ref().map(|f| f.step()) else {
            return;
        };
        match (step, key.code) {
            (BillingStep::Selection, KeyCode::Down | KeyCode::Char('j')) => {
                if let Some(flow) = self.billing.as_mut() {
                    flow.select_next();
                }
            }
            (BillingStep::Selection, KeyCode::Up | KeyCode::Char('k')) => {
                if let Some(flow) = self.billing.as_mut() {
                    flow.select_prev();
                }
            }
            (BillingStep::Selection, KeyCode::Enter) => {
                self.confirm_billing();
            }
            (BillingStep::Selection, KeyCode::Esc) => self.close_billing(),
            (BillingStep::Success, KeyCode::Enter | KeyCode::Esc) => {
                self.finish_billing();
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        let Some(id) = self.detail.clone() else {
            return;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.close_detail(),
            KeyCode::Char('f') => self.toggle_favorite(&id),
            KeyCode::Char(c) => {
                if let Some(mode) = mode_for(c) {
                    self.start_session(&id, mode);
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => self.focus = Focus::List,
            _ => {
                if self.edit_input(key) {
                    self.clamp_selection();
                }
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char(c @ '1'..='4') => {
                if let Some(tab) = Tab::from_digit(c) {
                    self.select_tab(tab);
                }
            }
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char('l') | KeyCode::Right => self.cycle_category(true),
            KeyCode::Char('h') | KeyCode::Left => self.cycle_category(false),
            KeyCode::Char('/') => {
                if !matches!(self.tab, Tab::Home | Tab::Search) {
                    self.select_tab(Tab::Search);
                }
                self.focus = Focus::Search;
            }
            KeyCode::Char('b') => {
                self.open_billing();
            }
            KeyCode::Char('d') => self.toggle_theme(),
            KeyCode::Char('f') => {
                if let Some(healer) = self.selected_healer() {
                    self.toggle_favorite(&healer.id);
                }
            }
            KeyCode::Enter => {
                if let Some(healer) = self.selected_healer() {
                    self.open_detail(&healer.id);
                }
            }
            KeyCode::Char(c) => {
                if let (Some(mode), Some(healer)) = (mode_for(c), self.selected_healer()) {
                    self.start_session(&healer.id, mode);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::{InMemoryStore, MockGenerator};
    use crate::app::AppDeps;
    use crate::capture::SimulatedCaptureDevice;
    use crate::config::AppConfig;
    use crate::models::{HealerId, Money};

    fn app() -> App {
        let deps = AppDeps {
            generator: Arc::new(MockGenerator::new()),
            capture: Arc::new(SimulatedCaptureDevice),
            store: Arc::new(InMemoryStore::new()),
        };
        App::with_deps(AppConfig::default(), deps)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_tabs_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.tab, Tab::Profile);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.focus, Focus::Search);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_search_typing_filters() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "brazil");
        assert_eq!(app.search_term(), "brazil");
        assert_eq!(app.filtered_healers().len(), 1);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_detail_favorite_and_close() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.overlay(), Overlay::Detail);
        press(&mut app, KeyCode::Char('f'));
        assert!(app.is_favorite(&HealerId::new("h1")));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay(), Overlay::None);
    }

    #[test]
    fn test_billing_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.billing.as_ref().unwrap().selected().id, "p3");
        press(&mut app, KeyCode::Esc);
        assert!(app.billing.is_none());
        assert_eq!(app.wallet.balance(), Money::from_dollars(150));
    }

    #[test]
    fn test_ctrl_c_quits_from_overlay() {
        let mut app = app();
        press(&mut app, KeyCode::Char('b'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_session_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.overlay(), Overlay::Session);
        assert_eq!(app.focus, Focus::Chat);
        type_str(&mut app, "mc");
        assert_eq!(app.input.as_str(), "mc");
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('m'));
        assert!(app.session.as_ref().unwrap().is_muted());
        app.handle_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL));
        assert_eq!(app.overlay(), Overlay::Summary);
    }

    #[tokio::test]
    async fn test_modified_chars_do_not_type() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        type_str(&mut app, "hi");
        app.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT));
        assert_eq!(app.input.as_str(), "hi");
        app.handle_key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT));
        assert_eq!(app.input.as_str(), "hiS");

        press(&mut app, KeyCode::Esc);
        app.handle_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL));
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('/'));
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.search_term(), "");
    }

    #[tokio::test]
    async fn test_summary_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        app.end_session();
        press(&mut app, KeyCode::Down);
        type_str(&mut app, "lovely");
        assert_eq!(app.summary.as_ref().unwrap().comment, "lovely");
        press(&mut app, KeyCode::Enter);
        let reviews = app.reviews_for(&HealerId::new("h1"));
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].rating.get(), 4);
        assert_eq!(reviews[0].comment, "lovely");
    }
}
