//! Keyboard handling for the App.
//!
//! Global bindings first (quit, tab cycling), then per-tab handling. On the
//! Shorten tab the URL input swallows printable characters, so tab switching
//! and quitting from there use chorded or non-printable keys only.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus, Tab};

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            KeyCode::Tab => {
                self.next_tab();
                return;
            }
            KeyCode::BackTab => {
                self.prev_tab();
                return;
            }
            _ => {}
        }

        match self.active_tab {
            Tab::Shorten => self.handle_shorten_key(key),
            Tab::Stats => self.handle_stats_key(key),
            Tab::Top => self.handle_top_key(key),
        }
    }

    fn handle_shorten_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Input => match key.code {
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => {
                    self.url_input.pop();
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.url_input.clear();
                }
                KeyCode::Up | KeyCode::Left => {
                    self.strategy = self.strategy.prev();
                }
                KeyCode::Down | KeyCode::Right => {
                    self.strategy = self.strategy.next();
                }
                KeyCode::Esc => {
                    if self.submit_result.is_some() {
                        self.focus = Focus::Result;
                    }
                }
                KeyCode::Char(c)
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT) =>
                {
                    self.url_input.push(c);
                }
                _ => {}
            },
            Focus::Result => match key.code {
                KeyCode::Char('c') => self.copy_result_url(),
                KeyCode::Char('o') => self.open_result_url(),
                KeyCode::Char('q') => self.quit(),
                KeyCode::Char('i') | KeyCode::Esc => {
                    self.focus = Focus::Input;
                }
                _ => {}
            },
        }
    }

    fn handle_stats_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') => self.refresh_stats(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_top_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.top_selected = self.top_selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.top_selected + 1 < self.top_urls.len() {
                    self.top_selected += 1;
                }
            }
            KeyCode::Char('c') => self.copy_selected_top_url(),
            KeyCode::Char('o') => self.open_selected_top_url(),
            KeyCode::Char('r') => self.refresh_top(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::CollisionStrategy;

    fn test_app() -> App {
        App::new(Config::default().with_base_url("http://127.0.0.1:1"))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_edits_url_input() {
        let mut app = test_app();
        for c in "https://a.io".chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        assert_eq!(app.url_input, "https://a.io");

        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.url_input, "https://a.i");

        app.handle_key(ctrl('u'));
        assert!(app.url_input.is_empty());
    }

    #[test]
    fn test_arrow_keys_cycle_strategy() {
        let mut app = test_app();
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.strategy, CollisionStrategy::Regenerate);
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.strategy, CollisionStrategy::Append);
        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.strategy, CollisionStrategy::Regenerate);
    }

    #[test]
    fn test_tab_key_cycles_tabs() {
        let mut app = test_app();
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.active_tab, Tab::Stats);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.active_tab, Tab::Top);
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.active_tab, Tab::Stats);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for tab in Tab::ALL {
            let mut app = test_app();
            app.select_tab(tab);
            app.handle_key(ctrl('c'));
            assert!(app.should_quit);
        }
    }

    #[test]
    fn test_q_types_into_input_instead_of_quitting() {
        let mut app = test_app();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.url_input, "q");
    }

    #[test]
    fn test_esc_focuses_result_only_when_present() {
        let mut app = test_app();
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.focus, Focus::Input);

        app.submit_result = Some(
            serde_json::from_value(serde_json::json!({
                "short_url": "https://sho.rt/abc",
                "short_code": "abc",
                "original_url": "https://example.com",
                "attempts": 1
            }))
            .unwrap(),
        );
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.focus, Focus::Result);
        app.handle_key(press(KeyCode::Char('i')));
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_top_selection_is_bounded() {
        let mut app = test_app();
        app.select_tab(Tab::Top);
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.top_selected, 0);

        app.top_urls = serde_json::from_value(serde_json::json!([
            {"id": 1, "short_code": "a", "original_url": "https://a", "clicks": 9,
             "created_at": "2025-01-01T00:00:00Z"},
            {"id": 2, "short_code": "b", "original_url": "https://b", "clicks": 3,
             "created_at": "2025-01-02T00:00:00Z"}
        ]))
        .unwrap();
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.top_selected, 1);
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.top_selected, 1);
        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.top_selected, 0);
    }
}
