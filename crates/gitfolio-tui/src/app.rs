// TUI application state and event handling
use std::time::{Duration, Instant};

use gitfolio_core::filter::{filter_cards, language_options, ALL_LANGUAGES};
use gitfolio_core::models::ProjectCard;
use gitfolio_core::Theme;

use crate::contact::ContactForm;

/// How long a transient status line stays on screen
const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Navigating cards
    Searching, // Typing in the search box
    Contact,   // Filling in the contact form
}

/// Detail view for one project. Only one exists at a time: opening a card
/// replaces the slot wholesale, closing clears it.
#[derive(Debug, Clone)]
pub struct ProjectModal {
    pub card: ProjectCard,
    pub topics: Vec<String>,
}

/// Transient one-line feedback (contact form result, save failures)
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    shown_at: Instant,
}

pub struct App {
    pub should_quit: bool,
    /// Whose portfolio this is
    pub username: String,
    pub input_mode: InputMode,
    pub search_input: String,
    /// "all" plus the sorted distinct languages of the full collection
    pub language_options: Vec<String>,
    pub language_index: usize,
    /// The filtered view currently on screen; always a subset of the panel's
    /// loaded collection, derived from (search text, language selector)
    pub visible: Vec<ProjectCard>,
    pub selected_index: usize,
    pub modal: Option<ProjectModal>,
    pub contact: Option<ContactForm>,
    pub status: Option<StatusMessage>,
    pub theme: Theme,
    pub dark_mode: bool,
    pub authenticated: bool,
}

impl App {
    pub fn new(username: impl Into<String>, dark_mode: bool, authenticated: bool) -> Self {
        Self {
            should_quit: false,
            username: username.into(),
            input_mode: InputMode::Normal,
            search_input: String::new(),
            language_options: vec![ALL_LANGUAGES.to_string()],
            language_index: 0,
            visible: Vec::new(),
            selected_index: 0,
            modal: None,
            contact: None,
            status: None,
            theme: Theme::for_mode(dark_mode),
            dark_mode,
            authenticated,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selected_language(&self) -> &str {
        self.language_options
            .get(self.language_index)
            .map(String::as_str)
            .unwrap_or(ALL_LANGUAGES)
    }

    /// Rebuild the selector options and the filtered view after a load
    pub fn sync_collection(&mut self, cards: &[ProjectCard]) {
        self.language_options = language_options(cards);
        self.language_index = 0;
        self.apply_filters(cards);
    }

    /// Recompute the filtered view. Synchronous, in-memory, full replace -
    /// this path never fetches anything.
    pub fn apply_filters(&mut self, cards: &[ProjectCard]) {
        self.visible = filter_cards(cards, &self.search_input, self.selected_language());
        if self.selected_index >= self.visible.len() {
            self.selected_index = self.visible.len().saturating_sub(1);
        }
    }

    pub fn next_language(&mut self, cards: &[ProjectCard]) {
        if !self.language_options.is_empty() {
            self.language_index = (self.language_index + 1) % self.language_options.len();
            self.apply_filters(cards);
        }
    }

    pub fn previous_language(&mut self, cards: &[ProjectCard]) {
        if !self.language_options.is_empty() {
            self.language_index = self
                .language_index
                .checked_sub(1)
                .unwrap_or(self.language_options.len() - 1);
            self.apply_filters(cards);
        }
    }

    pub fn next_card(&mut self) {
        if !self.visible.is_empty() {
            self.selected_index = (self.selected_index + 1).min(self.visible.len() - 1);
        }
    }

    pub fn previous_card(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn selected_card(&self) -> Option<&ProjectCard> {
        self.visible.get(self.selected_index)
    }

    pub fn open_modal(&mut self, card: ProjectCard, topics: Vec<String>) {
        self.modal = Some(ProjectModal { card, topics });
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Flip the theme and return the new flag so the caller can persist it
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.theme = Theme::for_mode(self.dark_mode);
        self.dark_mode
    }

    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error,
            shown_at: Instant::now(),
        });
    }

    /// Expire the transient status line; called on every event-loop tick
    pub fn tick(&mut self) {
        if let Some(status) = &self.status {
            if status.shown_at.elapsed() >= STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn enter_search_mode(&mut self) {
        self.input_mode = InputMode::Searching;
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn open_contact_form(&mut self) {
        self.contact = Some(ContactForm::default());
        self.input_mode = InputMode::Contact;
    }

    pub fn close_contact_form(&mut self) {
        self.contact = None;
        self.input_mode = InputMode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use gitfolio_core::models::Project;

    fn card(name: &str, language: Option<&str>, description: Option<&str>) -> ProjectCard {
        ProjectCard::new(
            Project {
                name: name.to_string(),
                description: description.map(String::from),
                language: language.map(String::from),
                stars: 0,
                forks: 0,
                watchers: 0,
                url: format!("https://github.com/octocat/{}", name),
                homepage: None,
                updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            },
            None,
        )
    }

    fn sample() -> Vec<ProjectCard> {
        vec![
            card("alpha", Some("Go"), Some("cli tool")),
            card("beta", Some("Rust"), None),
        ]
    }

    #[test]
    fn test_sync_collection_builds_selector_and_view() {
        let mut app = App::new("octocat", true, false);
        app.sync_collection(&sample());

        assert_eq!(app.language_options, vec!["all", "Go", "Rust"]);
        assert_eq!(app.visible.len(), 2);
    }

    #[test]
    fn test_search_then_language_cycle() {
        let cards = sample();
        let mut app = App::new("octocat", true, false);
        app.sync_collection(&cards);

        app.search_input = "cli".to_string();
        app.apply_filters(&cards);
        assert_eq!(app.visible.len(), 1);
        assert_eq!(app.visible[0].project.name, "alpha");

        app.search_input.clear();
        app.next_language(&cards); // "Go"
        assert_eq!(app.selected_language(), "Go");
        assert_eq!(app.visible[0].project.name, "alpha");

        app.next_language(&cards); // "Rust"
        assert_eq!(app.visible[0].project.name, "beta");

        app.next_language(&cards); // wraps to "all"
        assert_eq!(app.selected_language(), "all");
        assert_eq!(app.visible.len(), 2);
    }

    #[test]
    fn test_selection_clamps_when_view_shrinks() {
        let cards = sample();
        let mut app = App::new("octocat", true, false);
        app.sync_collection(&cards);
        app.next_card();
        assert_eq!(app.selected_index, 1);

        app.search_input = "cli".to_string();
        app.apply_filters(&cards);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_modal_is_single_slot() {
        let mut app = App::new("octocat", true, false);
        let cards = sample();

        app.open_modal(cards[0].clone(), vec!["cli".to_string()]);
        assert_eq!(app.modal.as_ref().unwrap().card.project.name, "alpha");

        // Opening again replaces wholesale, never stacks
        app.open_modal(cards[1].clone(), Vec::new());
        assert_eq!(app.modal.as_ref().unwrap().card.project.name, "beta");
        assert!(app.modal.as_ref().unwrap().topics.is_empty());

        app.close_modal();
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_dark_mode_toggle_swaps_theme() {
        let mut app = App::new("octocat", true, false);
        assert_eq!(app.theme.name, "Dark");

        let flag = app.toggle_dark_mode();
        assert!(!flag);
        assert_eq!(app.theme.name, "Light");
    }

    #[test]
    fn test_status_expires_on_tick() {
        let mut app = App::new("octocat", true, false);
        app.set_status("Message sent!", false);
        app.tick();
        // Fresh status survives the tick
        assert!(app.status.is_some());

        // Simulate an old status by backdating it
        if let Some(status) = &mut app.status {
            status.shown_at = Instant::now() - STATUS_TTL - Duration::from_millis(1);
        }
        app.tick();
        assert!(app.status.is_none());
    }
}
