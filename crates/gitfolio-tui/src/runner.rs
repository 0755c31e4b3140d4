// TUI event loop and terminal management
use crate::{App, InputMode};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gitfolio_api::EmailClient;
use gitfolio_core::models::ProjectCard;
use gitfolio_core::{Config, ProjectPanel};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::warn;

/// Poll interval; short enough that transient status lines expire on time
const TICK_RATE: Duration = Duration::from_millis(200);

pub async fn run_tui(
    mut app: App,
    mut panel: ProjectPanel,
    email_client: Option<EmailClient>,
    mut config: Config,
) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initial load before the first frame so the user sees the loading state
    // resolve into either the grid or an error panel
    terminal.draw(|f| crate::ui::render(f, &mut app, &gitfolio_core::PanelState::Loading))?;
    panel.load().await;
    let mut collection: Vec<ProjectCard> = panel.cards().map(<[_]>::to_vec).unwrap_or_default();
    app.sync_collection(&collection);

    // Main loop
    loop {
        terminal.draw(|f| crate::ui::render(f, &mut app, panel.state()))?;

        app.tick();

        if !event::poll(TICK_RATE)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // The modal swallows input while open
            if app.modal.is_some() {
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => {
                        app.close_modal();
                    }
                    KeyCode::Char('o') => {
                        if let Some(modal) = &app.modal {
                            let url = modal.card.project.url.clone();
                            if let Err(e) = open::that(&url) {
                                app.set_status(format!("Failed to open browser: {}", e), true);
                            }
                        }
                    }
                    KeyCode::Char('h') => {
                        if let Some(homepage) = app
                            .modal
                            .as_ref()
                            .and_then(|m| m.card.project.homepage.clone())
                        {
                            if let Err(e) = open::that(&homepage) {
                                app.set_status(format!("Failed to open browser: {}", e), true);
                            }
                        }
                    }
                    _ => {}
                }
                continue;
            }

            match app.input_mode {
                InputMode::Searching => match key.code {
                    // Every keystroke re-filters synchronously; no fetch
                    KeyCode::Char(c) => {
                        app.search_input.push(c);
                        app.apply_filters(&collection);
                    }
                    KeyCode::Backspace => {
                        app.search_input.pop();
                        app.apply_filters(&collection);
                    }
                    KeyCode::Esc | KeyCode::Enter => {
                        app.enter_normal_mode();
                    }
                    _ => {}
                },
                InputMode::Contact => match key.code {
                    KeyCode::Esc => {
                        app.close_contact_form();
                    }
                    KeyCode::Tab => {
                        if let Some(form) = &mut app.contact {
                            form.next_field();
                        }
                    }
                    KeyCode::BackTab => {
                        if let Some(form) = &mut app.contact {
                            form.previous_field();
                        }
                    }
                    KeyCode::Char(c) => {
                        if let Some(form) = &mut app.contact {
                            form.insert_char(c);
                        }
                    }
                    KeyCode::Backspace => {
                        if let Some(form) = &mut app.contact {
                            form.delete_char();
                        }
                    }
                    KeyCode::Enter => {
                        let ready = app
                            .contact
                            .as_ref()
                            .map(|f| f.is_valid() && !f.sending)
                            .unwrap_or(false);

                        if ready {
                            if let (Some(form), Some(client)) = (&mut app.contact, &email_client) {
                                form.sending = true;
                                let message = form.to_message();
                                match client.send(&message).await {
                                    Ok(()) => {
                                        app.set_status("Message sent!", false);
                                        app.close_contact_form();
                                    }
                                    Err(e) => {
                                        app.set_status(format!("Failed to send: {}", e), true);
                                        if let Some(form) = &mut app.contact {
                                            form.sending = false;
                                        }
                                    }
                                }
                            }
                        }
                    }
                    _ => {}
                },
                InputMode::Normal => match key.code {
                    KeyCode::Char('q') => {
                        app.quit();
                    }
                    KeyCode::Char('/') => {
                        app.enter_search_mode();
                    }
                    KeyCode::Left => {
                        app.previous_language(&collection);
                    }
                    KeyCode::Right => {
                        app.next_language(&collection);
                    }
                    KeyCode::Char('j') | KeyCode::Down => {
                        app.next_card();
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        app.previous_card();
                    }
                    KeyCode::Enter => {
                        // Open the detail modal; topics are fetched lazily and
                        // best-effort right here
                        if let Some(card) = app.selected_card().cloned() {
                            let topics = panel.topics_for(&card.project.name).await;
                            app.open_modal(card, topics);
                        }
                    }
                    KeyCode::Char('r') => {
                        if panel.can_retry() {
                            terminal.draw(|f| {
                                crate::ui::render(f, &mut app, &gitfolio_core::PanelState::Loading)
                            })?;
                            panel.load().await;
                            collection = panel.cards().map(<[_]>::to_vec).unwrap_or_default();
                            app.sync_collection(&collection);
                        }
                    }
                    KeyCode::Char('d') => {
                        let dark = app.toggle_dark_mode();
                        config.ui.dark_mode = dark;
                        if let Err(e) = config.save() {
                            warn!("Failed to persist dark-mode preference: {}", e);
                            app.set_status(format!("Failed to save preference: {}", e), true);
                        }
                    }
                    KeyCode::Char('c') => {
                        if email_client.is_some() {
                            app.open_contact_form();
                        } else {
                            app.set_status("Contact form is not configured", true);
                        }
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
