// UI rendering logic
use crate::contact::{ContactField, ContactForm};
use crate::{App, InputMode, ProjectModal};
use gitfolio_core::models::ProjectCard;
use gitfolio_core::panel::{LoadFailure, PanelState};
use gitfolio_core::theme::{self, ThemeColors};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Card cell dimensions inside the grid
const CARD_HEIGHT: u16 = 7;
const CARD_MIN_WIDTH: u16 = 38;

fn color(c: theme::Color) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

pub fn render(frame: &mut Frame, app: &mut App, panel: &PanelState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Language selector
            Constraint::Min(5),    // Card grid / panels
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_search_input(frame, app, chunks[1]);
    render_language_selector(frame, app, chunks[2]);
    render_content(frame, app, panel, chunks[3]);
    render_status_bar(frame, app, chunks[4]);

    // Overlays last so they sit on top of the grid
    if let Some(modal) = app.modal.clone() {
        render_modal(frame, app, &modal);
    }
    if let Some(form) = app.contact.clone() {
        render_contact_form(frame, app, &form);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;

    let auth_badge = if app.authenticated {
        Span::styled(" authenticated ", Style::default().fg(color(colors.success)))
    } else {
        Span::styled(" unauthenticated ", Style::default().fg(color(colors.muted)))
    };

    let header = Line::from(vec![
        Span::styled(
            " gitfolio ",
            Style::default()
                .fg(color(colors.title))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("| "),
        Span::styled(
            format!("@{}", app.username),
            Style::default().fg(color(colors.subtitle)),
        ),
        Span::raw(" |"),
        auth_badge,
    ]);

    let widget = Paragraph::new(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(colors.border))),
    );
    frame.render_widget(widget, area);
}

fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let focused = app.input_mode == InputMode::Searching;

    let border_color = if focused {
        color(colors.border_focused)
    } else {
        color(colors.border)
    };

    let text = if focused {
        format!("{}\u{2588}", app.search_input) // block cursor
    } else if app.search_input.is_empty() {
        "Press / to search projects...".to_string()
    } else {
        app.search_input.clone()
    };

    let style = if app.search_input.is_empty() && !focused {
        Style::default().fg(color(colors.muted))
    } else {
        Style::default().fg(color(colors.foreground))
    };

    let widget = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(widget, area);
}

fn render_language_selector(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;

    let mut spans = vec![Span::styled(
        " Language: ",
        Style::default().fg(color(colors.subtitle)),
    )];

    for (i, option) in app.language_options.iter().enumerate() {
        let style = if i == app.language_index {
            Style::default()
                .fg(color(colors.selected))
                .bg(color(colors.selected_bg))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color(colors.muted))
        };
        spans.push(Span::styled(format!(" {} ", option), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_content(frame: &mut Frame, app: &mut App, panel: &PanelState, area: Rect) {
    match panel {
        PanelState::Idle | PanelState::Loading => render_loading(frame, app, area),
        PanelState::Failed(LoadFailure::RateLimit) => render_rate_limit_panel(frame, app, area),
        PanelState::Failed(failure) => render_error_panel(frame, app, failure, area),
        PanelState::Loaded(_) => {
            if app.visible.is_empty() {
                render_no_matches(frame, app, area);
            } else {
                render_card_grid(frame, app, area);
            }
        }
    }
}

fn render_loading(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let widget = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Loading projects...",
            Style::default().fg(color(colors.accent)),
        )),
        Line::from(Span::styled(
            format!("Fetching repositories for @{}", app.username),
            Style::default().fg(color(colors.muted)),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(colors.border))),
    );
    frame.render_widget(widget, area);
}

/// Generic all-or-nothing failure panel with the retry hint
fn render_error_panel(frame: &mut Frame, app: &App, failure: &LoadFailure, area: Rect) {
    let colors = &app.theme.colors;
    let widget = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Failed to load projects from GitHub",
            Style::default()
                .fg(color(colors.error))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            failure.to_string(),
            Style::default().fg(color(colors.foreground)),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to try again",
            Style::default().fg(color(colors.accent)),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Error ")
            .border_style(Style::default().fg(color(colors.error))),
    );
    frame.render_widget(widget, area);
}

/// The rate limit gets its own, more descriptive panel
fn render_rate_limit_panel(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let quota_hint = if app.authenticated {
        "Your authenticated quota is spent; it resets within the hour."
    } else {
        "Unauthenticated access allows 60 requests per hour. Configure a \
         personal access token to raise the limit to 5000."
    };

    let widget = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "GitHub API Rate Limit Exceeded",
            Style::default()
                .fg(color(colors.warning))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            quota_hint,
            Style::default().fg(color(colors.foreground)),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to try again",
            Style::default().fg(color(colors.accent)),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Rate Limit ")
            .border_style(Style::default().fg(color(colors.warning))),
    );
    frame.render_widget(widget, area);
}

fn render_no_matches(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let widget = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No projects found matching your criteria.",
            Style::default().fg(color(colors.muted)),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(colors.border))),
    );
    frame.render_widget(widget, area);
}

fn render_card_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = (area.width / CARD_MIN_WIDTH).max(1) as usize;
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;

    let total_rows = (app.visible.len() + columns - 1) / columns;
    let selected_row = app.selected_index / columns;

    // Scroll so the selected row stays on screen
    let first_row = if selected_row >= visible_rows {
        selected_row + 1 - visible_rows
    } else {
        0
    };
    let last_row = (first_row + visible_rows).min(total_rows);

    let row_constraints: Vec<Constraint> = (first_row..last_row)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    let column_constraints: Vec<Constraint> = (0..columns)
        .map(|_| Constraint::Ratio(1, columns as u32))
        .collect();

    for (area_idx, row) in (first_row..last_row).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints.clone())
            .split(row_areas[area_idx]);

        for col in 0..columns {
            let card_idx = row * columns + col;
            if let Some(card) = app.visible.get(card_idx) {
                let selected = card_idx == app.selected_index;
                render_card(frame, card, selected, &app.theme.colors, cells[col]);
            }
        }
    }
}

fn render_card(frame: &mut Frame, card: &ProjectCard, selected: bool, colors: &ThemeColors, area: Rect) {
    let border_color = if selected {
        color(colors.border_focused)
    } else {
        color(colors.border)
    };

    let cover_line = match &card.cover {
        Some(_) => Line::from(Span::styled(
            "\u{25a3} cover.png",
            Style::default().fg(color(colors.accent)),
        )),
        None => Line::from(Span::styled(
            format!("[ {} ]", card.placeholder_letter()),
            Style::default().fg(color(colors.muted)),
        )),
    };

    let language_badge = match card.project.language.as_deref() {
        Some(lang) => {
            let badge_color = theme::language_color(lang)
                .map(color)
                .unwrap_or_else(|| color(colors.muted));
            vec![
                Span::styled("\u{25cf} ", Style::default().fg(badge_color)),
                Span::styled(lang.to_string(), Style::default().fg(color(colors.language))),
                Span::raw("  "),
            ]
        }
        None => Vec::new(),
    };

    let mut badges = language_badge;
    badges.push(Span::styled(
        format!("\u{2605} {}", card.project.stars),
        Style::default().fg(color(colors.stars)),
    ));
    badges.push(Span::raw("  "));
    badges.push(Span::styled(
        format!("\u{2442} {}", card.project.forks),
        Style::default().fg(color(colors.forks)),
    ));

    let description = truncate(card.project.description_or_placeholder(), area.width as usize);

    let lines = vec![
        cover_line,
        Line::from(Span::styled(
            card.project.name.clone(),
            Style::default()
                .fg(color(colors.title))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            description,
            Style::default().fg(color(colors.subtitle)),
        )),
        Line::from(""),
        Line::from(badges),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(widget, area);
}

fn render_modal(frame: &mut Frame, app: &App, modal: &ProjectModal) {
    let colors = &app.theme.colors;
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let project = &modal.card.project;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        project.description_or_placeholder().to_string(),
        Style::default().fg(color(colors.foreground)),
    )));
    lines.push(Line::from(""));

    if let Some(cover) = &modal.card.cover {
        lines.push(Line::from(vec![
            Span::styled("Cover: ", Style::default().fg(color(colors.subtitle))),
            Span::styled(cover.clone(), Style::default().fg(color(colors.muted))),
        ]));
        lines.push(Line::from(""));
    }

    if let Some(lang) = project.language.as_deref() {
        let badge_color = theme::language_color(lang)
            .map(color)
            .unwrap_or_else(|| color(colors.muted));
        lines.push(Line::from(vec![
            Span::styled("Language: ", Style::default().fg(color(colors.subtitle))),
            Span::styled("\u{25cf} ", Style::default().fg(badge_color)),
            Span::styled(lang.to_string(), Style::default().fg(color(colors.language))),
        ]));
        lines.push(Line::from(""));
    }

    // The topics section only exists when there are topics to show
    if !modal.topics.is_empty() {
        let mut spans = vec![Span::styled(
            "Topics: ",
            Style::default().fg(color(colors.subtitle)),
        )];
        for topic in &modal.topics {
            spans.push(Span::styled(
                format!(" {} ", topic),
                Style::default()
                    .fg(color(colors.topic))
                    .bg(color(colors.selected_bg)),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled(
            format!("\u{2605} {} stars", project.stars),
            Style::default().fg(color(colors.stars)),
        ),
        Span::raw("   "),
        Span::styled(
            format!("\u{2442} {} forks", project.forks),
            Style::default().fg(color(colors.forks)),
        ),
        Span::raw("   "),
        Span::styled(
            format!("\u{25c9} {} watchers", project.watchers),
            Style::default().fg(color(colors.watchers)),
        ),
    ]));
    lines.push(Line::from(""));

    let mut link_spans = vec![Span::styled(
        "o: open on GitHub",
        Style::default().fg(color(colors.accent)),
    )];
    if project.homepage.is_some() {
        link_spans.push(Span::raw("   "));
        link_spans.push(Span::styled(
            "h: open homepage",
            Style::default().fg(color(colors.accent)),
        ));
    }
    link_spans.push(Span::raw("   "));
    link_spans.push(Span::styled(
        "Esc: close",
        Style::default().fg(color(colors.muted)),
    ));
    lines.push(Line::from(link_spans));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", project.name))
            .title_style(
                Style::default()
                    .fg(color(colors.title))
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(color(colors.border_focused))),
    );
    frame.render_widget(widget, area);
}

fn render_contact_form(frame: &mut Frame, app: &App, form: &ContactForm) {
    let colors = &app.theme.colors;
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let field_line = |label: &str, value: &str, active: bool| -> Vec<Line<'static>> {
        let label_style = if active {
            Style::default()
                .fg(color(colors.border_focused))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color(colors.subtitle))
        };
        let text = if active {
            format!("{}\u{2588}", value)
        } else {
            value.to_string()
        };
        vec![
            Line::from(Span::styled(label.to_string(), label_style)),
            Line::from(Span::styled(
                text,
                Style::default().fg(color(colors.foreground)),
            )),
            Line::from(""),
        ]
    };

    let active = form.current_field();
    let mut lines = Vec::new();
    lines.extend(field_line(
        "Your name",
        &form.from_name,
        active == ContactField::FromName,
    ));
    lines.extend(field_line(
        "Your email",
        &form.reply_to,
        active == ContactField::ReplyTo,
    ));
    lines.extend(field_line(
        "Message",
        &form.message,
        active == ContactField::Message,
    ));

    let hint = if form.sending {
        "Sending..."
    } else if form.is_valid() {
        "Tab: next field   Enter: send   Esc: cancel"
    } else {
        "Email and message are required   Tab: next field   Esc: cancel"
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(color(colors.muted)),
    )));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Contact ")
            .border_style(Style::default().fg(color(colors.border_focused))),
    );
    frame.render_widget(widget, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;

    let line = if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(color(colors.error))
        } else {
            Style::default().fg(color(colors.success))
        };
        Line::from(Span::styled(format!(" {}", status.text), style))
    } else {
        let hints = match app.input_mode {
            InputMode::Searching => " Esc: done | type to filter",
            InputMode::Contact => " Tab: next field | Enter: send | Esc: cancel",
            InputMode::Normal => {
                " q: quit | /: search | \u{2190}/\u{2192}: language | Enter: details | d: dark mode | c: contact"
            }
        };
        Line::from(Span::styled(hints, Style::default().fg(color(colors.muted))))
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn truncate(text: &str, max_width: usize) -> String {
    let budget = max_width.saturating_sub(5);
    if text.chars().count() <= budget {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(budget.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Helper to build a centered rect using a percentage of the available area
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
