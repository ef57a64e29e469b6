use super::super::app::App;
use super::content::{build_info_panel, build_step_lines, expected_actions, status_message};
use super::sidebar::build_step_sidebar;
use super::TITLE;
use crate::widgets::validity_style;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    // Main layout: Title | Main Body | Key Legend
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title bar
                Constraint::Min(10),   // Main body (3-panel)
                Constraint::Length(4), // Status + key legend
            ]
            .as_ref(),
        )
        .split(f.area());

    let project = app.wizard.project().project_name.trim();
    let details_valid = app.wizard.details_valid();
    let title_line = Line::from(vec![
        Span::styled(TITLE, Style::default().fg(Color::White)),
        Span::raw(" | "),
        Span::styled(
            if project.is_empty() { "(untitled)" } else { project },
            validity_style(details_valid),
        ),
    ]);
    let title = Block::default().borders(Borders::ALL).title(title_line);
    f.render_widget(title, main_chunks[0]);

    // Three-panel layout: Sidebar | Content | Info Panel
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(20), // Left: Step sidebar
                Constraint::Percentage(55), // Center: Main content
                Constraint::Percentage(25), // Right: Info panel
            ]
            .as_ref(),
        )
        .split(main_chunks[1]);

    let sidebar = Paragraph::new(build_step_sidebar(app))
        .block(Block::default().borders(Borders::ALL).title("Steps"));
    f.render_widget(sidebar, body_chunks[0]);

    // Row-less steps scroll; form steps keep the focused row on screen.
    let lines = build_step_lines(app);
    let visible = body_chunks[1].height.saturating_sub(2) as usize;
    let has_rows = !app.rows().is_empty();
    let skip = if !has_rows {
        (app.scroll as usize).min(lines.len().saturating_sub(1))
    } else {
        app.focus.saturating_sub(visible.saturating_sub(1))
    };
    let focus_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let items = lines
        .into_iter()
        .enumerate()
        .skip(skip)
        .map(|(idx, line)| {
            if has_rows && idx == app.focus {
                ListItem::new(line).style(focus_style)
            } else {
                ListItem::new(line)
            }
        })
        .collect::<Vec<_>>();
    let content = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(app.current_step().title()),
    );
    f.render_widget(content, body_chunks[1]);

    let info_panel = Paragraph::new(build_info_panel(app))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Info"));
    f.render_widget(info_panel, body_chunks[2]);

    // Key legend (always visible, context-specific)
    let status_style = if app.reset_pending || app.quit_pending || app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let legend_text = vec![
        Line::from(Span::styled(status_message(app), status_style)),
        Line::from(expected_actions(app.current_step())),
    ];
    let legend =
        Paragraph::new(legend_text).block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(legend, main_chunks[2]);
}
