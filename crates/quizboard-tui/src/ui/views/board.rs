//! Compact leaderboard variant: one row per ranked entry with the session
//! user's row highlighted. Keeps its last-good rows across a failed cycle;
//! the error itself is surfaced in the sidebar.

use crate::ui::format::{format_score, truncate_with_ellipsis};
use crate::ui::{theme, App};
use quizboard_core::constants::DEFAULT_PHOTO;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "LEADERBOARD",
        Style::default()
            .fg(theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    if app.entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "Select the difficulty level and domain.",
            Style::default().fg(theme::TEXT_MUTED),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    for entry in &app.entries {
        let is_self = app.is_self(entry);
        // The session user gets their resolved photo; everyone else gets
        // the bundled placeholder on this variant.
        let photo = if is_self {
            app.self_photo.as_str()
        } else {
            DEFAULT_PHOTO
        };

        let row_style = if is_self {
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT_PRIMARY)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("#{:<4}", entry.rank), row_style),
            Span::styled(format!("{:<20}", truncate_with_ellipsis(&entry.user_id, 18)), row_style),
            Span::styled(
                format!("Score: {:<6}", format_score(entry.max_score)),
                Style::default().fg(theme::ACCENT_SUCCESS),
            ),
            Span::styled(
                truncate_with_ellipsis(photo, area.width.saturating_sub(36) as usize),
                Style::default().fg(theme::TEXT_DIM),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
