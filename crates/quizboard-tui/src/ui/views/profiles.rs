//! Podium-style profiles variant: the top three entries side by side,
//! remaining entries listed underneath. A failed cycle clears the list and
//! shows the error in place.

use crate::ui::format::{format_score, truncate_with_ellipsis};
use crate::ui::{theme, App};
use quizboard_core::constants::DEFAULT_PHOTO;
use quizboard_core::LeaderboardEntry;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PODIUM_HEIGHT: u16 = 8;

fn rank_color(rank: usize) -> Color {
    match rank {
        1 => theme::RANK_GOLD,
        2 => theme::RANK_SILVER,
        3 => theme::RANK_BRONZE,
        _ => theme::TEXT_MUTED,
    }
}

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if let Some(error) = &app.last_error {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Error fetching leaderboard data: {}", error),
                Style::default().fg(theme::ACCENT_ERROR),
            )),
        ];
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    if app.entries.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Select the difficulty level and domain.",
                Style::default().fg(theme::TEXT_MUTED),
            )),
        ];
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    let sections =
        Layout::vertical([Constraint::Length(PODIUM_HEIGHT), Constraint::Min(0)]).split(area);

    render_podium(f, app, sections[0]);
    render_remainder(f, app, sections[1]);
}

fn render_podium(f: &mut Frame, app: &App, area: Rect) {
    let top: Vec<&LeaderboardEntry> = app.entries.iter().take(3).collect();
    let columns = Layout::horizontal(vec![
        Constraint::Ratio(1, top.len() as u32);
        top.len()
    ])
    .split(area);

    for (entry, column) in top.iter().zip(columns.iter()) {
        let width = column.width.saturating_sub(2) as usize;
        let lines = vec![
            Line::from(Span::styled(
                format!("#{}", entry.rank),
                Style::default()
                    .fg(rank_color(entry.rank))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate_with_ellipsis(&entry.username, width),
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Domain: {}", truncate_with_ellipsis(&entry.domain, width)),
                Style::default().fg(theme::TEXT_MUTED),
            )),
            Line::from(Span::styled(
                format!("Difficulty: {}", entry.difficulty_level),
                Style::default().fg(theme::TEXT_MUTED),
            )),
            Line::from(Span::styled(
                format!("Max Score: {}", format_score(entry.max_score)),
                Style::default().fg(theme::ACCENT_SUCCESS),
            )),
            Line::from(Span::styled(
                photo_label(entry, width),
                Style::default().fg(theme::TEXT_DIM),
            )),
        ];
        f.render_widget(Paragraph::new(lines), *column);
    }
}

fn render_remainder(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for entry in app.entries.iter().skip(3) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("# {:<4}", entry.rank),
                Style::default().fg(theme::TEXT_MUTED),
            ),
            Span::styled(
                format!("{:<18}", truncate_with_ellipsis(&entry.username, 16)),
                Style::default().fg(theme::TEXT_PRIMARY),
            ),
            Span::styled(
                format!("{:<14}", truncate_with_ellipsis(&entry.domain, 12)),
                Style::default().fg(theme::TEXT_MUTED),
            ),
            Span::styled(
                format!("{:<12}", entry.difficulty_level),
                Style::default().fg(theme::TEXT_MUTED),
            ),
            Span::styled(
                format!("Max Score: {}", format_score(entry.max_score)),
                Style::default().fg(theme::ACCENT_SUCCESS),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn photo_label(entry: &LeaderboardEntry, width: usize) -> String {
    if entry.photo == DEFAULT_PHOTO {
        "(no photo)".to_string()
    } else {
        truncate_with_ellipsis(&entry.photo, width)
    }
}
