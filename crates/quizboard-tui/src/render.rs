use crate::ui::views::{board, profiles};
use crate::ui::{theme, App, View};
use quizboard_core::{DifficultyFilter, DomainFilter};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::horizontal([Constraint::Length(26), Constraint::Min(0)]).split(f.area());

    render_sidebar(f, app, chunks[0]);
    match app.view {
        View::Board => board::render(f, app, chunks[1]),
        View::Profiles => profiles::render(f, app, chunks[1]),
    }
}

fn selectable(label: String, selected: bool) -> Line<'static> {
    let style = if selected {
        Style::default()
            .fg(theme::ACCENT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::TEXT_MUTED)
    };
    Line::from(Span::styled(label, style))
}

fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "LEADERBOARD",
        Style::default()
            .fg(theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "─".repeat(area.width.saturating_sub(2) as usize),
        Style::default().fg(theme::TEXT_DIM),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Select Difficulty:",
        Style::default().fg(theme::TEXT_PRIMARY),
    )));
    let difficulties = [
        ('0', DifficultyFilter::All),
        ('1', DifficultyFilter::Easy),
        ('2', DifficultyFilter::Medium),
        ('3', DifficultyFilter::Difficult),
    ];
    for (key, difficulty) in difficulties {
        lines.push(selectable(
            format!("  [{}] {}", key, difficulty.label()),
            app.filters.difficulty == difficulty,
        ));
    }
    lines.push(Line::from(""));

    if app.show_domain_selection {
        lines.push(Line::from(Span::styled(
            "Domains: [d]",
            Style::default().fg(theme::TEXT_PRIMARY),
        )));
        lines.push(selectable(
            "  All".to_string(),
            app.filters.domain == DomainFilter::All,
        ));
        for domain in &app.unique_domains {
            lines.push(selectable(
                format!("  {}", domain),
                app.filters.domain.label() == domain,
            ));
        }
        lines.push(Line::from(""));
    }

    if let Some(bucket) = app.filters.score_bucket {
        lines.push(Line::from(vec![
            Span::styled("Score: [s] ", Style::default().fg(theme::TEXT_PRIMARY)),
            Span::styled(
                bucket.label(),
                Style::default()
                    .fg(theme::ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
    }

    if app.loading {
        lines.push(Line::from(Span::styled(
            "fetching...",
            Style::default().fg(theme::TEXT_DIM),
        )));
    }
    if let Some(error) = &app.last_error {
        lines.push(Line::from(Span::styled(
            format!("error: {}", error),
            Style::default().fg(theme::ACCENT_ERROR),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab view  r refresh",
        Style::default().fg(theme::TEXT_DIM),
    )));
    lines.push(Line::from(Span::styled(
        "q quit",
        Style::default().fg(theme::TEXT_DIM),
    )));

    f.render_widget(Paragraph::new(lines), area);
}
