use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use hexrecall::report::SessionReport;
use hexrecall::session::Session;

use super::colors;

pub fn render(f: &mut Frame, session: &Session, area: Rect) {
    let report = SessionReport::from_session(session);

    let block = Block::default()
        .title(format!(" Results ({} mode) ", report.mode))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(inner);

    let mut lines = vec![Line::from("")];
    for row in &report.rounds {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  #{:<3}", row.round),
                Style::default().fg(colors::MODAL_TEXT_DIM),
            ),
            Span::styled(
                "  ",
                Style::default().bg(colors::swatch(row.target)),
            ),
            Span::raw(format!(" {} ", row.target.as_hex())),
            Span::styled(
                "  ",
                Style::default().bg(colors::swatch(row.guess)),
            ),
            Span::raw(format!(" {} ", row.guess.as_hex())),
            Span::styled(
                format!("{:>6.2}", row.score),
                Style::default().fg(colors::score_color(row.score)),
            ),
        ]));
    }
    f.render_widget(Paragraph::new(lines), rows[0]);

    let total = Line::from(vec![
        Span::raw("You scored "),
        Span::styled(
            report.display_score(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" out of {}", report.display_max())),
    ]);
    f.render_widget(
        Paragraph::new(vec![total]).alignment(Alignment::Center),
        rows[1],
    );
}
