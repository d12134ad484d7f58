use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use hexrecall::app::App;
use hexrecall::color::HexColor;
use hexrecall::round::{RoundRecord, RoundState};
use hexrecall::scoring::Verdict;
use hexrecall::session::Session;

use super::colors;

pub fn render(f: &mut Frame, app: &App, session: &Session, area: Rect) {
    let block = Block::default()
        .title(format!(
            " Round {}/{} ",
            session.round_number(),
            session.total_rounds()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::ACCENT_MUTED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match session.round().state() {
        RoundState::Memorizing { remaining } => render_memorizing(f, session.target(), *remaining, inner),
        RoundState::Guessing { partial } => render_guessing(f, app, session, partial, inner),
        RoundState::Scored(record) => render_scored(f, record, inner),
    }
}

/// Fill `area` with `color` and center `lines` over it.
fn swatch(f: &mut Frame, color: HexColor, lines: Vec<Line>, area: Rect) {
    let pad = area.height.saturating_sub(lines.len() as u16) / 2;
    let mut text: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    text.extend(lines);
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().bg(colors::swatch(color)).fg(colors::ink(color))),
        area,
    );
}

fn render_memorizing(f: &mut Frame, target: HexColor, remaining: u32, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "memorize this color",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{remaining}")),
    ];
    swatch(f, target, lines, area);
}

fn render_guessing(f: &mut Frame, app: &App, session: &Session, partial: &str, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    // Nothing typed yet: keep the swatch neutral rather than black.
    match session.preview().filter(|_| partial.len() > 1) {
        Some(preview) => swatch(f, preview, vec![Line::from("preview")], rows[0]),
        None => f.render_widget(
            Paragraph::new(vec![Line::from(""), Line::from("type the hex code")])
                .alignment(Alignment::Center)
                .style(Style::default().bg(colors::MODAL_BG).fg(colors::MODAL_TEXT_DIM)),
            rows[0],
        ),
    }

    let shaking = app.shake > 0;
    let input_style = if shaking {
        Style::default().fg(colors::SHAKE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    // Alternate the indent while the cue is active.
    let indent = if shaking && app.shake % 2 == 1 { "  " } else { "" };

    let mut spans = vec![
        Span::raw(indent),
        Span::styled(partial.to_string(), input_style),
        Span::styled("_", Style::default().fg(colors::ACCENT_MUTED)),
    ];
    if let Some(reason) = session.signal() {
        spans.push(Span::styled(
            format!("  {reason}"),
            Style::default().fg(colors::SHAKE),
        ));
    }

    let max = session.config().max_input_length();
    let hint = format!(
        "{} mode, up to {} digits",
        session.mode(),
        max.saturating_sub(1)
    );
    f.render_widget(
        Paragraph::new(vec![
            Line::from(spans),
            Line::from(Span::styled(hint, Style::default().fg(colors::MODAL_TEXT_DIM))),
        ])
        .alignment(Alignment::Center),
        rows[1],
    );
}

fn render_scored(f: &mut Frame, record: &RoundRecord, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // guess
            Constraint::Percentage(40), // target
            Constraint::Min(2),         // score
        ])
        .split(area);

    let describe = |label: &str, color: HexColor| {
        vec![
            Line::from(Span::styled(
                format!("{label} {}", color.as_hex()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(color.to_hsv().to_string()),
        ]
    };
    swatch(f, record.guess(), describe("Your guess", record.guess()), rows[0]);
    swatch(f, record.target(), describe("Target", record.target()), rows[1]);

    let score = record.score();
    let verdict = Verdict::from_score(score);
    let lines = vec![
        Line::from(Span::styled(
            format!("{score:.2} / 10"),
            Style::default()
                .fg(colors::score_color(score))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            verdict.remark(),
            Style::default().fg(colors::MODAL_TEXT_DIM),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        rows[2],
    );
}
