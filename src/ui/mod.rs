pub mod colors;
pub mod results;
pub mod round_view;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use hexrecall::app::{App, Screen};
use hexrecall::round::Phase;

pub fn render(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // main panel
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    match (app.screen, app.session.as_ref()) {
        (Screen::Playing, Some(session)) => round_view::render(f, app, session, outer[0]),
        (Screen::Results, Some(session)) => results::render(f, session, outer[0]),
        _ => render_start(f, app, outer[0]),
    }
    render_status_bar(f, app, outer[1]);
}

fn render_start(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Hex Recall ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let config = &app.config;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Memorize the color, then type its hex code.",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Mode: ", Style::default().fg(colors::MODAL_TEXT_DIM)),
            Span::raw(config.mode.to_string()),
            Span::styled("  Rounds: ", Style::default().fg(colors::MODAL_TEXT_DIM)),
            Span::raw(config.total_rounds.to_string()),
            Span::styled("  Countdown: ", Style::default().fg(colors::MODAL_TEXT_DIM)),
            Span::raw(config.countdown_ticks.to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start",
            Style::default().fg(colors::ACCENT_MUTED),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let hint = |key: &'static str, label: &'static str| {
        [
            Span::styled(key, Style::default().fg(Color::DarkGray)),
            Span::raw(label),
        ]
    };

    let mut spans = Vec::new();
    match app.screen {
        Screen::Start => {
            spans.extend(hint(" [enter]", "start "));
            spans.extend(hint("[q]", "uit "));
        }
        Screen::Playing => {
            let phase = app.session.as_ref().map(|s| s.phase());
            match phase {
                Some(Phase::Guessing) => {
                    spans.extend(hint(" [0-9a-f]", "type "));
                    spans.extend(hint("[bksp]", "delete "));
                    spans.extend(hint("[enter]", "submit "));
                }
                Some(Phase::Scored) => {
                    spans.extend(hint(" [enter]", "next round "));
                }
                _ => spans.push(Span::raw(" memorize... ")),
            }
            spans.extend(hint("[esc]", "quit "));
        }
        Screen::Results => {
            spans.extend(hint(" [r]", "eplay "));
            spans.extend(hint("[q]", "uit "));
        }
    }

    f.render_widget(
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use hexrecall::color::DifficultyMode;
    use hexrecall::config::GameConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(backend: &TestBackend) -> String {
        let buf = backend.buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn start_screen_shows_settings_and_hints() {
        let app = App::with_seed(GameConfig::for_mode(DifficultyMode::Constrained), 7);
        let mut terminal = Terminal::new(TestBackend::new(70, 12)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let text = screen_text(terminal.backend());
        assert!(text.contains("Hex Recall"));
        assert!(text.contains("Mode: constrained"));
        assert!(text.contains("Countdown: 5"));
        assert!(text.contains("[enter]start"));
    }

    #[test]
    fn playing_screen_dispatches_to_round_view() {
        let mut app = App::with_seed(GameConfig::for_mode(DifficultyMode::Standard), 7);
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let mut terminal = Terminal::new(TestBackend::new(70, 16)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let text = screen_text(terminal.backend());
        assert!(text.contains("Round 1/5"));
        assert!(text.contains("memorize"));
    }
}
