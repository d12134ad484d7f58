use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Unified application event.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Time elapsed since the previous tick.
    Tick(Duration),
}

/// Spawn a thread that polls crossterm key events and sends them to the channel.
pub fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    std::thread::spawn(move || loop {
        if event::poll(Duration::from_millis(50)).unwrap_or(false) {
            if let Ok(Event::Key(key)) = event::read() {
                // Some terminals report releases too; only presses drive the game.
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if tx.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });
}

/// Spawn a tick timer that sends Tick events at the given interval.
pub fn spawn_tick_timer(tx: mpsc::Sender<AppEvent>, interval: Duration) {
    std::thread::spawn(move || {
        let mut last = Instant::now();
        loop {
            std::thread::sleep(interval);
            let now = Instant::now();
            if tx.send(AppEvent::Tick(now - last)).is_err() {
                break;
            }
            last = now;
        }
    });
}
