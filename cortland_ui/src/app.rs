use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use cortland::Cortland;
use termion::event::Key;
use termion::raw::IntoRawMode;
use termion::screen::AlternateScreen;
use tui::backend::TermionBackend;
use tui::Terminal;

use crate::events::{Event, Events};
use crate::keys;
use crate::screen;

/// Roughly 60 redraw opportunities per second.
const TICK_RATE: Duration = Duration::from_micros(16_667);

pub fn run(mut machine: Cortland) -> Result<()> {
    // Terminal initialization
    let stdout = io::stdout().into_raw_mode()?;
    let stdout = AlternateScreen::from(stdout);
    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let events = Events::new(TICK_RATE);
    let mut last_tick = Instant::now();
    let mut needs_redraw = true;

    loop {
        match events.next()? {
            Event::Input(key) => match key {
                Key::Ctrl('q') => break,
                Key::Ctrl('r') => machine.reset(),
                key => {
                    if let Some(code) = keys::translate(key) {
                        machine.set_key(code);
                    }
                }
            },
            Event::Tick => {
                let now = Instant::now();
                machine.tick(now - last_tick);
                last_tick = now;

                if machine.take_video_dirty() {
                    needs_redraw = true;
                }

                if needs_redraw {
                    terminal.draw(|frame| screen::draw(frame, &machine))?;
                    needs_redraw = false;
                }
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
