use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use termion::event::Key;
use termion::input::TermRead;

pub enum Event {
    Input(Key),
    Tick,
}

/// Multiplexes terminal keys and a fixed-rate render tick onto one
/// channel so the main loop can block on a single receiver.
pub struct Events {
    rx: mpsc::Receiver<Event>,
}

impl Events {
    pub fn new(tick_rate: Duration) -> Events {
        let (tx, rx) = mpsc::channel();

        let key_tx = tx.clone();
        thread::spawn(move || {
            let stdin = io::stdin();
            for key in stdin.keys().flatten() {
                if key_tx.send(Event::Input(key)).is_err() {
                    return;
                }
            }
        });

        thread::spawn(move || loop {
            if tx.send(Event::Tick).is_err() {
                return;
            }
            thread::sleep(tick_rate);
        });

        Events { rx }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
