//! Terminal events and the actions they turn into

use super::input::InputEvent;
use crate::word_source::WordSourceError;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;
use tokio::sync::mpsc;

/// Everything the main loop reacts to
#[derive(Debug)]
pub enum Action {
    Input(InputEvent),
    /// Left click at a terminal cell; resolved against the on-screen keyboard
    Click { column: u16, row: u16 },
    Redraw,
    Quit,
    SecretWordFetched(Result<String, WordSourceError>),
}

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Forward terminal events to `tx` from a blocking thread
///
/// The reader stops once the receiving side is dropped.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Action>) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(POLL_INTERVAL) {
                Ok(false) => {}
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Some(action) = map_event(&event)
                            && tx.send(action).is_err()
                        {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::error!(%err, "failed to read terminal event");
                        break;
                    }
                },
                Err(err) => {
                    tracing::error!(%err, "failed to poll terminal events");
                    break;
                }
            }
        }
    })
}

/// Translate a raw terminal event; unrecognized input maps to `None`
#[must_use]
pub fn map_event(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(Action::Click {
                column: mouse.column,
                row: mouse.row,
            })
        }
        Event::Resize(..) => Some(Action::Redraw),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Action> {
    // Only presses (Windows also reports releases)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Esc => Action::Quit,
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            Action::Input(InputEvent::Letter(c.to_ascii_lowercase()))
        }
        KeyCode::Backspace => Action::Input(InputEvent::Delete),
        KeyCode::Enter => Action::Input(InputEvent::Submit),
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn input(event: &Event) -> Option<InputEvent> {
        match map_event(event) {
            Some(Action::Input(input)) => Some(input),
            _ => None,
        }
    }

    #[test]
    fn letters_are_lowercased() {
        assert_eq!(input(&press(KeyCode::Char('a'))), Some(InputEvent::Letter('a')));
        assert_eq!(input(&press(KeyCode::Char('Q'))), Some(InputEvent::Letter('q')));
    }

    #[test]
    fn editing_keys() {
        assert_eq!(input(&press(KeyCode::Backspace)), Some(InputEvent::Delete));
        assert_eq!(input(&press(KeyCode::Enter)), Some(InputEvent::Submit));
    }

    #[test]
    fn quit_keys() {
        assert!(matches!(map_event(&press(KeyCode::Esc)), Some(Action::Quit)));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(map_event(&ctrl_c), Some(Action::Quit)));
    }

    #[test]
    fn unrecognized_input_is_ignored() {
        assert!(map_event(&press(KeyCode::Char('1'))).is_none());
        assert!(map_event(&press(KeyCode::Char('é'))).is_none());
        assert!(map_event(&press(KeyCode::Tab)).is_none());
        assert!(map_event(&press(KeyCode::Left)).is_none());
        assert!(map_event(&Event::FocusGained).is_none());
    }

    #[test]
    fn key_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(map_event(&release).is_none());
    }

    #[test]
    fn left_click_carries_position() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert!(matches!(
            map_event(&click),
            Some(Action::Click { column: 12, row: 7 })
        ));

        let right = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert!(map_event(&right).is_none());
    }

    #[test]
    fn resize_redraws() {
        assert!(matches!(map_event(&Event::Resize(80, 24)), Some(Action::Redraw)));
    }
}
