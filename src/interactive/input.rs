//! Normalized player input and the on-screen keyboard
//!
//! Physical key presses and clicks on the rendered keyboard both end up as an
//! [`InputEvent`]. The keyboard geometry lives here so that drawing and mouse
//! hit-testing always agree.

use ratatui::layout::{Position, Rect};

/// What the player asked for, independent of where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// A lowercase letter
    Letter(char),
    Delete,
    Submit,
}

impl InputEvent {
    /// Caption drawn on the on-screen key
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c) => c.to_ascii_uppercase().to_string(),
            Self::Delete => "⌫".to_string(),
            Self::Submit => "⏎".to_string(),
        }
    }

    const fn width(self) -> u16 {
        match self {
            Self::Letter(_) => KEY_WIDTH,
            Self::Delete | Self::Submit => WIDE_KEY_WIDTH,
        }
    }
}

pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

const KEY_WIDTH: u16 = 3;
const WIDE_KEY_WIDTH: u16 = 5;
const KEY_GAP: u16 = 1;
const ROW_STRIDE: u16 = 2;

/// Rows needed to draw the keyboard
pub const KEYBOARD_HEIGHT: u16 = ROW_STRIDE * (KEYBOARD_ROWS.len() as u16 - 1) + 1;

/// Keys in display order; the last row is framed by delete and submit
#[must_use]
pub fn keyboard_layout() -> Vec<Vec<InputEvent>> {
    let last = KEYBOARD_ROWS.len() - 1;
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let letters = row.chars().map(InputEvent::Letter);
            if i == last {
                std::iter::once(InputEvent::Delete)
                    .chain(letters)
                    .chain(std::iter::once(InputEvent::Submit))
                    .collect()
            } else {
                letters.collect()
            }
        })
        .collect()
}

/// Screen position of every key that fits inside `area`, rows centered
#[must_use]
pub fn key_rects(area: Rect) -> Vec<(InputEvent, Rect)> {
    let mut rects = Vec::new();

    for (i, row) in keyboard_layout().into_iter().enumerate() {
        let y = area.y + ROW_STRIDE * i as u16;
        if y >= area.bottom() {
            break;
        }

        let row_width: u16 =
            row.iter().map(|key| key.width()).sum::<u16>() + KEY_GAP * (row.len() as u16 - 1);
        let mut x = area.x + area.width.saturating_sub(row_width) / 2;

        for key in row {
            let rect = Rect::new(x, y, key.width(), 1);
            if rect.right() <= area.right() {
                rects.push((key, rect));
            }
            x += key.width() + KEY_GAP;
        }
    }

    rects
}

/// The key under a click, if any
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<InputEvent> {
    let position = Position::new(column, row);
    key_rects(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn layout_is_qwerty_with_action_keys() {
        let layout = keyboard_layout();
        assert_eq!(layout.len(), 3);
        assert_eq!(layout[0].len(), 10);
        assert_eq!(layout[1].len(), 9);
        assert_eq!(layout[2].first(), Some(&InputEvent::Delete));
        assert_eq!(layout[2].last(), Some(&InputEvent::Submit));
        assert_eq!(layout[2][1], InputEvent::Letter('z'));

        let letters = layout
            .iter()
            .flatten()
            .filter(|key| matches!(key, InputEvent::Letter(_)))
            .count();
        assert_eq!(letters, 26);
    }

    #[test]
    fn labels() {
        assert_eq!(InputEvent::Letter('q').label(), "Q");
        assert_eq!(InputEvent::Delete.label(), "⌫");
        assert_eq!(InputEvent::Submit.label(), "⏎");
    }

    #[test]
    fn rows_are_centered() {
        let area = Rect::new(0, 10, 60, KEYBOARD_HEIGHT);
        let rects = key_rects(area);
        assert_eq!(rects.len(), 28);

        // Top row: 10 keys of 3 plus 9 gaps = 39 wide, centered in 60
        let (first, rect) = rects[0];
        assert_eq!(first, InputEvent::Letter('q'));
        assert_eq!(rect, Rect::new(10, 10, 3, 1));

        let (delete, rect) = rects[19];
        assert_eq!(delete, InputEvent::Delete);
        assert_eq!(rect.y, 14);
    }

    #[test]
    fn click_hits_key() {
        let area = Rect::new(0, 10, 60, KEYBOARD_HEIGHT);
        assert_eq!(key_at(area, 10, 10), Some(InputEvent::Letter('q')));
        assert_eq!(key_at(area, 12, 10), Some(InputEvent::Letter('q')));
        assert_eq!(key_at(area, 14, 10), Some(InputEvent::Letter('w')));
        for (key, rect) in key_rects(area) {
            assert_eq!(key_at(area, rect.x, rect.y), Some(key));
        }
    }

    #[test]
    fn click_between_keys_misses() {
        let area = Rect::new(0, 10, 60, KEYBOARD_HEIGHT);
        // Gap after 'q'
        assert_eq!(key_at(area, 13, 10), None);
        // Blank line between rows
        assert_eq!(key_at(area, 12, 11), None);
        assert_eq!(key_at(area, 0, 0), None);
    }

    #[test]
    fn narrow_area_drops_keys_that_do_not_fit() {
        let area = Rect::new(0, 0, 20, KEYBOARD_HEIGHT);
        let rects = key_rects(area);
        assert!(rects.len() < 28);
        assert!(rects.iter().all(|(_, rect)| rect.right() <= area.right()));
    }
}
