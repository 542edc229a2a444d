//! Keyboard and mouse mapping
//!
//! Keys and button clicks become [`Action`]s. Whether an action is accepted
//! is up to the driver; this module only translates.

use crate::driver::Command;
use crate::engine::{Algorithm, Direction};
use crate::sequence::SIZE_STEP;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Run(Command),
    /// Select an algorithm and start it right away (button click)
    SelectAndStart(Algorithm),
    Faster,
    Slower,
    Quit,
}

/// Clickable controls, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Algorithm(Algorithm),
    Ascending,
    Descending,
    NewList,
    Grow,
    Shrink,
}

impl Button {
    pub fn all() -> Vec<Button> {
        let mut buttons: Vec<Button> = Algorithm::ALL.into_iter().map(Button::Algorithm).collect();
        buttons.extend([
            Button::Ascending,
            Button::Descending,
            Button::NewList,
            Button::Grow,
            Button::Shrink,
        ]);
        buttons
    }

    pub fn label(self) -> &'static str {
        match self {
            Button::Algorithm(algorithm) => algorithm.short_name(),
            Button::Ascending => "Ascending",
            Button::Descending => "Descending",
            Button::NewList => "New List",
            Button::Grow => "+ Size",
            Button::Shrink => "- Size",
        }
    }

    pub fn action(self) -> Action {
        match self {
            Button::Algorithm(algorithm) => Action::SelectAndStart(algorithm),
            Button::Ascending => Action::Run(Command::SetDirection(Direction::Ascending)),
            Button::Descending => Action::Run(Command::SetDirection(Direction::Descending)),
            Button::NewList => Action::Run(Command::Reset),
            Button::Grow => Action::Run(Command::Resize(SIZE_STEP as isize)),
            Button::Shrink => Action::Run(Command::Resize(-(SIZE_STEP as isize))),
        }
    }
}

/// Map a key press to an action. Unbound keys map to `None`.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char(' ') => Action::Run(Command::Start),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'r' => Action::Run(Command::Reset),
            'a' => Action::Run(Command::SetDirection(Direction::Ascending)),
            'd' => Action::Run(Command::SetDirection(Direction::Descending)),
            'b' => Action::Run(Command::Select(Algorithm::Bubble)),
            'i' => Action::Run(Command::Select(Algorithm::Insertion)),
            's' => Action::Run(Command::Select(Algorithm::Selection)),
            'm' => Action::Run(Command::Select(Algorithm::Merge)),
            'q' => Action::Run(Command::Select(Algorithm::Quick)),
            'x' => Action::Run(Command::Select(Algorithm::CocktailShaker)),
            'h' => Action::Run(Command::Select(Algorithm::Heap)),
            '+' | '=' => Action::Run(Command::Resize(SIZE_STEP as isize)),
            '-' => Action::Run(Command::Resize(-(SIZE_STEP as isize))),
            ']' => Action::Faster,
            '[' => Action::Slower,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

/// Lay buttons out left to right, wrapping into new rows as needed.
///
/// Buttons that do not fit vertically are dropped.
pub fn layout_buttons(area: Rect) -> Vec<(Button, Rect)> {
    let mut placed = Vec::new();
    let mut x = area.x;
    let mut y = area.y;

    for button in Button::all() {
        let width = button.label().len() as u16 + 2;
        if x > area.x && x + width > area.right() {
            x = area.x;
            y += 1;
        }
        if y >= area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width.min(area.right().saturating_sub(x)), 1);
        placed.push((button, rect));
        x += width + 1;
    }
    placed
}

const MAX_BUTTON_ROWS: u16 = 16;

/// Number of rows [`layout_buttons`] needs for a given width
pub fn button_rows(width: u16) -> u16 {
    layout_buttons(Rect::new(0, 0, width, MAX_BUTTON_ROWS))
        .last()
        .map(|(_, rect)| rect.y + 1)
        .unwrap_or(0)
}

/// Find the button under a terminal cell
pub fn button_at(buttons: &[(Button, Rect)], column: u16, row: u16) -> Option<Button> {
    buttons
        .iter()
        .find(|(_, rect)| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
        .map(|(button, _)| *button)
}
