use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

/// Input events the viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Key press
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button pressed
    Click { x: u16, y: u16, button: MouseButton },
    /// Mouse wheel; negative is up
    Scroll { x: u16, y: u16, delta: i16 },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    pub fn key(key: Key) -> Self {
        Self::Key {
            key,
            modifiers: Modifiers::new(),
        }
    }

    pub fn char(c: char) -> Self {
        Self::key(Key::Char(c))
    }

    /// Translates a raw crossterm event. Key releases and repeats, mouse
    /// motion and unsupported keys yield `None`.
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    log::trace!("ignoring non-press key event {:?}", key_event.code);
                    return None;
                }
                Some(Self::Key {
                    key: Key::from_code(key_event.code)?,
                    modifiers: key_event.modifiers.into(),
                })
            }
            CrosstermEvent::Mouse(mouse_event) => {
                let x = mouse_event.column;
                let y = mouse_event.row;
                match mouse_event.kind {
                    MouseEventKind::Down(button) => Some(Self::Click {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::ScrollUp => Some(Self::Scroll { x, y, delta: -1 }),
                    MouseEventKind::ScrollDown => Some(Self::Scroll { x, y, delta: 1 }),
                    _ => None,
                }
            }
            CrosstermEvent::Resize(width, height) => Some(Self::Resize { width, height }),
            _ => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    pub fn from_code(code: crossterm::event::KeyCode) -> Option<Self> {
        use crossterm::event::KeyCode;
        Some(match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => return None,
        })
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
