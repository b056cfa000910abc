//! Input Events
//!
//! The three event types the delegated listener handles: click, keydown
//! and focus.

use fos_dom::NodeId;

/// Key value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Home,
    End,
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
    PageUp,
    PageDown,
    Character(char),
    Other(String),
}

impl Key {
    /// Parse from a DOM `KeyboardEvent.key` string
    pub fn parse(s: &str) -> Self {
        match s {
            "Home" => Self::Home,
            "End" => Self::End,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            s => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Other(s.to_string()),
                }
            }
        }
    }

    /// Map a legacy `keyCode`
    pub fn from_key_code(code: u32) -> Self {
        match code {
            33 => Self::PageUp,
            34 => Self::PageDown,
            35 => Self::End,
            36 => Self::Home,
            37 => Self::ArrowLeft,
            38 => Self::ArrowUp,
            39 => Self::ArrowRight,
            40 => Self::ArrowDown,
            other => Self::Other(format!("KeyCode{other}")),
        }
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyModifiers {
    pub const NONE: KeyModifiers = KeyModifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: KeyModifiers = KeyModifiers {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };
}

/// A key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardInput {
    pub key: Key,
    pub modifiers: KeyModifiers,
}

impl KeyboardInput {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn with_ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::CTRL,
        }
    }
}

/// Event kinds routed through the delegated listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Click,
    KeyDown(KeyboardInput),
    Focus,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::KeyDown(_) => "keydown",
            Self::Focus => "focus",
        }
    }
}

/// An event delivered to the document-level listener
#[derive(Debug, Clone)]
pub struct AccordionEvent {
    pub kind: EventKind,
    pub target: NodeId,
    default_prevented: bool,
}

impl AccordionEvent {
    pub fn new(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            default_prevented: false,
        }
    }

    pub fn click(target: NodeId) -> Self {
        Self::new(EventKind::Click, target)
    }

    pub fn key_down(target: NodeId, input: KeyboardInput) -> Self {
        Self::new(EventKind::KeyDown(input), target)
    }

    pub fn focus(target: NodeId) -> Self {
        Self::new(EventKind::Focus, target)
    }

    /// Suppress the host's default action (scrolling, form submission)
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What the listener did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Not an accordion event
    Ignored,
    /// State changed, default action allowed
    Handled,
    /// State changed and the default action was suppressed
    HandledPreventDefault,
}

impl EventOutcome {
    pub fn is_handled(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
