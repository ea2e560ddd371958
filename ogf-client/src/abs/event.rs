//! Window events.
//!
//! SDL reports far more than a simple application cares about. [`Event`]
//! keeps the handful the framework supports; everything else is dropped
//! during translation.

use sdl2::{
    event::{Event as SdlEvent, WindowEvent},
    keyboard::{Keycode, Mod},
    mouse::MouseButton,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The user asked to close the window.
    Closed,
    Resized {
        width: u32,
        height: u32,
    },
    FocusGained,
    FocusLost,
    KeyPressed {
        keycode: Keycode,
        keymod: Mod,
        repeat: bool,
    },
    KeyReleased {
        keycode: Keycode,
        keymod: Mod,
    },
    TextEntered(String),
    MouseMoved {
        x: i32,
        y: i32,
        dx: i32,
        dy: i32,
    },
    MouseButtonPressed {
        button: MouseButton,
        x: i32,
        y: i32,
    },
    MouseButtonReleased {
        button: MouseButton,
        x: i32,
        y: i32,
    },
    MouseWheelScrolled {
        x: f32,
        y: f32,
    },
}

impl Event {
    /// Translates an SDL event, returning `None` for events OGF ignores.
    pub fn from_sdl(event: &SdlEvent) -> Option<Self> {
        let event = match event {
            SdlEvent::Quit { .. } => Event::Closed,
            SdlEvent::Window { win_event, .. } => match *win_event {
                WindowEvent::Close => Event::Closed,
                WindowEvent::Resized(width, height) => Event::Resized {
                    width: width.max(0) as u32,
                    height: height.max(0) as u32,
                },
                WindowEvent::FocusGained => Event::FocusGained,
                WindowEvent::FocusLost => Event::FocusLost,
                _ => return None,
            },
            SdlEvent::KeyDown {
                keycode: Some(keycode),
                keymod,
                repeat,
                ..
            } => Event::KeyPressed {
                keycode: *keycode,
                keymod: *keymod,
                repeat: *repeat,
            },
            SdlEvent::KeyUp {
                keycode: Some(keycode),
                keymod,
                ..
            } => Event::KeyReleased {
                keycode: *keycode,
                keymod: *keymod,
            },
            SdlEvent::TextInput { text, .. } => Event::TextEntered(text.clone()),
            SdlEvent::MouseMotion {
                x, y, xrel, yrel, ..
            } => Event::MouseMoved {
                x: *x,
                y: *y,
                dx: *xrel,
                dy: *yrel,
            },
            SdlEvent::MouseButtonDown {
                mouse_btn, x, y, ..
            } => Event::MouseButtonPressed {
                button: *mouse_btn,
                x: *x,
                y: *y,
            },
            SdlEvent::MouseButtonUp {
                mouse_btn, x, y, ..
            } => Event::MouseButtonReleased {
                button: *mouse_btn,
                x: *x,
                y: *y,
            },
            SdlEvent::MouseWheel {
                precise_x,
                precise_y,
                ..
            } => Event::MouseWheelScrolled {
                x: *precise_x,
                y: *precise_y,
            },
            _ => return None,
        };
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_is_closed() {
        assert_eq!(
            Event::from_sdl(&SdlEvent::Quit { timestamp: 0 }),
            Some(Event::Closed)
        );
    }

    #[test]
    fn test_window_events() {
        let resized = SdlEvent::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::Resized(1280, 720),
        };
        assert_eq!(
            Event::from_sdl(&resized),
            Some(Event::Resized {
                width: 1280,
                height: 720
            })
        );

        let moved = SdlEvent::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::Moved(10, 10),
        };
        assert_eq!(Event::from_sdl(&moved), None);
    }

    #[test]
    fn test_text_input() {
        let text = SdlEvent::TextInput {
            timestamp: 0,
            window_id: 1,
            text: "ogf".to_string(),
        };
        assert_eq!(
            Event::from_sdl(&text),
            Some(Event::TextEntered("ogf".to_string()))
        );
    }

    #[test]
    fn test_wheel_keeps_fractional_scroll() {
        let wheel = SdlEvent::MouseWheel {
            timestamp: 0,
            window_id: 1,
            which: 0,
            x: 0,
            y: 0,
            direction: sdl2::mouse::MouseWheelDirection::Normal,
            precise_x: 0.25,
            precise_y: -1.5,
            mouse_x: 0,
            mouse_y: 0,
        };
        assert_eq!(
            Event::from_sdl(&wheel),
            Some(Event::MouseWheelScrolled { x: 0.25, y: -1.5 })
        );
    }

    #[test]
    fn test_unknown_events_are_dropped() {
        assert_eq!(
            Event::from_sdl(&SdlEvent::AppTerminating { timestamp: 0 }),
            None
        );
    }
}
