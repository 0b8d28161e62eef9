//! Collapsible navigation menu.
//!
//! States: `closed` ⇄ `open`. Every transition goes through [`NavController::open`]
//! or [`NavController::close`], which keep the rendered state, the scroll lock
//! and focus in step with the flag.
//!
//! Focus rules:
//! - opening captures the focused element and moves focus into the menu on the
//!   next frame;
//! - closing returns focus to the captured element, or to the toggle when that
//!   element can no longer take focus;
//! - while open, Tab and Shift+Tab wrap around the menu's focusable elements.

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    Tab { shift: bool },
    Other,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str, shift: bool) -> Self {
        match key {
            "Escape" => Self::Escape,
            "Tab" => Self::Tab { shift },
            _ => Self::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    PassThrough,
    PreventDefault,
}

/// Lookup of focus targets inside the menu.
pub trait FocusableElementFinder {
    type Element: Clone + PartialEq;

    /// Focusable, visible descendants of the menu, in document order.
    fn focusable_in_menu(&self) -> Vec<Self::Element>;

    fn active_element(&self) -> Option<Self::Element>;
}

/// Host side of the menu: rendering, scroll lock and focus moves.
pub trait MenuSurface: FocusableElementFinder {
    /// Reflect `open` on the toggle (`aria-expanded`, label) and the menu class.
    fn render(&self, open: bool);

    fn set_scroll_locked(&self, locked: bool);

    /// Move focus to `element`. Returns false if it did not take focus.
    fn focus(&self, element: &Self::Element) -> bool;

    fn focus_toggle(&self);

    /// Focus the first menu link once the open state has been laid out.
    fn focus_first_link_next_frame(&self);
}

pub struct NavController<S: MenuSurface> {
    surface: S,
    breakpoint: f64,
    open: bool,
    last_focused: Option<S::Element>,
}

impl<S: MenuSurface> NavController<S> {
    /// Bind to a surface; the menu always starts closed.
    pub fn new(surface: S, breakpoint: f64) -> Self {
        surface.render(false);
        Self {
            surface,
            breakpoint,
            open: false,
            last_focused: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.surface.render(true);
        self.last_focused = self.surface.active_element();
        self.surface.set_scroll_locked(true);
        self.surface.focus_first_link_next_frame();
    }

    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.surface.render(false);
        self.surface.set_scroll_locked(false);

        let restored = self
            .last_focused
            .take()
            .is_some_and(|el| self.surface.focus(&el));
        if !restored {
            self.surface.focus_toggle();
        }
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Document-level click. `inside` is true when the target lies within the
    /// menu or the toggle.
    pub fn on_document_click(&mut self, inside: bool) {
        if self.open && !inside {
            debug!("closing menu on outside click");
            self.close();
        }
    }

    /// Click inside the menu; closing on link clicks covers in-page anchors.
    pub fn on_menu_click(&mut self, on_link: bool) {
        if on_link {
            self.close();
        }
    }

    pub fn on_key(&mut self, key: NavKey) -> KeyOutcome {
        if !self.open {
            return KeyOutcome::PassThrough;
        }

        match key {
            NavKey::Escape => {
                self.close();
                KeyOutcome::PassThrough
            }
            NavKey::Tab { shift } => self.trap_tab(shift),
            NavKey::Other => KeyOutcome::PassThrough,
        }
    }

    pub fn on_resize(&mut self, viewport_width: f64) {
        if self.open && viewport_width > self.breakpoint {
            debug!("closing menu above breakpoint ({viewport_width})");
            self.close();
        }
    }

    pub fn on_hash_change(&mut self) {
        self.close();
    }

    fn trap_tab(&self, shift: bool) -> KeyOutcome {
        let focusables = self.surface.focusable_in_menu();
        let (Some(first), Some(last)) = (focusables.first(), focusables.last()) else {
            return KeyOutcome::PassThrough;
        };
        let active = self.surface.active_element();

        let target = match (shift, active.as_ref()) {
            (true, Some(el)) if el == first => last,
            (false, Some(el)) if el == last => first,
            _ => return KeyOutcome::PassThrough,
        };
        self.surface.focus(target);
        KeyOutcome::PreventDefault
    }
}
