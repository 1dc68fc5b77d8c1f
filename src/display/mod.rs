//! Display surfaces the controller renders into
//!
//! The controller always updates the paused flag before rendering, so
//! implementations may apply the flag's styling when `render` is called.

pub mod json;
pub mod terminal;

pub use json::JsonLinesDisplay;
pub use terminal::TerminalDisplay;

/// A text-bearing element plus a presentational "paused" toggle
pub trait DisplaySurface {
    /// Replace the displayed text
    fn render(&mut self, text: &str);

    /// Toggle the paused styling hook
    fn set_paused(&mut self, paused: bool);
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for Box<T> {
    fn render(&mut self, text: &str) {
        (**self).render(text)
    }

    fn set_paused(&mut self, paused: bool) {
        (**self).set_paused(paused)
    }
}
