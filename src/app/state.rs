use fltk::{dialog, frame::Frame, prelude::*};

use super::domain::counter::Counter;
use super::domain::form::{self, FormInput};
use super::domain::theme::{Palette, ThemeMode};
use super::messages::Message;
use crate::ui::main_window::{PageWidgets, create_error_box};
use crate::ui::theme::apply_theme;

/// Main application coordinator.
///
/// Owns the widget handles plus all mutable page state: the counter, the
/// current theme mode, and the lazily created error frame. Each of the
/// three page behaviors is independent; the only state shared between any
/// two events is the counter value, and all handlers run to completion on
/// the UI thread.
pub struct AppState {
    pub widgets: PageWidgets,
    pub counter: Counter,
    pub theme: ThemeMode,
    error_box: Option<Frame>,
}

impl AppState {
    pub fn new(mut widgets: PageWidgets) -> Self {
        // Every run starts light with the counter at zero; nothing is
        // persisted or detected from the system.
        apply_theme(&mut widgets, &Palette::light());
        Self {
            widgets,
            counter: Counter::new(),
            theme: ThemeMode::Light,
            error_box: None,
        }
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::FormSubmit => self.handle_submit(),
            Message::CounterIncrement => {
                let value = self.counter.increment();
                self.widgets.count_display.set_label(&value.to_string());
            }
            Message::CounterDecrement => {
                // At the floor the display is left untouched
                if let Some(value) = self.counter.decrement() {
                    self.widgets.count_display.set_label(&value.to_string());
                }
            }
            Message::ToggleDarkMode => {
                self.theme = self.theme.toggled();
                apply_theme(&mut self.widgets, &Palette::for_mode(self.theme));
            }
        }
    }

    fn handle_submit(&mut self) {
        let input = FormInput {
            name: self.widgets.name_input.value(),
            email: self.widgets.email_input.value(),
            message: self.widgets.message_input.value(),
        };
        let errors = form::validate(&input);

        if errors.is_empty() {
            // Clear any earlier messages, but never create the frame just
            // to clear it
            if let Some(error_box) = &mut self.error_box {
                error_box.set_label("");
            }
            // Blocks until the user dismisses it, like the page's alert()
            dialog::message_default("Form submitted successfully!");
            self.widgets.name_input.set_value("");
            self.widgets.email_input.set_value("");
            self.widgets.message_input.set_value("");
        } else {
            self.ensure_error_box().set_label(&errors.join("\n"));
        }

        self.widgets.wind.redraw();
    }

    /// Get the error frame, creating it on first use. Repeated invalid
    /// submissions keep reusing the same frame.
    fn ensure_error_box(&mut self) -> &mut Frame {
        if self.error_box.is_none() {
            self.error_box = Some(create_error_box(&mut self.widgets.contact_section));
        }
        self.error_box.as_mut().expect("error box exists after creation")
    }
}
