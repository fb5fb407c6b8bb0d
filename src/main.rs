use fltk::{app, prelude::*};

use pagelet::app::{AppState, Message, Result};
use pagelet::ui::main_window::build_page;

fn main() -> Result<()> {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let widgets = build_page(&sender)?;
    let mut state = AppState::new(widgets);
    state.widgets.wind.show();

    // Widget callbacks only send messages; all mutation happens here, one
    // message at a time.
    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            state.handle(msg);
        }
    }

    Ok(())
}
