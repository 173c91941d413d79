pub mod about;

use fltk::{app, prelude::*, window::Window};

/// Run a dialog's event loop, closing the dialog if the app starts quitting
/// while it is open.
pub fn run_dialog(dialog: &Window) {
    while dialog.shown() {
        app::wait();
        if app::should_program_quit() {
            let mut d = dialog.clone();
            d.hide();
        }
    }
}
