use fltk::{app, enums::Event, prelude::*};

use writher::app::infrastructure::logging;
use writher::app::services::text_ops::font_families;
use writher::app::{AppSettings, AppState, Message};
use writher::ui::main_window::build_main_window;
use writher::ui::menu::build_menu;

fn main() {
    let _log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    };

    let app = app::App::default().with_scheme(app::Scheme::Gtk).load_system_fonts();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let families = font_families(app::fonts());
    tracing::info!(fonts = families.len(), version = env!("CARGO_PKG_VERSION"), "starting Writher");

    let mut widgets = build_main_window(&sender, &settings, &families);

    // Escape also fires the window callback; only a real close request counts.
    let s = sender;
    widgets.wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    let mut state = AppState::new(widgets, sender, settings);
    build_menu(&mut state.menu, &sender, &state.settings, state.dark_mode);
    state.apply_settings();

    if let Some(path) = std::env::args().nth(1) {
        state.open_path(path);
    }

    state.window.show();

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        match msg {
            Message::FileNew => state.file_new(),
            Message::FileOpen => state.file_open(),
            Message::FileSave => state.file_save(),
            Message::FileSaveAs => state.file_save_as(),
            Message::Export(format) => state.export(format),
            Message::FileQuit | Message::WindowClose => {
                if state.request_close() {
                    app.quit();
                }
            }

            Message::EditUndo => state.undo(),
            Message::EditRedo => state.redo(),
            Message::EditCut => state.cut(),
            Message::EditCopy => state.copy(),
            Message::EditPaste => state.paste(),
            Message::SelectAll => state.select_all(),

            Message::ToggleWordWrap => state.toggle_word_wrap(),
            Message::ToggleDarkMode => state.toggle_dark_mode(),
            Message::ToggleStatsPane => state.toggle_stats_pane(),
            Message::ToggleFullscreen => state.toggle_fullscreen(),
            Message::WindowResized(width) => state.window_resized(width),

            Message::SetFont(family) => state.set_font(family),
            Message::SetFontSize(size) => state.set_font_size(size),

            Message::ShowAbout => state.show_about(),

            Message::BufferModified => state.refresh_stats(),
        }
    }
}
