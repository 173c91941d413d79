use fltk::{
    app::{self, Sender},
    dialog,
    enums::{Cursor, Font},
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextEditor, WrapMode},
    window::Window,
};

use super::domain::{AppSettings, Document, Message, TextStats, ThemeMode};
use super::infrastructure::platform::detect_system_dark_mode;
use super::services::export::{Converter, ExportFormat, ensure_extension, export_document};
use super::services::file_io::{parent_dir, read_text_file, write_text_file};
use super::services::text_ops::{stats_pane_width, window_title};
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::file_dialogs::{native_export_dialog, native_open_dialog, native_save_dialog};
use crate::ui::main_window::MainWidgets;
use crate::ui::stats_pane::StatsPane;
use crate::ui::theme::apply_theme;
use crate::ui::toolbar::Toolbar;

/// Answer to the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseChoice {
    Save,
    Discard,
    Cancel,
}

impl CloseChoice {
    /// Map the button index from `dialog::choice2_default`. Closing the
    /// prompt without picking a button counts as Cancel.
    pub fn from_dialog(choice: Option<i32>) -> Self {
        match choice {
            Some(0) => Self::Save,
            Some(1) => Self::Discard,
            _ => Self::Cancel,
        }
    }
}

pub struct AppState {
    pub document: Document,
    pub editor: TextEditor,
    pub window: Window,
    pub menu: MenuBar,
    pub toolbar: Toolbar,
    pub body: Flex,
    pub stats_pane: StatsPane,
    pub sender: Sender<Message>,
    pub settings: AppSettings,
    pub stats: TextStats,
    pub dark_mode: bool,
    pub fullscreen: bool,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>, settings: AppSettings) -> Self {
        let MainWidgets {
            wind,
            menu,
            toolbar,
            body,
            stats_pane,
            mut text_editor,
        } = widgets;

        let document = Document::new(sender);
        text_editor.set_buffer(document.buffer.clone());

        let dark_mode = resolve_dark_mode(settings.theme_mode);

        Self {
            document,
            editor: text_editor,
            window: wind,
            menu,
            toolbar,
            body,
            stats_pane,
            sender,
            settings,
            stats: TextStats::default(),
            dark_mode,
            fullscreen: false,
        }
    }

    /// Push the loaded settings into the widgets. Call once after `new`.
    pub fn apply_settings(&mut self) {
        self.apply_theme();
        self.editor.set_text_font(resolve_font(&self.settings.font_family));
        self.editor.set_text_size(self.settings.font_size as i32);
        self.apply_word_wrap();
        self.apply_stats_pane_visibility();
        self.refresh_stats();
    }

    // --- Statistics and title ---

    /// Recount the whole buffer and update the pane and the title.
    pub fn refresh_stats(&mut self) {
        let text = self.document.text();
        self.stats = TextStats::compute(&text);
        self.stats_pane.update(&self.stats);
        self.update_window_title_for(&text);
    }

    fn update_window_title_for(&mut self, text: &str) {
        let title = window_title(self.document.file_path.as_deref(), text, self.document.is_dirty());
        if self.window.label() != title {
            self.window.set_label(&title);
        }
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        if !self.confirm_discard("Start a new document?") {
            return;
        }
        self.document.clear();
        self.refresh_stats();
    }

    pub fn file_open(&mut self) {
        if !self.confirm_discard("Open another file?") {
            return;
        }
        if let Some(path) = native_open_dialog(self.settings.last_directory.as_deref()) {
            self.open_path(path);
        }
    }

    /// Load `path` into the document, replacing its contents.
    pub fn open_path(&mut self, path: String) {
        match read_text_file(&path) {
            Ok(content) => {
                self.remember_directory(&path);
                self.document.load(path, &content);
                self.editor.set_insert_position(0);
                self.editor.show_insert_position();
                self.refresh_stats();
            }
            Err(e) => {
                tracing::error!(path = %path, "open failed: {}", e);
                dialog::alert_default(&format!("Error opening file: {}", e));
            }
        }
    }

    pub fn file_save(&mut self) {
        match self.document.file_path.clone() {
            Some(path) => self.save_to(path),
            None => self.file_save_as(),
        }
    }

    pub fn file_save_as(&mut self) {
        let preset = self.document.file_path.is_none().then_some("Untitled.txt");
        if let Some(path) = native_save_dialog(self.settings.last_directory.as_deref(), preset) {
            self.save_to(path);
        }
    }

    fn save_to(&mut self, path: String) {
        let text = self.document.text();
        match write_text_file(&path, &text) {
            Ok(()) => {
                self.remember_directory(&path);
                self.document.mark_saved(path);
                self.update_window_title_for(&text);
            }
            Err(e) => {
                tracing::error!(path = %path, "save failed: {}", e);
                dialog::alert_default(&format!("Error saving file: {}", e));
            }
        }
    }

    pub fn export(&mut self, format: ExportFormat) {
        let chosen = native_export_dialog(
            &format.dialog_title(),
            &format.file_filter(),
            self.settings.last_directory.as_deref(),
        );
        let Some(chosen) = chosen else {
            return;
        };
        let output = ensure_extension(&chosen, format);
        self.remember_directory(&chosen);

        let text = self.document.text();
        let converter = Converter::from_settings(&self.settings);

        self.window.set_cursor(Cursor::Wait);
        app::flush();
        let result = export_document(&text, format, &output, &converter);
        self.window.set_cursor(Cursor::Default);

        match result {
            Ok(()) => dialog::message_default("Export complete"),
            Err(e) => {
                tracing::error!(format = format.label(), "export failed: {}", e);
                dialog::alert_default(&format!("{} export failed:\n{}", format.label(), e));
            }
        }
    }

    /// Ask before throwing away unsaved edits. Returns `true` when it is fine
    /// to continue: nothing was dirty, the user discarded, or the save worked.
    fn confirm_discard(&mut self, question: &str) -> bool {
        if !self.document.is_dirty() {
            return true;
        }
        let choice = dialog::choice2_default(
            &format!("You have unsaved changes.\n{} Your changes will be lost unless you save them.", question),
            "Save",
            "Discard",
            "Cancel",
        );
        match CloseChoice::from_dialog(choice) {
            CloseChoice::Save => {
                self.file_save();
                !self.document.is_dirty()
            }
            CloseChoice::Discard => true,
            CloseChoice::Cancel => false,
        }
    }

    /// Handle quit or window close. Returns `true` if the app should exit.
    pub fn request_close(&mut self) -> bool {
        let should_close = self.confirm_discard("Close Writher anyway?");
        if should_close {
            self.persist_settings();
        }
        should_close
    }

    fn remember_directory(&mut self, path: &str) {
        if let Some(dir) = parent_dir(path) {
            self.settings.last_directory = Some(dir);
        }
    }

    fn persist_settings(&self) {
        if let Err(e) = self.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }

    // --- Edit ---

    pub fn undo(&mut self) {
        let _ = self.editor.undo();
    }

    pub fn redo(&mut self) {
        let _ = self.editor.redo();
    }

    pub fn cut(&mut self) {
        self.editor.cut();
    }

    pub fn copy(&mut self) {
        self.editor.copy();
    }

    pub fn paste(&mut self) {
        self.editor.paste();
    }

    pub fn select_all(&mut self) {
        let len = self.document.buffer.length();
        self.document.buffer.select(0, len);
    }

    // --- View ---

    pub fn toggle_word_wrap(&mut self) {
        self.settings.word_wrap_enabled = !self.settings.word_wrap_enabled;
        self.apply_word_wrap();
        self.persist_settings();
    }

    fn apply_word_wrap(&mut self) {
        if self.settings.word_wrap_enabled {
            self.editor.wrap_mode(WrapMode::AtBounds, 0);
        } else {
            self.editor.wrap_mode(WrapMode::None, 0);
        }
        self.update_menu_checkbox("View/Word Wrap", self.settings.word_wrap_enabled);
        self.editor.redraw();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.settings.theme_mode = if self.dark_mode { ThemeMode::Dark } else { ThemeMode::Light };
        self.apply_theme();
        self.persist_settings();
    }

    fn apply_theme(&mut self) {
        apply_theme(
            &mut self.editor,
            &mut self.window,
            &mut self.menu,
            &mut self.toolbar,
            &mut self.stats_pane,
            self.dark_mode,
        );
        self.update_menu_checkbox("View/Dark Mode", self.dark_mode);
    }

    pub fn toggle_stats_pane(&mut self) {
        self.settings.stats_pane_visible = !self.settings.stats_pane_visible;
        self.apply_stats_pane_visibility();
        self.persist_settings();
    }

    /// The pane is hidden while fullscreen regardless of the setting.
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        self.window.fullscreen(self.fullscreen);
        self.update_menu_checkbox("View/Fullscreen", self.fullscreen);
        self.apply_stats_pane_visibility();
    }

    fn apply_stats_pane_visibility(&mut self) {
        let visible = self.settings.stats_pane_visible && !self.fullscreen;
        if visible {
            self.stats_pane.widget.show();
            self.body.fixed(&self.stats_pane.widget, stats_pane_width(self.window.w()));
        } else {
            self.stats_pane.widget.hide();
            self.body.fixed(&self.stats_pane.widget, 0);
        }
        self.update_menu_checkbox("View/Statistics Pane", self.settings.stats_pane_visible);
        self.body.layout();
        self.body.redraw();
    }

    pub fn window_resized(&mut self, width: i32) {
        if self.stats_pane.widget.visible() {
            self.body.fixed(&self.stats_pane.widget, stats_pane_width(width));
            self.body.layout();
        }
    }

    // --- Format ---

    pub fn set_font(&mut self, family: String) {
        self.editor.set_text_font(resolve_font(&family));
        self.editor.redraw();
        self.settings.font_family = family;
        self.persist_settings();
    }

    pub fn set_font_size(&mut self, size: i32) {
        self.editor.set_text_size(size);
        self.editor.redraw();
        self.settings.font_size = size.max(1) as u32;
        self.persist_settings();
    }

    // --- Help ---

    pub fn show_about(&self) {
        show_about_dialog();
    }

    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }
}

fn resolve_dark_mode(mode: ThemeMode) -> bool {
    match mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    }
}

/// Look up a loaded FLTK font by family name, falling back to Courier.
fn resolve_font(family: &str) -> Font {
    match app::fonts().iter().position(|f| f.trim() == family) {
        Some(idx) => Font::by_index(idx),
        None => {
            tracing::debug!("Font '{}' not loaded, using Courier", family);
            Font::Courier
        }
    }
}
