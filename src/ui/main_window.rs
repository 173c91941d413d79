use fltk::{
    app::Sender,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::messages::Message;
use crate::app::domain::settings::AppSettings;
use crate::app::services::text_ops::{APP_NAME, stats_pane_width};
use super::stats_pane::StatsPane;
use super::toolbar::{TOOLBAR_HEIGHT, Toolbar};

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub toolbar: Toolbar,
    pub body: Flex,
    pub stats_pane: StatsPane,
    pub text_editor: TextEditor,
}

/// Menu bar on top, font toolbar below it, then the statistics pane to the
/// left of the editor.
pub fn build_main_window(sender: &Sender<Message>, settings: &AppSettings, font_families: &[String]) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, APP_NAME);
    wind.set_xclass("Writher");

    let mut flex = Flex::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let toolbar = Toolbar::new(font_families, &settings.font_family, settings.font_size as i32, sender);
    flex.fixed(&toolbar.widget, TOOLBAR_HEIGHT);

    let mut body = Flex::default();
    body.set_type(FlexType::Row);

    let stats_pane = StatsPane::new();
    body.fixed(&stats_pane.widget, stats_pane_width(WINDOW_WIDTH));

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);

    body.end();
    flex.end();
    wind.resizable(&flex);
    wind.end();

    let s = *sender;
    wind.resize_callback(move |_, _, _, w, _| s.send(Message::WindowResized(w)));

    MainWidgets {
        wind,
        menu,
        toolbar,
        body,
        stats_pane,
        text_editor,
    }
}
