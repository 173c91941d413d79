use fltk::{
    enums::Color,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use super::stats_pane::StatsPane;
use super::toolbar::Toolbar;

/// Colors shared by the side pane and the toolbar.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub panel: Color,
    pub text: Color,
    pub muted: Color,
}

impl Palette {
    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark {
            Self {
                panel: Color::from_rgb(35, 35, 35),
                text: Color::from_rgb(220, 220, 220),
                muted: Color::from_rgb(150, 150, 150),
            }
        } else {
            Self {
                panel: Color::from_rgb(240, 240, 240),
                text: Color::Black,
                muted: Color::from_rgb(100, 100, 100),
            }
        }
    }
}

pub fn apply_theme(
    editor: &mut TextEditor,
    window: &mut Window,
    menu: &mut MenuBar,
    toolbar: &mut Toolbar,
    stats_pane: &mut StatsPane,
    is_dark: bool,
) {
    let palette = Palette::for_mode(is_dark);

    if is_dark {
        editor.set_color(Color::from_rgb(30, 30, 30));
        editor.set_text_color(Color::from_rgb(220, 220, 220));
        editor.set_cursor_color(Color::from_rgb(255, 255, 255));
        editor.set_selection_color(Color::from_rgb(70, 70, 100));
        window.set_color(Color::from_rgb(25, 25, 25));
        menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
    } else {
        editor.set_color(Color::White);
        editor.set_text_color(Color::Black);
        editor.set_cursor_color(Color::Black);
        editor.set_selection_color(Color::from_rgb(173, 216, 230));
        window.set_color(palette.panel);
        menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
    }
    window.set_label_color(palette.text);
    menu.set_color(palette.panel);
    menu.set_text_color(palette.text);

    toolbar.apply_palette(&palette);
    stats_pane.apply_palette(&palette);

    editor.redraw();
    window.redraw();
    menu.redraw();
}
