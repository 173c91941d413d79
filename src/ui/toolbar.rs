use fltk::{
    app::Sender,
    enums::{Align, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::Choice,
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::domain::settings::FONT_SIZES;
use crate::app::services::text_ops::menu_label;
use super::theme::Palette;

pub const TOOLBAR_HEIGHT: i32 = 34;

/// Font family and size pickers shown under the menu bar.
pub struct Toolbar {
    pub widget: Flex,
    captions: Vec<Frame>,
}

impl Toolbar {
    pub fn new(families: &[String], font_family: &str, font_size: i32, sender: &Sender<Message>) -> Self {
        let mut widget = Flex::default();
        widget.set_type(FlexType::Row);
        widget.set_frame(FrameType::FlatBox);
        widget.set_margins(8, 4, 8, 4);
        widget.set_spacing(6);

        let mut font_caption = Frame::default().with_label("Font");
        font_caption.set_align(Align::Right | Align::Inside);
        widget.fixed(&font_caption, 36);

        let mut font_choice = Choice::default();
        for name in families {
            font_choice.add_choice(&menu_label(name));
        }
        if let Some(idx) = families.iter().position(|f| f == font_family) {
            font_choice.set_value(idx as i32);
        }
        widget.fixed(&font_choice, 240);

        let mut size_caption = Frame::default().with_label("Size");
        size_caption.set_align(Align::Right | Align::Inside);
        widget.fixed(&size_caption, 36);

        let mut size_choice = Choice::default();
        for size in FONT_SIZES {
            size_choice.add_choice(&size.to_string());
        }
        if let Some(idx) = FONT_SIZES.iter().position(|s| *s == font_size) {
            size_choice.set_value(idx as i32);
        }
        widget.fixed(&size_choice, 64);

        // filler
        Frame::default();
        widget.end();

        let families = families.to_vec();
        let s = *sender;
        font_choice.set_callback(move |c| {
            let picked = usize::try_from(c.value()).ok().and_then(|i| families.get(i));
            if let Some(name) = picked {
                s.send(Message::SetFont(name.clone()));
            }
        });

        let s = *sender;
        size_choice.set_callback(move |c| {
            let picked = usize::try_from(c.value()).ok().and_then(|i| FONT_SIZES.get(i));
            if let Some(size) = picked {
                s.send(Message::SetFontSize(*size));
            }
        });

        Self {
            widget,
            captions: vec![font_caption, size_caption],
        }
    }

    pub fn apply_palette(&mut self, palette: &Palette) {
        self.widget.set_color(palette.panel);
        for caption in &mut self.captions {
            caption.set_label_color(palette.text);
        }
        self.widget.redraw();
    }
}
