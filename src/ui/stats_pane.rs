use fltk::{
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
};

use crate::app::domain::stats::TextStats;
use super::theme::Palette;

const ROW_HEIGHT: i32 = 26;

/// Side pane listing the live statistics, one "Label: value" row each.
pub struct StatsPane {
    pub widget: Flex,
    keys: Vec<Frame>,
    values: Vec<Frame>,
}

impl Default for StatsPane {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsPane {
    pub fn new() -> Self {
        let mut widget = Flex::default();
        widget.set_type(FlexType::Column);
        widget.set_frame(FrameType::FlatBox);
        widget.set_margins(16, 20, 8, 8);
        widget.set_spacing(2);

        let mut keys = Vec::new();
        let mut values = Vec::new();
        for (label, value) in TextStats::default().rows() {
            let mut row = Flex::default();
            row.set_type(FlexType::Row);

            let mut key = Frame::default().with_label(&format!("{}:", label));
            key.set_align(Align::Left | Align::Inside);
            key.set_label_size(13);

            let mut val = Frame::default().with_label(&value);
            val.set_align(Align::Left | Align::Inside);
            val.set_label_font(Font::HelveticaBold);
            val.set_label_size(13);
            row.fixed(&val, 56);

            row.end();
            widget.fixed(&row, ROW_HEIGHT);
            keys.push(key);
            values.push(val);
        }
        // filler keeps the rows at the top
        Frame::default();
        widget.end();

        Self { widget, keys, values }
    }

    pub fn update(&mut self, stats: &TextStats) {
        for (frame, (_, value)) in self.values.iter_mut().zip(stats.rows()) {
            if frame.label() != value {
                frame.set_label(&value);
            }
        }
    }

    pub fn apply_palette(&mut self, palette: &Palette) {
        self.widget.set_color(palette.panel);
        for key in &mut self.keys {
            key.set_label_color(palette.muted);
        }
        for val in &mut self.values {
            val.set_label_color(palette.text);
        }
        self.widget.redraw();
    }
}
