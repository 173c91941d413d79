use std::cell::Cell;
use std::rc::Rc;

use fltk::app::Sender;
use fltk::text::TextBuffer;

use super::messages::Message;
use crate::app::infrastructure::buffer::buffer_contents;

/// The single document edited in the window.
pub struct Document {
    pub buffer: TextBuffer,
    pub file_path: Option<String>,
    pub has_unsaved_changes: Rc<Cell<bool>>,
}

impl Document {
    pub fn new(sender: Sender<Message>) -> Self {
        let mut buffer = TextBuffer::default();
        let has_unsaved_changes = Rc::new(Cell::new(false));

        let changes = has_unsaved_changes.clone();
        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                changes.set(true);
                sender.send(Message::BufferModified);
            }
        });

        Self {
            buffer,
            file_path: None,
            has_unsaved_changes,
        }
    }

    /// Replace the contents with a file just read from `path`.
    pub fn load(&mut self, path: String, content: &str) {
        // set_text fires the modify callback, so the flag is reset afterwards
        self.buffer.set_text(content);
        self.mark_saved(path);
    }

    /// Reset to an empty untitled document.
    pub fn clear(&mut self) {
        self.buffer.set_text("");
        self.file_path = None;
        self.has_unsaved_changes.set(false);
    }

    pub fn mark_saved(&mut self, path: String) {
        self.file_path = Some(path);
        self.has_unsaved_changes.set(false);
    }

    pub fn is_dirty(&self) -> bool {
        self.has_unsaved_changes.get()
    }

    pub fn text(&self) -> String {
        buffer_contents(&self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fltk::app;

    fn drain(receiver: &app::Receiver<Message>) -> usize {
        let mut n = 0;
        while let Some(msg) = receiver.recv() {
            assert!(matches!(msg, Message::BufferModified));
            n += 1;
        }
        n
    }

    #[test]
    fn test_new_document_is_clean() {
        let (sender, _receiver) = app::channel::<Message>();
        let doc = Document::new(sender);
        assert!(!doc.is_dirty());
        assert!(doc.file_path.is_none());
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn test_insert_marks_dirty_and_notifies() {
        let (sender, receiver) = app::channel::<Message>();
        let mut doc = Document::new(sender);
        drain(&receiver);

        doc.buffer.insert(0, "Hello");
        assert!(doc.is_dirty());
        assert!(drain(&receiver) >= 1);
        assert_eq!(doc.text(), "Hello");
    }

    #[test]
    fn test_load_leaves_document_clean() {
        let (sender, _receiver) = app::channel::<Message>();
        let mut doc = Document::new(sender);
        doc.load("/tmp/draft.md".to_string(), "Loaded text.");
        assert!(!doc.is_dirty());
        assert_eq!(doc.file_path.as_deref(), Some("/tmp/draft.md"));
        assert_eq!(doc.text(), "Loaded text.");
    }

    #[test]
    fn test_edit_after_load_is_dirty_again() {
        let (sender, _receiver) = app::channel::<Message>();
        let mut doc = Document::new(sender);
        doc.load("/tmp/draft.md".to_string(), "Loaded");
        doc.buffer.append(" and edited");
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_mark_saved_clears_flag() {
        let (sender, _receiver) = app::channel::<Message>();
        let mut doc = Document::new(sender);
        doc.buffer.insert(0, "Unsaved");
        assert!(doc.is_dirty());
        doc.mark_saved("/tmp/out.txt".to_string());
        assert!(!doc.is_dirty());
        assert_eq!(doc.file_path.as_deref(), Some("/tmp/out.txt"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let (sender, _receiver) = app::channel::<Message>();
        let mut doc = Document::new(sender);
        doc.load("/tmp/draft.md".to_string(), "Some text");
        doc.buffer.append(" more");
        doc.clear();
        assert!(!doc.is_dirty());
        assert!(doc.file_path.is_none());
        assert_eq!(doc.text(), "");
    }
}
