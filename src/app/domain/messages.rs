use crate::app::services::export::ExportFormat;

/// All messages that can be sent through the FLTK channel.
/// Menu items, toolbar choices and the buffer's modify callback each send one
/// of these; the dispatch loop in main hands them to `AppState`.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    Export(ExportFormat),
    FileQuit,
    WindowClose,

    // Edit
    EditUndo,
    EditRedo,
    EditCut,
    EditCopy,
    EditPaste,
    SelectAll,

    // View
    ToggleWordWrap,
    ToggleDarkMode,
    ToggleStatsPane,
    ToggleFullscreen,
    WindowResized(i32),

    // Format
    SetFont(String),
    SetFontSize(i32),

    // Help
    ShowAbout,

    /// Text was inserted or deleted in the document buffer.
    BufferModified,
}
