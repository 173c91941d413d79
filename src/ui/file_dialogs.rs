use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

/// Filter for the Open dialog. FLTK adds "All Files" itself.
pub const TEXT_FILES_FILTER: &str = "Text Files\t*.txt\nMarkdown Files\t*.{md,markdown}";

fn run_chooser(
    kind: FileDialogType,
    title: &str,
    filter: &str,
    directory: Option<&str>,
    preset_file: Option<&str>,
) -> Option<String> {
    let confirm_overwrite = matches!(kind, FileDialogType::BrowseSaveFile);
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.set_filter(filter);
    if let Some(dir) = directory {
        if let Err(e) = nfc.set_directory(&dir) {
            tracing::debug!("Ignoring dialog directory {}: {:?}", dir, e);
        }
    }
    if let Some(name) = preset_file {
        nfc.set_preset_file(name);
    }
    if confirm_overwrite {
        nfc.set_option(FileDialogOptions::SaveAsConfirm);
    }
    nfc.show(); // blocks until closed
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

pub fn native_open_dialog(directory: Option<&str>) -> Option<String> {
    run_chooser(FileDialogType::BrowseFile, "Open File", TEXT_FILES_FILTER, directory, None)
}

pub fn native_save_dialog(directory: Option<&str>, preset_file: Option<&str>) -> Option<String> {
    run_chooser(FileDialogType::BrowseSaveFile, "Save File", TEXT_FILES_FILTER, directory, preset_file)
}

pub fn native_export_dialog(title: &str, filter: &str, directory: Option<&str>) -> Option<String> {
    run_chooser(FileDialogType::BrowseSaveFile, title, filter, directory, None)
}
