use std::fs;
use std::path::Path;

use crate::app::infrastructure::error::Result;

/// Read a plain UTF-8 text file. `\r\n` and lone `\r` line endings come
/// back as `\n`.
pub fn read_text_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = normalize_newlines(fs::read_to_string(path)?);
    tracing::info!(path = %path.display(), bytes = content.len(), "opened file");
    Ok(content)
}

fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}

/// Write `text` to `path`, creating or truncating it.
pub fn write_text_file(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, text)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "saved file");
    Ok(())
}

/// Parent directory of `path`, remembered for the next file dialog.
pub fn parent_dir(path: &str) -> Option<String> {
    Path::new(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.txt");
        let text = "First line.\n\nSecond paragraph with ünïcödé.";
        write_text_file(&path, text).unwrap();
        assert_eq!(read_text_file(&path).unwrap(), text);
    }

    #[test]
    fn test_read_normalizes_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("windows.txt");
        fs::write(&path, b"a\r\nb").unwrap();
        let text = read_text_file(&path).unwrap();
        assert_eq!(text, "a\nb");
        assert_eq!(text.chars().count(), 3);

        fs::write(&path, b"one\rtwo\r\n\r\nthree\n").unwrap();
        assert_eq!(read_text_file(&path).unwrap(), "one\ntwo\n\nthree\n");
    }

    #[test]
    fn test_crlf_file_saved_back_with_lf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.txt");
        fs::write(&path, b"Title\r\n\r\nBody.\r\n").unwrap();
        let text = read_text_file(&path).unwrap();
        write_text_file(&path, &text).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"Title\n\nBody.\n");
    }

    #[test]
    fn test_write_truncates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.txt");
        write_text_file(&path, "a much longer first version").unwrap();
        write_text_file(&path, "short").unwrap();
        assert_eq!(read_text_file(&path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text_file(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, AppError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        assert!(matches!(read_text_file(&path), Err(AppError::Io(_))));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.txt");
        assert!(write_text_file(&path, "x").is_err());
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir("/home/user/draft.md"), Some("/home/user".to_string()));
        assert_eq!(parent_dir("draft.md"), None);
    }
}
