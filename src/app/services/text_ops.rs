use std::collections::BTreeSet;
use std::path::Path;

pub const APP_NAME: &str = "Writher";

/// Narrowest the statistics pane gets, so its labels stay on one line.
pub const MIN_STATS_PANE_WIDTH: i32 = 160;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Title stand-in for a document that has never been saved: its first three
/// `.`-separated pieces, joined by spaces, followed by "...".
pub fn untitled_title(text: &str) -> String {
    let head = text.split('.').take(3).collect::<Vec<_>>().join(" ");
    let collapsed = head.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("{}...", collapsed)
}

pub fn window_title(file_path: Option<&str>, text: &str, dirty: bool) -> String {
    let name = match file_path {
        Some(path) => extract_filename(path),
        None => untitled_title(text),
    };
    let prefix = if dirty { "*" } else { "" };
    format!("{}{} - {}", prefix, APP_NAME, name)
}

/// Sorted, de-duplicated font family names. Blank names and names containing
/// `|`, which FLTK's `add_choice` treats as an item separator, are dropped.
pub fn font_families<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty() && !n.contains('|'))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Escape characters FLTK treats specially in menu item labels.
/// `/` starts a submenu, `&` marks a shortcut letter.
pub fn menu_label(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '/' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '&' => out.push_str("&&"),
            _ => out.push(c),
        }
    }
    out
}

/// The statistics pane takes 11% of the window width.
///
/// Below roughly 1455 px the floor wins, so at common window sizes the pane
/// stays at [`MIN_STATS_PANE_WIDTH`] and only grows on wide windows.
pub fn stats_pane_width(window_width: i32) -> i32 {
    (window_width * 11 / 100).max(MIN_STATS_PANE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename("/home/user/draft.md"), "draft.md");
        assert_eq!(extract_filename("notes.txt"), "notes.txt");
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename(""), "Unknown");
        assert_eq!(extract_filename("."), "Unknown");
        assert_eq!(extract_filename("/"), "Unknown");
    }

    #[test]
    fn test_untitled_title_first_three_sentences() {
        let text = "It was late. The lamp flickered. Rain fell. Nobody came.";
        assert_eq!(untitled_title(text), "It was late The lamp flickered Rain fell...");
    }

    #[test]
    fn test_untitled_title_short_and_empty() {
        assert_eq!(untitled_title("Just one line"), "Just one line...");
        assert_eq!(untitled_title(""), "...");
    }

    #[test]
    fn test_untitled_title_collapses_newlines() {
        assert_eq!(untitled_title("Title\n\nBody text"), "Title Body text...");
    }

    #[test]
    fn test_window_title_with_path() {
        assert_eq!(window_title(Some("/tmp/essay.md"), "ignored.", false), "Writher - essay.md");
        assert_eq!(window_title(Some("/tmp/essay.md"), "", true), "*Writher - essay.md");
    }

    #[test]
    fn test_window_title_without_path() {
        assert_eq!(window_title(None, "Hello. World", true), "*Writher - Hello World...");
    }

    #[test]
    fn test_font_families_sorted_unique() {
        let raw = vec![
            "Noto Sans".to_string(),
            "DejaVu Serif".to_string(),
            "Noto Sans".to_string(),
            "  ".to_string(),
            " Courier ".to_string(),
            "Odd|Name".to_string(),
        ];
        assert_eq!(font_families(raw), vec!["Courier", "DejaVu Serif", "Noto Sans"]);
    }

    #[test]
    fn test_menu_label_escapes() {
        assert_eq!(menu_label("Plain"), "Plain");
        assert_eq!(menu_label("A/B"), "A\\/B");
        assert_eq!(menu_label("Tom & Jerry"), "Tom && Jerry");
        assert_eq!(menu_label("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_stats_pane_width() {
        assert_eq!(stats_pane_width(2000), 220);
        assert_eq!(stats_pane_width(1600), 176);
        assert_eq!(stats_pane_width(1455), 160);
        assert_eq!(stats_pane_width(800), MIN_STATS_PANE_WIDTH);
        assert_eq!(stats_pane_width(0), MIN_STATS_PANE_WIDTH);
    }
}
