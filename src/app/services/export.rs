//! Export the document, read as Markdown, to RTF, PDF or HTML.
//!
//! RTF and PDF go through an external converter (pandoc by default) that
//! receives the text on stdin. HTML is rendered in-process.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use pulldown_cmark::{Options, Parser, html};
use pulldown_cmark_escape::escape_html;

use crate::app::domain::settings::AppSettings;
use crate::app::infrastructure::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Rtf,
    Pdf,
    Html,
}

impl ExportFormat {
    pub fn all() -> &'static [ExportFormat] {
        &[Self::Rtf, Self::Pdf, Self::Html]
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Rtf => "rtf",
            Self::Pdf => "pdf",
            Self::Html => "html",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Rtf => "RTF",
            Self::Pdf => "PDF",
            Self::Html => "HTML",
        }
    }

    pub fn dialog_title(self) -> String {
        format!("Export to {}", self.label())
    }

    pub fn file_filter(self) -> String {
        format!("*.{}", self.extension())
    }
}

/// Append the format's extension unless `path` already ends with it.
pub fn ensure_extension(path: &str, format: ExportFormat) -> PathBuf {
    let p = Path::new(path);
    let has_ext = p
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(format.extension()));
    if has_ext {
        p.to_path_buf()
    } else {
        PathBuf::from(format!("{}.{}", path, format.extension()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    pub program: String,
    pub pdf_engine: String,
}

impl Converter {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            program: settings.converter_program.clone(),
            pdf_engine: settings.pdf_engine.clone(),
        }
    }

    /// Build the converter invocation. Input is read from stdin.
    /// Returns `None` for formats rendered in-process.
    pub fn command(&self, format: ExportFormat, output: &Path) -> Option<Command> {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-f", "markdown"]);
        match format {
            ExportFormat::Rtf => {
                cmd.args(["-t", "rtf", "-s", "-o"]).arg(output);
            }
            ExportFormat::Pdf => {
                cmd.args(["-t", "pdf", "-s", "-o"])
                    .arg(output)
                    .arg(format!("--pdf-engine={}", self.pdf_engine));
            }
            ExportFormat::Html => return None,
        }
        Some(cmd)
    }

    fn run(&self, mut cmd: Command, text: &str) -> Result<()> {
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| AppError::ConverterMissing {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A converter that dies early closes the pipe; its stderr says why.
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Export(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

/// Export `text` to `output` in the given format.
pub fn export_document(text: &str, format: ExportFormat, output: &Path, converter: &Converter) -> Result<()> {
    tracing::info!(format = format.label(), output = %output.display(), "exporting document");
    match converter.command(format, output) {
        Some(cmd) => converter.run(cmd, text),
        None => {
            let title = output
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            fs::write(output, render_html_document(text, &title))?;
            Ok(())
        }
    }
}

/// Render Markdown to a standalone HTML page.
pub fn render_html_document(markdown: &str, title: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut body = String::new();
    html::push_html(&mut body, Parser::new_ext(markdown, options));

    let mut escaped_title = String::with_capacity(title.len());
    // writing into a String cannot fail
    let _ = escape_html(&mut escaped_title, title);

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escaped_title, body
    )
}
