//! Report rendering and export.
//!
//! Renderers turn a [`Report`] into a human-readable document. The account
//! store never sees their output; export just writes the document to disk.

use crate::core::error::ReportError;
use crate::locale::strings::Strings;
use crate::models::report::Report;
use chrono::{DateTime, Local};
use serde::Deserialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Output format of an exported report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Text,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Text => "txt",
        }
    }

    pub fn renderer(self) -> Box<dyn ReportRenderer> {
        match self {
            ReportFormat::Html => Box::new(HtmlReportRenderer),
            ReportFormat::Text => Box::new(TextReportRenderer),
        }
    }
}

pub trait ReportRenderer {
    /// Render the report with the given strings, stamped with `generated_at`
    fn render(&self, report: &Report, strings: &Strings, generated_at: DateTime<Local>) -> String;
}

const REPORT_CSS: &str = r#"
      body { font-family: Arial; padding: 20px; line-height: 1.6; }
      .header { text-align: center; margin-bottom: 30px; border-bottom: 2px solid #333; padding-bottom: 20px; }
      .section { margin-bottom: 20px; }
      .timestamp { text-align: right; margin-top: 30px; color: #666; }
      h1, h2 { color: #4ecdc4; }
      ul { list-style-type: square; }"#;

/// Printable HTML document
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlReportRenderer;

impl HtmlReportRenderer {
    fn list_or(items: &[String], empty: &str) -> String {
        if items.is_empty() {
            return format!("<p>{}</p>", html_escape(empty));
        }

        let mut out = String::from("<ul>");
        for item in items {
            let _ = write!(out, "<li>{}</li>", html_escape(item));
        }
        out.push_str("</ul>");
        out
    }
}

impl ReportRenderer for HtmlReportRenderer {
    fn render(&self, report: &Report, s: &Strings, generated_at: DateTime<Local>) -> String {
        let personality = if report.personality_type.is_empty() {
            s.personality_not_taken
        } else {
            report.personality_type.as_str()
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{fullname} - {title}</title>
    <style>{css}
    </style>
</head>
<body>
    <div class="header">
        <h1>{title}</h1>
        <p>{generated_label}: {generated_at}</p>
    </div>
    <div class="section">
        <h2>{basic_info}</h2>
        <p><strong>{fullname_label}:</strong> {fullname}</p>
        <p><strong>{year_label}:</strong> {year}</p>
        <p><strong>{department_label}:</strong> {department}</p>
        <p><strong>{personality_label}:</strong> {personality}</p>
    </div>
    <div class="section">
        <h2>{selected_label}</h2>
        {selected}
    </div>
    <div class="section">
        <h2>{recommended_label}</h2>
        {recommended}
    </div>
    <div class="timestamp">{footer}</div>
</body>
</html>
"#,
            title = html_escape(s.report_title),
            css = REPORT_CSS,
            generated_label = html_escape(s.report_generated_at),
            generated_at = generated_at.format("%Y-%m-%d %H:%M:%S"),
            basic_info = html_escape(s.report_basic_info),
            fullname_label = html_escape(s.label_fullname),
            fullname = html_escape(&report.fullname),
            year_label = html_escape(s.label_year),
            year = html_escape(&s.year(report.year)),
            department_label = html_escape(s.label_department),
            department = html_escape(&report.department),
            personality_label = html_escape(s.label_personality),
            personality = html_escape(personality),
            selected_label = html_escape(s.label_selected_courses),
            selected = Self::list_or(&report.selected_courses, s.report_no_courses),
            recommended_label = html_escape(s.label_recommended_courses),
            recommended = Self::list_or(&report.recommended_courses, s.report_no_recommendations),
            footer = html_escape(s.report_footer),
        )
    }
}

/// Plain-text summary, as the terminal shows it
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReportRenderer;

impl ReportRenderer for TextReportRenderer {
    fn render(&self, report: &Report, s: &Strings, generated_at: DateTime<Local>) -> String {
        let mut out = String::new();
        let personality = if report.personality_type.is_empty() {
            s.personality_not_taken
        } else {
            report.personality_type.as_str()
        };

        let _ = writeln!(out, "{}", s.report_title);
        let _ = writeln!(out, "{}: {}", s.report_generated_at, generated_at.format("%Y-%m-%d %H:%M:%S"));
        let _ = writeln!(out);
        let _ = writeln!(out, "{}: {}", s.label_fullname, report.fullname);
        let _ = writeln!(out, "{}: {}", s.label_year, s.year(report.year));
        let _ = writeln!(out, "{}: {}", s.label_department, report.department);
        let _ = writeln!(out, "{}: {}", s.label_personality, personality);

        let sections = [
            (s.label_selected_courses, &report.selected_courses, s.none_selected),
            (s.label_recommended_courses, &report.recommended_courses, s.no_recommendations),
        ];
        for (label, items, empty) in sections {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}:", label);
            if items.is_empty() {
                let _ = writeln!(out, "  {}", empty);
            }
            for item in items {
                let _ = writeln!(out, "  • {}", item);
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", s.report_footer);
        out
    }
}

/// Render `report` and write it to `output_dir`.
///
/// The file is named after the user's full name and the export time.
/// Returns the written path.
pub fn export_report(
    report: &Report,
    strings: &Strings,
    format: ReportFormat,
    output_dir: &Path,
) -> Result<PathBuf, ReportError> {
    let now = Local::now();
    let document = format.renderer().render(report, strings, now);

    let write_err = |path: &Path, source| ReportError::Write {
        path: path.display().to_string(),
        source,
    };

    fs::create_dir_all(output_dir).map_err(|e| write_err(output_dir, e))?;

    let path = output_dir.join(format!(
        "{}-{}.{}",
        file_stem(&report.fullname),
        now.format("%Y%m%d%H%M%S"),
        format.extension()
    ));
    fs::write(&path, document).map_err(|e| write_err(&path, e))?;

    info!(path = %path.display(), format = format.extension(), "Report exported");
    Ok(path)
}

fn file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "report".to_string()
    } else {
        stem
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
