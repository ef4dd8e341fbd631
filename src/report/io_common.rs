use std::path::{Path, PathBuf};

use crate::report::*;

/// The location of a report: `<output_dir>/<survey>/<segment>.html`
pub fn report_path(output_dir: &str, survey_name: &str, segment_name: &str) -> String {
    let p: PathBuf = [
        output_dir.to_string(),
        survey_name.to_string(),
        format!("{}.html", segment_name),
    ]
    .iter()
    .collect();
    p.display().to_string()
}

/// Parses a segment constraint written as `COLUMN=VALUE`.
pub fn parse_segment(s: &str) -> ReportResult<(String, Code)> {
    let (column, value) = s
        .split_once('=')
        .context(InvalidSegmentSnafu { content: s })?;
    let column = column.trim();
    let value = value
        .trim()
        .parse::<Code>()
        .ok()
        .context(InvalidSegmentSnafu { content: s })?;
    ensure!(!column.is_empty(), InvalidSegmentSnafu { content: s });
    Ok((column.to_string(), value))
}

/// Writes the report, creating the parent directories if necessary.
pub fn write_report(path: &str, contents: &str) -> ReportResult<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            debug!("write_report: creating directory {:?}", parent);
            fs::create_dir_all(parent).context(WritingFileSnafu { path })?;
        }
    }
    fs::write(path, contents).context(WritingFileSnafu { path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments() {
        assert_eq!(
            parse_segment("COUNTRY=9").unwrap(),
            ("COUNTRY".to_string(), 9)
        );
        assert_eq!(parse_segment(" S5 = 2 ").unwrap(), ("S5".to_string(), 2));
        assert!(parse_segment("COUNTRY").is_err());
        assert!(parse_segment("COUNTRY=usa").is_err());
        assert!(parse_segment("=9").is_err());
    }

    #[test]
    fn paths() {
        let p = report_path("output", "privacy", "usa");
        assert!(Path::new(&p).ends_with("output/privacy/usa.html"));
    }

    #[test]
    fn creates_directories() {
        let dir = std::env::temp_dir().join("surveyrep-io-common");
        let p = report_path(dir.to_str().unwrap(), "nested", "page");
        write_report(&p, "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(&p).unwrap(), "<html></html>");
    }
}
