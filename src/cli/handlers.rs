use std::{
    fs,
    io::{self, Read, Write},
    time::Instant,
};

use tracing::debug;

use crate::{
    analyze_text,
    core::{config::Config, error::TextalyzeError},
    render::Analysis,
};

/// Raw contents of `path`; `-` reads stdin.
pub fn read_input(path: &str) -> Result<Vec<u8>, TextalyzeError> {
    if path == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| TextalyzeError::io(path, e))?;
        Ok(buf)
    } else {
        fs::read(path).map_err(|e| TextalyzeError::io(path, e))
    }
}

/// Analyze one file and write its report to `out`.
pub fn analyze_file<W: Write>(
    out: &mut W,
    path: &str,
    analysis: &Analysis,
    cfg: &Config,
) -> Result<(), TextalyzeError> {
    let t_ingest = Instant::now();
    let text = read_input(path)?;
    let ingest = t_ingest.elapsed();

    let t_analyze = Instant::now();
    let report = analyze_text(&text, analysis, cfg)?;
    debug!(
        path,
        bytes = text.len(),
        entries = report.lines().count(),
        ?ingest,
        analyze = ?t_analyze.elapsed(),
        "analyzed file"
    );

    writeln!(out, "The analysis of the file at {path} is...")?;
    writeln!(out, "{report}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Style, Values};

    #[test]
    fn writes_header_and_report() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Abba").unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let analysis = Analysis {
            style: Style::Table,
            values: Values::Counts,
            keep_case: false,
        };
        let mut out = Vec::new();
        analyze_file(&mut out, &path, &analysis, &Config::default()).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            format!("The analysis of the file at {path} is...\na \t 2 \nb \t 2 \n\n")
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let mut out = Vec::new();
        let err = analyze_file(
            &mut out,
            path.to_str().unwrap(),
            &Analysis::default(),
            &Config::default(),
        )
        .unwrap_err();
        assert!(matches!(err, TextalyzeError::Io { .. }));
        assert!(out.is_empty());
    }
}
