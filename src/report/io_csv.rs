// Primitives for reading the CSV exports of PSPP.

use crate::report::*;

/// Reads a CSV file with a header row into a raw table.
pub fn read_csv_table(path: &str) -> ReportResult<RawTable> {
    info!("Attempting to read CSV file {:?}", path);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;
    let columns: Vec<String> = rdr
        .headers()
        .context(CsvLineParseSnafu { path, lineno: 1usize })?
        .iter()
        .map(|s| s.trim().to_string())
        .collect();
    debug!("read_csv_table: columns: {:?}", columns);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, line_r) in rdr.records().enumerate() {
        // The header is the first line.
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { path, lineno })?;
        rows.push(line.iter().map(|s| s.to_string()).collect());
    }
    debug!("read_csv_table: {} rows", rows.len());
    RawTable::new(columns, rows).context(DataSnafu { stage: path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_tmp(name: &str, contents: &str) -> String {
        let p = std::env::temp_dir().join(format!("surveyrep-io-csv-{}", name));
        fs::write(&p, contents).unwrap();
        p.display().to_string()
    }

    #[test]
    fn reads_header_and_rows() {
        let p = write_tmp("simple.csv", "ID,Q1\n1,\"A; B\"\n2, \n");
        let t = read_csv_table(&p).unwrap();
        assert_eq!(t.columns, vec!["ID".to_string(), "Q1".to_string()]);
        assert_eq!(
            t.rows,
            vec![
                vec!["1".to_string(), "A; B".to_string()],
                vec!["2".to_string(), " ".to_string()]
            ]
        );
    }

    #[test]
    fn ragged_lines_are_reported() {
        let p = write_tmp("ragged.csv", "ID,Q1\n1,2\n3\n");
        assert!(matches!(
            read_csv_table(&p),
            Err(ReportError::CsvLineParse { lineno: 3, .. })
        ));
    }
}
