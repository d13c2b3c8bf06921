use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::{GenoreportError, Result};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)
        .map_err(|e| GenoreportError::FileReadError(format!("{}: {}", path.display(), e)))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

///
/// Read a (possibly gzipped) JSON document into a generic value.
///
pub fn read_json_value(path: &Path) -> Result<serde_json::Value> {
    let reader = get_dynamic_reader(path)?;
    let value = serde_json::from_reader(reader)?;
    Ok(value)
}

///
/// Canonical map key for an rsid: lowercased, and only if the raw token
/// already starts with `rs` in any casing (vendor exports use `Rs12345`).
///
pub fn canonical_rsid(raw: &str) -> Option<String> {
    let key = raw.trim().to_lowercase();
    if key.starts_with("rs") && key.len() > 2 {
        Some(key)
    } else {
        None
    }
}

/// True for `None`, empty and whitespace-only strings.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{BufRead, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("rs1015362", Some("rs1015362"))]
    #[case("Rs1015362", Some("rs1015362"))]
    #[case(" RS7412 ", Some("rs7412"))]
    #[case("i3000001", None)]
    #[case("rs", None)]
    #[case("", None)]
    fn test_canonical_rsid(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(canonical_rsid(raw).as_deref(), expected);
    }

    #[rstest]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("  \t")));
        assert!(!is_blank(Some("APOE")));
    }

    #[rstest]
    fn test_dynamic_reader_reads_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genome.txt.gz");
        {
            let file = File::create(&path).unwrap();
            let mut encoder = GzEncoder::new(file, Compression::default());
            writeln!(encoder, "rs1\t1\t100\tAG").unwrap();
            encoder.finish().unwrap();
        }

        let reader = get_dynamic_reader(&path).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["rs1\t1\t100\tAG".to_string()]);
    }

    #[rstest]
    fn test_dynamic_reader_missing_file() {
        let result = get_dynamic_reader(Path::new("does/not/exist.txt"));
        assert!(matches!(result, Err(GenoreportError::FileReadError(_))));
    }

    #[rstest]
    fn test_read_json_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clinvar.json");
        std::fs::write(&path, r#"[{"rsid": "rs1"}]"#).unwrap();

        let value = read_json_value(&path).unwrap();
        assert!(value.is_array());
    }
}
