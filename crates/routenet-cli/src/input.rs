//! Route record loading.
//!
//! Accepts a JSON array of records or JSON Lines (one record per line, blank
//! lines ignored). The path `-` reads from stdin.

use std::io::{self, Read};
use std::path::Path;

use routenet_core::{ErrorCode, RouteRecord};
use tracing::{debug, instrument};

/// Failure to obtain route records from an input source.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {source_name}")]
    Read {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {source_name}{}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Parse {
        source_name: String,
        line: Option<usize>,
        #[source]
        source: serde_json::Error,
    },
}

impl InputError {
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Read { .. } => ErrorCode::InputReadError,
            Self::Parse { .. } => ErrorCode::InputParseError,
        }
    }
}

/// Load route records from `path`, or stdin when `path` is `-`.
#[instrument]
pub fn load_records(path: &Path) -> Result<Vec<RouteRecord>, InputError> {
    let source_name = if path == Path::new("-") {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    };

    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| InputError::Read {
                source_name: source_name.clone(),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| InputError::Read {
            source_name: source_name.clone(),
            source,
        })?
    };

    let records = parse_records(&text, &source_name)?;
    debug!(records = records.len(), source = %source_name, "loaded route records");
    Ok(records)
}

/// Parse route records from a JSON array or JSON Lines text.
pub fn parse_records(text: &str, source_name: &str) -> Result<Vec<RouteRecord>, InputError> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).map_err(|source| InputError::Parse {
            source_name: source_name.to_string(),
            line: None,
            source,
        });
    }

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| InputError::Parse {
                source_name: source_name.to_string(),
                line: Some(i + 1),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use routenet_core::Season;

    const ARRAY: &str = r#"[
        {"origin":"ATL","destination":"LAX","airline":"Delta Air Lines","frequency":21,
         "avg_price":412.5,"peak_season":"Summer","demand_score":0.81},
        {"origin":"LAX","destination":"ATL","airline":"Delta Air Lines","frequency":14,
         "avg_price":398.0,"peak_season":"Winter","demand_score":0.62,
         "scraped_at":"2024-05-01T12:00:00Z"}
    ]"#;

    #[test]
    fn parses_json_array() {
        let records = parse_records(ARRAY, "test").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].origin, "ATL");
        assert_eq!(records[1].peak_season, Season::Winter);
        assert!(records[0].scraped_at.is_none());
        assert!(records[1].scraped_at.is_some());
    }

    #[test]
    fn parses_json_lines_skipping_blanks() {
        let text = concat!(
            r#"{"origin":"ATL","destination":"JFK","airline":"Delta","frequency":7,"avg_price":199.0,"peak_season":"Fall","demand_score":0.4}"#,
            "\n\n",
            r#"{"origin":"JFK","destination":"BOS","airline":"JetBlue","frequency":28,"avg_price":129.0,"peak_season":"Spring","demand_score":0.9}"#,
            "\n",
        );
        let records = parse_records(text, "test").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].airline, "JetBlue");
    }

    #[test]
    fn empty_input_is_empty_batch() {
        assert!(parse_records("  \n", "test").unwrap().is_empty());
    }

    #[test]
    fn bad_line_reports_line_number() {
        let text = "{\"origin\":\"ATL\"}\n";
        let err = parse_records(text, "routes.jsonl").unwrap_err();
        assert!(matches!(err, InputError::Parse { line: Some(1), .. }));
        assert!(err.to_string().contains("routes.jsonl at line 1"));
        assert_eq!(err.error_code(), ErrorCode::InputParseError);
    }

    #[test]
    fn unknown_season_is_a_parse_error() {
        let text = r#"[{"origin":"ATL","destination":"LAX","airline":"Delta","frequency":7,
            "avg_price":199.0,"peak_season":"Monsoon","demand_score":0.4}]"#;
        assert!(parse_records(text, "test").is_err());
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::InputReadError);
    }
}
