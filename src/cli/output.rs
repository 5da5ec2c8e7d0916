use anyhow::Result;

/// Format rows as a bracketed list, e.g. `[["1", "2"], ["4"]]`
pub fn format_rows(rows: &[Vec<String>]) -> String {
    format!("{:?}", rows)
}

/// Format rows as a JSON array of arrays
pub fn format_rows_json(rows: &[Vec<String>]) -> Result<String> {
    Ok(serde_json::to_string(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<Vec<String>> {
        vec![
            vec!["1".to_string(), "2".to_string(), "3".to_string()],
            vec!["4".to_string()],
        ]
    }

    #[test]
    fn test_format_rows() {
        assert_eq!(format_rows(&sample_rows()), r#"[["1", "2", "3"], ["4"]]"#);
        assert_eq!(format_rows(&[]), "[]");
    }

    #[test]
    fn test_format_rows_json() {
        assert_eq!(format_rows_json(&sample_rows()).unwrap(), r#"[["1","2","3"],["4"]]"#);
    }
}
