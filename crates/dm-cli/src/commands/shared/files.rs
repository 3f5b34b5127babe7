use std::path::Path;

use anyhow::Context;
use chrono::NaiveDateTime;

/// `{prefix}_{YYYYMMDD_HHMMSS}.{extension}`
pub fn timestamped_file_name(prefix: &str, at: NaiveDateTime, extension: &str) -> String {
    format!("{prefix}_{}.{extension}", at.format("%Y%m%d_%H%M%S"))
}

/// Trimmed, non-empty lines of a UTF-8 text file, in file order.
pub fn read_text_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Create the parent directory of `path` when it has one.
pub fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::{ensure_parent_dir, read_text_lines, timestamped_file_name};

    #[test]
    fn file_name_carries_date_and_time() {
        let at = NaiveDate::from_ymd_opt(2025, 10, 30)
            .and_then(|d| d.and_hms_opt(9, 5, 7))
            .expect("valid timestamp");
        assert_eq!(
            timestamped_file_name("sentiment_analysis_result", at, "json"),
            "sentiment_analysis_result_20251030_090507.json"
        );
    }

    #[test]
    fn blank_lines_are_skipped_and_order_kept() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("texts.txt");
        std::fs::write(&path, "  Adorei o atendimento \n\n\t\nProduto com defeito\r\n").expect("write");
        assert_eq!(
            read_text_lines(&path).expect("lines"),
            vec!["Adorei o atendimento", "Produto com defeito"]
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(read_text_lines(&dir.path().join("absent.txt")).is_err());
    }

    #[test]
    fn parent_dir_is_created() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/out/results.jsonl");
        ensure_parent_dir(&path).expect("create");
        assert!(dir.path().join("nested/out").is_dir());
        ensure_parent_dir(std::path::Path::new("results.jsonl")).expect("no parent");
    }
}
