//! Summary and report export. Pure formatting plus a file write; sits
//! outside the request pipeline.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use medcollab_core::Result;

/// Write any serializable value as pretty-printed JSON.
pub fn export_json<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Write summaries to a plain-text file, blank-line separated.
pub fn export_text(summaries: &[String], path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, summaries.join("\n\n"))?;
    Ok(())
}

/// Write a formatted report: title header, optional metadata block, and a
/// numbered summary list.
pub fn create_report(
    title: &str,
    summaries: &[String],
    metadata: Option<&HashMap<String, String>>,
    path: impl AsRef<Path>,
) -> Result<()> {
    let mut content = vec![format!("# {}\n", title)];

    if let Some(metadata) = metadata {
        content.push("## Metadata".to_string());
        let mut keys: Vec<_> = metadata.keys().collect();
        keys.sort();
        for key in keys {
            content.push(format!("{}: {}", key, metadata[key]));
        }
        content.push("\n".to_string());
    }

    content.push("## Summaries".to_string());
    for (i, summary) in summaries.iter().enumerate() {
        content.push(format!("\n{}. {}", i + 1, summary));
    }

    std::fs::write(path, content.join("\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_text_blank_line_separated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summaries.txt");
        export_text(
            &["First summary.".to_string(), "Second summary.".to_string()],
            &path,
        )
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "First summary.\n\nSecond summary.");
    }

    #[test]
    fn test_export_json_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        export_json(&serde_json::json!({"topics": ["cardiology"]}), &path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["topics"][0], "cardiology");
    }

    #[test]
    fn test_report_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let metadata = HashMap::from([("author".to_string(), "Dr. Adams".to_string())]);
        create_report(
            "Weekly Review",
            &["Notable case of pericarditis.".to_string()],
            Some(&metadata),
            &path,
        )
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Weekly Review"));
        assert!(written.contains("## Metadata"));
        assert!(written.contains("author: Dr. Adams"));
        assert!(written.contains("1. Notable case of pericarditis."));
    }
}
