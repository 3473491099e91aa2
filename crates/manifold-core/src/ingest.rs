//! File payload ingestion
//!
//! A file attached to a `File` descriptor travels to the gateway inline as a
//! base64 string. Only CSV and XLSX files are accepted; anything else is
//! rejected before a single byte is read, leaving the caller's descriptor
//! state untouched. The read completes before the descriptor exists, so a
//! descriptor never carries a half-read payload.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};
use crate::sources::{FileKind, FileSource, PollInterval};

/// Read and encode a file into a `File` descriptor body.
pub async fn ingest_file(path: impl AsRef<Path>, poll: PollInterval) -> Result<FileSource> {
    let path = path.as_ref();
    let kind = FileKind::from_path(path).ok_or_else(|| Error::UnsupportedFile {
        path: path.display().to_string(),
        detected: path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("unknown")
            .to_string(),
    })?;

    let bytes = tokio::fs::read(path).await?;
    tracing::debug!(
        path = %path.display(),
        kind = %kind,
        bytes = bytes.len(),
        "ingested file payload"
    );

    Ok(FileSource {
        kind,
        payload: STANDARD.encode(&bytes),
        poll,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::PollUnit;

    fn poll() -> PollInterval {
        PollInterval {
            every: 15,
            unit: PollUnit::Minute,
        }
    }

    #[tokio::test]
    async fn test_ingest_csv_encodes_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        std::fs::write(&path, "id,name\n1,Alice\n").unwrap();

        let file = ingest_file(&path, poll()).await.unwrap();
        assert_eq!(file.kind, FileKind::Csv);
        assert_eq!(file.payload, STANDARD.encode("id,name\n1,Alice\n"));
        assert_eq!(file.poll.every, 15);
    }

    #[tokio::test]
    async fn test_ingest_xlsx_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        std::fs::write(&path, b"PK\x03\x04fake").unwrap();

        let file = ingest_file(&path, poll()).await.unwrap();
        assert_eq!(file.kind, FileKind::Xlsx);
    }

    #[tokio::test]
    async fn test_ingest_rejects_png_before_reading() {
        // The path does not exist; rejection must happen on the kind check,
        // not on the read.
        let result = ingest_file("/nonexistent/image.png", poll()).await;
        match result {
            Err(Error::UnsupportedFile { path, detected }) => {
                assert!(path.ends_with("image.png"));
                assert_eq!(detected, "png");
            }
            other => panic!("Expected UnsupportedFile, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_ingest_missing_csv_is_io_error() {
        let result = ingest_file("/nonexistent/orders.csv", poll()).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
