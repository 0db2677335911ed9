use std::path::{Path, PathBuf};

use crate::app_error::AppResult;

use super::filename::SafeFilename;

/// Writes the decoded audio below `output_dir`, replacing any existing file.
#[tracing::instrument(name = "persist_audio", skip(bytes), fields(len = bytes.len()))]
pub async fn persist_audio(
    output_dir: &Path,
    filename: &SafeFilename,
    bytes: &[u8],
) -> AppResult<PathBuf> {
    let file_path = output_dir.join(filename.as_str());
    tokio::fs::write(&file_path, bytes).await?;
    Ok(file_path)
}

#[cfg(test)]
mod test {
    use super::persist_audio;
    use crate::app_error::ServerError;
    use crate::convert::filename::SafeFilename;

    #[tokio::test]
    async fn writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let filename = SafeFilename::new(Some("song.mp3")).unwrap();

        let path = persist_audio(dir.path(), &filename, b"first").await.unwrap();
        assert_eq!(path, dir.path().join("song.mp3"));
        persist_audio(dir.path(), &filename, b"second").await.unwrap();

        assert_eq!(std::fs::read(path).unwrap(), b"second".to_vec());
    }

    #[tokio::test]
    async fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let result = persist_audio(&missing, &SafeFilename::default(), b"abc").await;
        assert!(matches!(result, Err(ServerError::IoError(_))));
    }
}
