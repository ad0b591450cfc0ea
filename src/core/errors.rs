/// Errors that can stop an export. `EmptyContent` is surfaced as a blocking
/// notice; everything else keeps prior state and shows a status warning.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Please paste some content first!")]
    EmptyContent,

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to rasterize text: {0}")]
    Render(String),

    #[error("failed to write file: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_message_matches_original_prompt() {
        let error = ExportError::EmptyContent;
        assert_eq!(error.to_string(), "Please paste some content first!");
    }

    #[test]
    fn test_io_error_converts_automatically() {
        fn fails() -> Result<(), ExportError> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))?;
            Ok(())
        }

        let error = fails().unwrap_err();
        assert!(matches!(error, ExportError::Io(_)));
    }
}
