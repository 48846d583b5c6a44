use thiserror::Error;

/// Opaque failure raised by any stage of the stylization pipeline.
///
/// Decode, rasterization, composite, and encode failures all surface as this
/// one kind; no partial result is ever returned and nothing is retried.
#[derive(Debug, Error)]
#[error("{context}")]
pub struct ProcessingError {
    context: String,
    #[source]
    source: Option<image::ImageError>,
}

impl ProcessingError {
    pub(crate) fn with_source(context: impl Into<String>, source: image::ImageError) -> Self {
        Self {
            context: context.into(),
            source: Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_context() {
        let err = ProcessingError {
            context: "failed to decode input image".to_string(),
            source: None,
        };
        assert_eq!(err.to_string(), "failed to decode input image");
    }
}
