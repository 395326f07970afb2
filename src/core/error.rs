use thiserror::Error;

/// Errors surfaced by the strict entry points and the ingestion features.
///
/// The resolver and [`normalize`](crate::core::normalize) are total
/// functions and never produce one of these.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// The document root is not a mapping carrying the bureau response
    /// envelope.
    #[error("document has no INProfileResponse envelope")]
    MissingEnvelope,

    /// XML ingestion failed.
    #[error("XML error: {0}")]
    Xml(String),
}
