use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("document has no content to export")]
    EmptyDocument,

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("rasterization failed: {0}")]
    Raster(String),

    #[error("PDF assembly failed: {0}")]
    Pdf(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
