use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenError>;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("degenerate {template} parameters: {detail}")]
    Degenerate {
        template: &'static str,
        detail: String,
    },
}

impl GenError {
    pub(crate) fn degenerate(template: &'static str, detail: impl Into<String>) -> Self {
        GenError::Degenerate {
            template,
            detail: detail.into(),
        }
    }
}
