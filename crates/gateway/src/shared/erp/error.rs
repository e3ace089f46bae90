use thiserror::Error;

/// Ошибки обращения к ERP
#[derive(Debug, Error)]
pub enum ErpError {
    #[error("ERP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("ERP error: {message}")]
    Rpc { message: String },

    #[error("Unexpected ERP response: {0}")]
    Decode(String),

    #[error("ERP rejected credentials of service account '{0}'")]
    AuthenticationFailed(String),
}

impl ErpError {
    pub fn rpc(message: impl Into<String>) -> Self {
        ErpError::Rpc {
            message: message.into(),
        }
    }
}
