use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("{context}")]
    Api {
        context: String,
        #[source]
        source: anyhow::Error,
    },
}

impl SyncError {
    pub fn api(context: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        SyncError::Api {
            context: context.into(),
            source: source.into(),
        }
    }
}

pub type SyncResult<T> = std::result::Result<T, SyncError>;
