pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("workflow data is not a JSON object")]
    NotAnObject,

    #[error("workflow data is missing the `{field}` collection")]
    MissingCollection { field: &'static str },

    #[error("workflow JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
