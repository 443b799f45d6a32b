use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("report payload must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}
