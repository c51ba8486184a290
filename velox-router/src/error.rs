use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("invalid location url `{url}`: {source}")]
    InvalidLocation {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("location `{0}` has an opaque origin")]
    OpaqueOrigin(String),
}
