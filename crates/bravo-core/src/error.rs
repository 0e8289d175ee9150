use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read snapshot {path}: {source}")]
    SnapshotIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot {path}: {reason}")]
    SnapshotParse { path: String, reason: String },

    #[error("unknown store: \"{0}\"")]
    UnknownStore(String),

    #[error("invalid product key \"{0}\": expected <store>:<product_id>")]
    InvalidProductKey(String),

    #[error("validation error: {0}")]
    Validation(String),
}
