use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable is set but cannot be parsed.
    ///
    /// Check the documentation or `.env.example` file for the expected format.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// The value that failed to parse
        value: String,
    },
}
