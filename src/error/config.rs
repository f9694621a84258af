use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("`{0}` is not defined in config.")]
    MissingEnvVar(String),

    /// Value is not written as `<type>:<value>` with a known type.
    ///
    /// Accepted types are `str`, `int` and `bool`.
    #[error("`{0}` has an invalid type in config.")]
    InvalidType(String),

    /// Value is typed `int` but does not parse as a 64-bit integer, or is not a valid
    /// Discord id where one is expected.
    #[error("`{0}` is using an invalid integer value in config.")]
    InvalidInt(String),

    /// Value is typed `bool` but is not one of `true`, `True`, `false`, `False`.
    #[error("`{0}` is using an invalid boolean value in config.")]
    InvalidBool(String),

    /// Value parsed fine but has a different type than the caller asked for.
    #[error("`{var}` must be of type `{expected}` in config.")]
    TypeMismatch {
        /// The variable that was read
        var: String,
        /// The type the caller expected
        expected: &'static str,
    },
}
