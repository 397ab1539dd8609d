use derive_more::Display;

#[derive(Debug, Display)]
pub enum CalculatorError {
    #[display(fmt = "Config Error: {}", _0)]
    ConfigError(String),

    #[display(fmt = "IO Error: {}", _0)]
    IOError(String),
}

impl std::error::Error for CalculatorError {}

impl From<::config::ConfigError> for CalculatorError {
    fn from(e: ::config::ConfigError) -> Self {
        Self::ConfigError(e.to_string())
    }
}

impl From<std::io::Error> for CalculatorError {
    fn from(e: std::io::Error) -> Self {
        Self::IOError(e.to_string())
    }
}
