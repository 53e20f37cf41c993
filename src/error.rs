use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("String of {len} bytes exceeds the 65535 byte limit")]
    StringTooLong { len: usize },

    #[error("Binary data of {len} bytes exceeds the 65535 byte limit")]
    BinaryTooLong { len: usize },

    #[error("Variable Byte Integer out of range: {0}")]
    VariableByteIntegerOutOfRange(u64),

    #[error("Packet of {size} bytes exceeds the maximum packet size of {maximum}")]
    PacketTooLarge { size: usize, maximum: u32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for errors caused by a value that does not fit its wire
    /// representation.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Error::StringTooLong { .. }
                | Error::BinaryTooLong { .. }
                | Error::VariableByteIntegerOutOfRange(_)
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
