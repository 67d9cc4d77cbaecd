use thiserror::Error;

use hifitime::HifitimeError;

#[derive(Debug, Error)]
pub enum Error {
    /// Position value could not be interpreted as degrees and decimal minutes.
    #[error("invalid coordinate \"{0}\"")]
    InvalidCoordinate(String),

    /// System clock could not be converted to an UTC [Epoch](hifitime::Epoch).
    #[error("system time error: {0}")]
    SystemTime(HifitimeError),

    /// Ellipsoidal forward projection did not converge
    /// (nearly antipodal or degenerate input).
    #[error("geodesic forward projection did not converge")]
    Geodesy,

    /// A sink panicked while holding the shared navigation state.
    #[error("shared navigation state is poisoned")]
    PoisonedState,

    /// Transport failure. This only ends the sink that wound up here:
    /// the shared navigation state is not affected.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Serial port could not be opened or configured.
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// Serial line speed is not a standard baud rate.
    #[error("unsupported baud rate: {0}")]
    UnsupportedBaudRate(u32),

    /// The TCP server refuses clients above its configured limit.
    #[error("maximal number of clients reached")]
    MaxConnections,
}

impl From<HifitimeError> for Error {
    fn from(e: HifitimeError) -> Self {
        Self::SystemTime(e)
    }
}
