#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("destination is a directory")]
    DestinationIsDirectory,

    #[error("destination cannot be opened")]
    Destination(#[source] std::io::Error),

    #[error("stream read failed")]
    Stream(#[source] std::io::Error),

    #[error("write failed")]
    Write(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
