use std::io;
use std::path::PathBuf;

/// Errors raised while encoding, decoding or persisting a ping.
#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    #[error("could not open {}: {source}", .path.display())]
    OpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(
        "truncated stream in {section}: expected {expected_beams} beams, decoded {decoded_beams}"
    )]
    TruncatedStream {
        section: &'static str,
        expected_beams: u32,
        decoded_beams: u32,
    },
    #[error("beam count {0} does not fit the 32-bit count field")]
    CountOverflow(usize),
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
}

pub type CodecResult<T> = Result<T, CodecError>;
