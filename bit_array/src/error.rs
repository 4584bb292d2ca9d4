use raw_bits::BufError;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum BitArrayError {
    #[cfg_attr(feature = "std", error("buffer error: {0}"))]
    Buffer(BufError),
}

impl From<BufError> for BitArrayError {
    fn from(err: BufError) -> Self {
        BitArrayError::Buffer(err)
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitArrayError::Buffer(e) => write!(f, "buffer error: {}", e),
        }
    }
}
