#[cfg(feature = "std")]
use thiserror::Error;

/// Buffer errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum BufError {
    /// Allocation of the requested number of bytes failed
    #[cfg_attr(feature = "std", error("failed to allocate {0} bytes"))]
    Alloc(usize),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BufError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BufError::Alloc(n) => write!(f, "failed to allocate {} bytes", n),
        }
    }
}
