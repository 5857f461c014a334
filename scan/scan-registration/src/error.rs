//! Error types for scanner network reconstruction.

use thiserror::Error;

/// Errors that can occur during scanner network reconstruction.
///
/// Neither variant is retried internally: the rotation and pair searches are
/// already exhaustive, so both propagate directly to the caller and no
/// partial result is returned.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The fingerprint stage reported enough rotation-invariant matches, but
    /// no rotation/translation cleared the exact overlap threshold.
    ///
    /// Indicates corrupt input or a mis-tuned threshold.
    #[error(
        "fingerprints of scanners {origin} and {candidate} matched, \
         but no rotation cleared the overlap threshold"
    )]
    AlignmentFailed {
        /// Id of the already-positioned scanner.
        origin: u32,
        /// Id of the candidate scanner.
        candidate: u32,
    },

    /// A full round over every (positioned, unpositioned) pair found no
    /// alignable scanner while some remain unpositioned.
    #[error(
        "scanner network is disconnected: {unpositioned} of \
         {total} scanners cannot be reached from the reference scanner"
    )]
    DisconnectedNetwork {
        /// Number of scanners that could not be positioned.
        unpositioned: usize,
        /// Total number of scanners in the network.
        total: usize,
    },
}

/// Result type for registration operations.
pub type RegistrationResult<T> = Result<T, RegistrationError>;
