// mrtcard/src/error.rs

use thiserror::Error;

/// Failure categories reported by the host NFC transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The user or platform refused NFC access.
    PermissionDenied,
    /// No NFC capability on this host.
    NotSupported,
    /// NFC exists but is switched off or unusable.
    NotReadable,
    /// The transport reported a tag read error event.
    ReadError,
    /// The event stream or link to the tag went away.
    Disconnected,
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PermissionDenied => "permission denied",
            Self::NotSupported => "not supported",
            Self::NotReadable => "not readable",
            Self::ReadError => "read error",
            Self::Disconnected => "disconnected",
        };
        f.write_str(s)
    }
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// A buffer was shorter than the field being read from it.
    #[error("invalid length: expected at least {expected}, got {actual}")]
    InvalidLength {
        /// Minimum length required.
        expected: usize,
        /// Length of the buffer.
        actual: usize,
    },

    /// A transaction block was not exactly 16 bytes.
    #[error("invalid block size: expected 16, got {actual}")]
    InvalidBlockSize {
        /// Length of the offending block.
        actual: usize,
    },

    /// A read response is shorter than its 13-byte header.
    #[error("response too short: {actual} bytes")]
    ResponseTooShort {
        /// Length of the response.
        actual: usize,
    },

    /// The card reported a non-zero status flag.
    #[error("card status error: status=({status1:#04x}, {status2:#04x})")]
    CardStatus {
        /// Status flag 1 (byte 10).
        status1: u8,
        /// Status flag 2 (byte 11).
        status2: u8,
    },

    /// Fewer block bytes than the declared block count needs.
    #[error("incomplete block data: expected {expected} bytes, got {actual}")]
    IncompleteBlockData {
        /// `block count * 16`.
        expected: usize,
        /// Bytes present after the header.
        actual: usize,
    },

    /// A response carried the wrong response code.
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse {
        /// Code the command should produce.
        expected: u8,
        /// Code found in the response.
        actual: u8,
    },

    /// A caller-supplied value is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No tag appeared within the read timeout.
    #[error("timeout waiting for tag")]
    TimeoutWaitingForTag,

    /// A tag was present but did not answer a command in time.
    #[error("timeout waiting for card response")]
    Timeout,

    /// The host NFC transport failed.
    #[error("transport error ({kind}): {message}")]
    Transport {
        /// Failure category.
        kind: TransportErrorKind,
        /// Transport-provided detail.
        message: String,
    },

    /// Every attempt of a read session failed.
    #[error("maximum retry attempts exceeded after {attempts} attempts: {last}")]
    MaxRetriesExceeded {
        /// Attempts made.
        attempts: u32,
        /// Error of the final attempt.
        #[source]
        last: Box<Error>,
    },
}

impl Error {
    /// Shorthand for [`Error::Transport`].
    pub fn transport(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self::Transport {
            kind,
            message: message.into(),
        }
    }

    /// Text suitable for showing to the person holding the card.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { kind, .. } => match kind {
                TransportErrorKind::PermissionDenied => {
                    "Please allow NFC access to read your card".to_string()
                }
                TransportErrorKind::NotSupported => {
                    "NFC is not available on your device".to_string()
                }
                TransportErrorKind::NotReadable => "Please enable NFC on your device".to_string(),
                TransportErrorKind::ReadError | TransportErrorKind::Disconnected => {
                    "Error reading card. Please try again".to_string()
                }
            },
            Self::TimeoutWaitingForTag => "Timeout waiting for tag".to_string(),
            Self::Timeout => "Timeout waiting for card response".to_string(),
            Self::ResponseTooShort { .. } => "Response too short".to_string(),
            Self::CardStatus { .. } => "Card read error".to_string(),
            Self::IncompleteBlockData { .. } => "Incomplete block data".to_string(),
            Self::MaxRetriesExceeded { last, .. } => last.user_message(),
            other => other.to_string(),
        }
    }

    /// The innermost concrete error, unwrapping `MaxRetriesExceeded`.
    pub fn root(&self) -> &Error {
        match self {
            Self::MaxRetriesExceeded { last, .. } => last.root(),
            other => other,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
