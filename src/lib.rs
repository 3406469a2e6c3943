//! Verification of hashcash proof-of-work tokens.
//!
//! A token looks like `version:resource:timestamp:...`. [`Checker`] accepts it
//! when the SHA-1 digest of the whole string starts with the configured number
//! of zero bytes and the embedded timestamp, read as UTC, lies within half the
//! validity window of the current instant.
//!
//! ```
//! use hashcash_checker::{CheckErrorKind, Checker, HASHCASH_DATE_FORMAT};
//! use std::time::Duration;
//!
//! let checker = Checker::new(0, HASHCASH_DATE_FORMAT, Duration::from_secs(3600));
//! let err = checker.check("1:resource").unwrap_err();
//! assert_eq!(err.kind(), CheckErrorKind::MalformedPuzzle);
//! ```
//!
//! Checking is stateless. Tokens are not remembered, so a valid token can be
//! replayed until its timestamp leaves the window.

pub mod checker;
pub mod error;
pub mod puzzle;
pub mod time;
pub mod timestamp;
pub mod work;

pub use checker::{Checker, CheckerConfig, CheckerConfigBuilder, CheckerConfigBuilderError};
pub use error::{CheckError, CheckErrorKind, Error};
pub use puzzle::PuzzleFields;
pub use time::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
pub use timestamp::{parse_utc, ValidityWindow, HASHCASH_DATE_FORMAT};
pub use work::{meets_difficulty, puzzle_digest, DIGEST_LEN};
