use sha1::{Digest, Sha1};

/// Length in bytes of a puzzle digest.
pub const DIGEST_LEN: usize = 20;

/// Calculates the SHA-1 digest of the raw puzzle string.
pub fn puzzle_digest(puzzle: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(puzzle.as_bytes());
    hasher.finalize().into()
}

/// Whether the first `difficulty` bytes of `digest` are all zero.
///
/// A difficulty longer than the digest can never be met and returns `false`.
pub fn meets_difficulty(digest: &[u8], difficulty: u8) -> bool {
    match digest.get(..usize::from(difficulty)) {
        Some(prefix) => prefix.iter().all(|byte| *byte == 0),
        None => false,
    }
}
