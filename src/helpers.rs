//! Helper utilities for the index client.
//!
//! Currently limited to random identifier generation for documents that are
//! submitted without an explicit id.

use rand::Rng;

/// Characters a random string is drawn from.
const RANDOM_STRING_CHARSET: &[u8] = b"azertyuiopqsdfghjklmwxcvbn1234567890";

/// Length of a generated document id.
pub const DOCUMENT_ID_LENGTH: usize = 20;

/// Generate a random alphanumeric string of the given length.
pub fn random_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| RANDOM_STRING_CHARSET[rng.gen_range(0..RANDOM_STRING_CHARSET.len())] as char)
        .collect()
}

/// Generate a random 20-character document id.
pub fn random_document_id() -> String {
    random_string(DOCUMENT_ID_LENGTH)
}
