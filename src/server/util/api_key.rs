use rand::{distr::Alphanumeric, Rng};

/// Length of generated API keys.
const API_KEY_LENGTH: usize = 32;

/// Generates a random alphanumeric API key candidate.
///
/// Uniqueness is not guaranteed here; the registration workflow checks the
/// store and regenerates on collision until an unused key is found.
///
/// # Returns
/// - `String` - Random 32-character alphanumeric key
pub fn generate_api_key() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(API_KEY_LENGTH)
        .map(char::from)
        .collect()
}
