use chrono::Utc;
use rand::Rng;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_SUFFIX_LEN: usize = 9;

/// Generate a post id: the current time in milliseconds encoded in base 36,
/// followed by a random base-36 fragment.
///
/// Uniqueness is probabilistic. Existing ids are not consulted.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let mut id = to_base36(millis);
    let mut rng = rand::thread_rng();
    id.extend((0..RANDOM_SUFFIX_LEN).map(|_| BASE36_DIGITS[rng.gen_range(0..36)] as char));
    id
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".into();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect()
}
