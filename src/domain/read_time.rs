/// Reading speed used for read time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated minutes needed to read `content`, rounded up.
///
/// Words are whitespace-separated tokens, so empty content reads in 0 minutes
/// and any non-empty content in at least 1.
pub fn calculate_read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE) as u32
}
