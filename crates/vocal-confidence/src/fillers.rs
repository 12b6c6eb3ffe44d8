//! Filler sounds and word counts from the transcript

/// Hesitation sounds as a transcriber writes them
pub const FILLER_SOUNDS: [&str; 6] = ["um", "uh", "er", "ah", "eh", "hmm"];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Case-insensitive whole-word filler occurrences
pub fn count_fillers(transcript: &str) -> usize {
    transcript
        .to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|word| FILLER_SOUNDS.contains(word))
        .count()
}

/// Whitespace-separated tokens
pub fn word_count(transcript: &str) -> usize {
    transcript.split_whitespace().count()
}
