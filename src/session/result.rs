use std::time::Duration;

use chrono::{DateTime, Utc};

/// Average word length used to turn typed characters into words.
pub const CHARS_PER_WORD: f64 = 5.0;

/// Completions faster than this are measured as taking this long.
pub const MIN_ELAPSED: Duration = Duration::from_millis(1);

#[derive(Clone, Debug)]
pub struct SessionResult {
    pub wpm: f64,
    pub accuracy: f64,
    pub correct: usize,
    pub incorrect: usize,
    pub total_chars: usize,
    pub elapsed_secs: f64,
    pub finished_at: DateTime<Utc>,
}

impl SessionResult {
    pub fn compute(correct: usize, incorrect: usize, elapsed: Duration) -> Self {
        let elapsed = elapsed.max(MIN_ELAPSED);
        let total_chars = correct + incorrect;

        let minutes = elapsed.as_millis() as f64 / 60_000.0;
        let words = total_chars as f64 / CHARS_PER_WORD;
        let wpm = round2(words / minutes);

        let accuracy = if total_chars > 0 {
            round2(correct as f64 / total_chars as f64 * 100.0)
        } else {
            0.0
        };

        Self {
            wpm,
            accuracy,
            correct,
            incorrect,
            total_chars,
            elapsed_secs: elapsed.as_secs_f64(),
            finished_at: Utc::now(),
        }
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
