use std::time::{Duration, Instant};

use crate::session::input::{CharStatus, Keystroke, KeystrokeEvent};
use crate::session::result::SessionResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Running,
    Ended,
}

/// One round of the typing test, from the moment a sentence arrives until it
/// has been typed out in full.
#[derive(Clone, Debug)]
pub struct Session {
    pub sentence: Vec<char>,
    pub typed: Vec<char>,
    pub correct_count: usize,
    pub incorrect_count: usize,
    pub started_at: Option<Instant>,
    pub finished_at: Option<Instant>,
    pub phase: SessionPhase,
    pub result: Option<SessionResult>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            sentence: Vec::new(),
            typed: Vec::new(),
            correct_count: 0,
            incorrect_count: 0,
            started_at: None,
            finished_at: None,
            phase: SessionPhase::Idle,
            result: None,
        }
    }

    /// Reset everything and start timing against `sentence`.
    pub fn begin(&mut self, sentence: &str, now: Instant) {
        *self = Self {
            sentence: sentence.chars().collect(),
            started_at: Some(now),
            phase: SessionPhase::Running,
            ..Self::new()
        };
    }

    pub fn has_started(&self) -> bool {
        self.phase != SessionPhase::Idle
    }

    pub fn has_ended(&self) -> bool {
        self.phase == SessionPhase::Ended
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn is_complete(&self) -> bool {
        self.typed.len() >= self.sentence.len()
    }

    pub fn typed_input(&self) -> String {
        self.typed.iter().collect()
    }

    pub fn sentence_text(&self) -> String {
        self.sentence.iter().collect()
    }

    pub fn wpm(&self) -> Option<f64> {
        self.result.as_ref().map(|r| r.wpm)
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.result.as_ref().map(|r| r.accuracy)
    }

    /// Feed one key press. Returns the recorded keystroke, or `None` when the
    /// key was ignored.
    pub fn handle_key(&mut self, key: Keystroke, now: Instant) -> Option<KeystrokeEvent> {
        if !self.is_running() || self.is_complete() {
            return None;
        }
        let actual = key.printable()?;

        let idx = self.typed.len();
        let expected = self.sentence[idx];
        let correct = actual == expected;

        self.typed.push(actual);
        if correct {
            self.correct_count += 1;
        } else {
            self.incorrect_count += 1;
        }

        if self.typed.len() == self.sentence.len() {
            self.compute_results(now);
        }

        Some(KeystrokeEvent {
            expected,
            actual,
            correct,
        })
    }

    fn compute_results(&mut self, now: Instant) {
        self.finished_at = Some(now);
        let elapsed = self
            .started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default();
        self.result = Some(SessionResult::compute(
            self.correct_count,
            self.incorrect_count,
            elapsed,
        ));
        self.phase = SessionPhase::Ended;
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            (Some(start), None) => now.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    pub fn char_status(&self, idx: usize) -> CharStatus {
        match (self.typed.get(idx), self.sentence.get(idx)) {
            (Some(&typed), Some(&target)) if typed == target => CharStatus::Correct,
            (Some(&typed), _) => CharStatus::Incorrect(typed),
            _ => CharStatus::Pending,
        }
    }

    pub fn progress(&self) -> f64 {
        if self.sentence.is_empty() {
            return 0.0;
        }
        self.typed.len() as f64 / self.sentence.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(session: &mut Session, text: &str, at: Instant) {
        for ch in text.chars() {
            session.handle_key(Keystroke::Char(ch), at);
        }
    }

    fn assert_counts_match(session: &Session) {
        assert_eq!(
            session.correct_count + session.incorrect_count,
            session.typed.len()
        );
        assert!(session.typed.len() <= session.sentence.len());
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.phase, SessionPhase::Idle);
        assert!(!session.has_started());
        assert!(session.wpm().is_none());
        assert!(session.accuracy().is_none());
    }

    #[test]
    fn test_keys_ignored_before_start() {
        let mut session = Session::new();
        assert!(session.handle_key(Keystroke::Char('a'), Instant::now()).is_none());
        assert!(session.typed.is_empty());
        assert_eq!(session.correct_count, 0);
        assert_eq!(session.incorrect_count, 0);
    }

    #[test]
    fn test_typing_cat_correctly() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin("cat", t0);

        for (i, ch) in ['c', 'a', 't'].into_iter().enumerate() {
            assert!(!session.has_ended());
            let ev = session.handle_key(Keystroke::Char(ch), t0 + Duration::from_secs(1));
            assert!(ev.is_some_and(|e| e.correct));
            assert_eq!(session.correct_count, i + 1);
            assert_counts_match(&session);
        }

        assert!(session.has_ended());
        assert_eq!(session.typed_input(), "cat");
        assert_eq!(session.incorrect_count, 0);
        assert_eq!(session.accuracy(), Some(100.0));
    }

    #[test]
    fn test_typing_cat_with_one_miss() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin("cat", t0);
        type_str(&mut session, "cxt", t0 + Duration::from_secs(2));

        assert!(session.has_ended());
        assert_eq!(session.correct_count, 2);
        assert_eq!(session.incorrect_count, 1);
        assert_eq!(session.accuracy(), Some(66.67));
        assert_eq!(session.char_status(1), CharStatus::Incorrect('x'));
    }

    #[test]
    fn test_keys_ignored_after_end() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin("hi", t0);
        type_str(&mut session, "hi", t0);
        assert!(session.has_ended());

        assert!(session.handle_key(Keystroke::Char('!'), t0).is_none());
        assert_eq!(session.typed_input(), "hi");
        assert_counts_match(&session);
    }

    #[test]
    fn test_non_printable_keys_are_ignored() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin("ab", t0);

        assert!(session.handle_key(Keystroke::Other, t0).is_none());
        assert!(session.handle_key(Keystroke::Char('\n'), t0).is_none());
        assert!(session.typed.is_empty());
        assert!(session.is_running());
    }

    #[test]
    fn test_wpm_from_start_mark() {
        let t0 = Instant::now();
        let mut session = Session::new();
        // 10 chars = 2 words, finished after 30 seconds
        session.begin("abcde fghi", t0);
        type_str(&mut session, "abcde fghi", t0 + Duration::from_secs(30));

        assert_eq!(session.wpm(), Some(4.0));
        assert_eq!(session.elapsed(t0 + Duration::from_secs(99)), Duration::from_secs(30));
    }

    #[test]
    fn test_instant_completion_has_finite_wpm() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin("a", t0);
        session.handle_key(Keystroke::Char('a'), t0);

        assert!(session.has_ended());
        assert!(session.wpm().is_some_and(f64::is_finite));
    }

    #[test]
    fn test_counts_track_typed_length_throughout() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin("the quick brown fox", t0);

        for ch in "thw quicj brpwn fox and more".chars() {
            session.handle_key(Keystroke::Char(ch), t0);
            assert_counts_match(&session);
        }
        assert!(session.has_ended());
        assert_eq!(session.typed.len(), session.sentence.len());
    }

    #[test]
    fn test_multibyte_sentence_counts_chars() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin("héllo", t0);
        type_str(&mut session, "héllo", t0);

        assert!(session.has_ended());
        assert_eq!(session.correct_count, 5);
    }

    #[test]
    fn test_begin_resets_previous_round() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin("ab", t0);
        type_str(&mut session, "xb", t0 + Duration::from_secs(1));
        assert!(session.has_ended());

        let t1 = t0 + Duration::from_secs(5);
        session.begin("cd", t1);

        let mut fresh = Session::new();
        fresh.begin("cd", t1);

        assert_eq!(session.phase, SessionPhase::Running);
        assert_eq!(session.typed, fresh.typed);
        assert_eq!(session.correct_count, fresh.correct_count);
        assert_eq!(session.incorrect_count, fresh.incorrect_count);
        assert_eq!(session.started_at, fresh.started_at);
        assert_eq!(session.finished_at, None);
        assert!(session.result.is_none());
    }

    #[test]
    fn test_char_status_and_progress() {
        let t0 = Instant::now();
        let mut session = Session::new();
        session.begin("abcd", t0);
        type_str(&mut session, "ax", t0);

        assert_eq!(session.char_status(0), CharStatus::Correct);
        assert_eq!(session.char_status(1), CharStatus::Incorrect('x'));
        assert_eq!(session.char_status(2), CharStatus::Pending);
        assert_eq!(session.char_status(10), CharStatus::Pending);
        assert_eq!(session.progress(), 0.5);
    }
}
