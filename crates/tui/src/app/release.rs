//! Key release detection.
//!
//! Terminals that speak the keyboard-enhancement protocol report key
//! releases; others only report presses and auto-repeats. In the latter case
//! a key counts as held until no press or repeat has been seen for the
//! release timeout, and the UI tick synthesizes the release.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How key releases are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseMode {
    /// The terminal reports release events.
    Native,
    /// Releases are synthesized after `timeout` without a repeat.
    Synthesized { timeout: Duration },
}

/// Tracks last-seen press times when releases must be synthesized.
#[derive(Debug, Clone)]
pub struct ReleaseTimer {
    mode: ReleaseMode,
    last_seen: HashMap<String, Instant>,
}

impl ReleaseTimer {
    pub fn new(mode: ReleaseMode) -> Self {
        Self {
            mode,
            last_seen: HashMap::new(),
        }
    }

    pub fn mode(&self) -> ReleaseMode {
        self.mode
    }

    /// Records a press or repeat of `key`.
    pub fn note_press(&mut self, key: &str, now: Instant) {
        if let ReleaseMode::Synthesized { .. } = self.mode {
            self.last_seen.insert(key.to_string(), now);
        }
    }

    /// Records a real release of `key`.
    pub fn note_release(&mut self, key: &str) {
        self.last_seen.remove(key);
    }

    /// Returns true if `key` is still inside its synthesized hold at `now`.
    ///
    /// Without release events an auto-repeat arrives as a plain press, so a
    /// press of a held key is a repeat. Always false in native mode.
    pub fn is_held(&self, key: &str, now: Instant) -> bool {
        let ReleaseMode::Synthesized { timeout } = self.mode else {
            return false;
        };
        self.last_seen
            .get(key)
            .is_some_and(|seen| now.saturating_duration_since(*seen) < timeout)
    }

    /// Removes and returns the keys whose synthesized hold has lapsed at `now`.
    pub fn expired(&mut self, now: Instant) -> Vec<String> {
        let ReleaseMode::Synthesized { timeout } = self.mode else {
            return Vec::new();
        };

        let mut lapsed: Vec<String> = self
            .last_seen
            .iter()
            .filter(|(_, seen)| now.saturating_duration_since(**seen) >= timeout)
            .map(|(key, _)| key.clone())
            .collect();
        lapsed.sort();

        for key in &lapsed {
            self.last_seen.remove(key);
        }
        lapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_millis(300);

    #[test]
    fn test_native_never_expires() {
        let mut timer = ReleaseTimer::new(ReleaseMode::Native);
        let start = Instant::now();
        timer.note_press("a", start);
        assert!(timer.expired(start + Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn test_synthesized_expires_after_timeout() {
        let mut timer = ReleaseTimer::new(ReleaseMode::Synthesized { timeout: TIMEOUT });
        let start = Instant::now();
        timer.note_press("a", start);

        assert!(timer.expired(start + Duration::from_millis(100)).is_empty());
        assert_eq!(timer.expired(start + TIMEOUT), vec!["a".to_string()]);
        assert!(timer.expired(start + TIMEOUT * 2).is_empty());
    }

    #[test]
    fn test_repeat_extends_hold() {
        let mut timer = ReleaseTimer::new(ReleaseMode::Synthesized { timeout: TIMEOUT });
        let start = Instant::now();
        timer.note_press("a", start);
        timer.note_press("a", start + Duration::from_millis(250));

        assert!(timer.expired(start + Duration::from_millis(400)).is_empty());
        assert_eq!(
            timer.expired(start + Duration::from_millis(550)),
            vec!["a".to_string()]
        );
    }

    #[test]
    fn test_is_held_until_timeout() {
        let mut timer = ReleaseTimer::new(ReleaseMode::Synthesized { timeout: TIMEOUT });
        let start = Instant::now();
        assert!(!timer.is_held("enter", start));

        timer.note_press("enter", start);
        assert!(timer.is_held("enter", start + Duration::from_millis(100)));
        assert!(!timer.is_held("enter", start + TIMEOUT));
        assert!(!timer.is_held("a", start));
    }

    #[test]
    fn test_native_is_never_held() {
        let mut timer = ReleaseTimer::new(ReleaseMode::Native);
        let start = Instant::now();
        timer.note_press("enter", start);
        assert!(!timer.is_held("enter", start));
    }

    #[test]
    fn test_real_release_clears() {
        let mut timer = ReleaseTimer::new(ReleaseMode::Synthesized { timeout: TIMEOUT });
        let start = Instant::now();
        timer.note_press("a", start);
        timer.note_release("a");
        assert!(timer.expired(start + TIMEOUT).is_empty());
    }
}
