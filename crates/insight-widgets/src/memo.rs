#![forbid(unsafe_code)]

//! Voice memo recording state.
//!
//! Speech recognition sits behind [`Transcriber`]. The memo only decides when
//! to start and stop it and keeps the latest transcript for display.
//!
//! # Failure Modes
//!
//! - [`Transcriber::start`] may fail with [`TranscriberError`]. The memo then
//!   stays idle and keeps the error for display until the next attempt.

use std::fmt;
use std::time::Duration;

/// Why a transcriber refused to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriberError {
    /// No recognizer on this host.
    Unavailable,
    /// The user refused access.
    Denied,
}

impl fmt::Display for TranscriberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "speech recognition is unavailable"),
            Self::Denied => write!(f, "speech recognition permission denied"),
        }
    }
}

impl std::error::Error for TranscriberError {}

/// Source of live transcripts.
pub trait Transcriber {
    fn start(&mut self) -> Result<(), TranscriberError>;

    fn stop(&mut self);

    /// Advance by `dt` and return the best transcript so far, if any.
    fn poll_transcript(&mut self, dt: Duration) -> Option<String>;
}

/// Reveals a fixed phrase word by word at a steady rate.
#[derive(Debug, Clone)]
pub struct ScriptedTranscriber {
    words: Vec<String>,
    words_per_second: f64,
    elapsed: Duration,
    running: bool,
    refusal: Option<TranscriberError>,
}

impl ScriptedTranscriber {
    /// Non-finite or non-positive rates are treated as one word per second.
    #[must_use]
    pub fn new(phrase: &str, words_per_second: f64) -> Self {
        let words_per_second = if words_per_second.is_finite() && words_per_second > 0.0 {
            words_per_second
        } else {
            1.0
        };
        Self {
            words: phrase.split_whitespace().map(str::to_owned).collect(),
            words_per_second,
            elapsed: Duration::ZERO,
            running: false,
            refusal: None,
        }
    }

    /// A transcriber whose `start` always fails with `error`.
    #[must_use]
    pub fn refusing(error: TranscriberError) -> Self {
        Self {
            refusal: Some(error),
            ..Self::new("", 1.0)
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn revealed(&self) -> usize {
        let n = (self.elapsed.as_secs_f64() * self.words_per_second).floor() as usize;
        n.min(self.words.len())
    }
}

impl Transcriber for ScriptedTranscriber {
    fn start(&mut self) -> Result<(), TranscriberError> {
        if let Some(error) = self.refusal {
            return Err(error);
        }
        self.elapsed = Duration::ZERO;
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn poll_transcript(&mut self, dt: Duration) -> Option<String> {
        if !self.running {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        match self.revealed() {
            0 => None,
            n => Some(self.words[..n].join(" ")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemoStatus {
    #[default]
    Idle,
    Recording,
}

#[derive(Debug, Clone)]
pub struct VoiceMemo<T> {
    transcriber: T,
    status: MemoStatus,
    text: String,
    error: Option<TranscriberError>,
}

impl<T: Transcriber> VoiceMemo<T> {
    #[must_use]
    pub fn new(transcriber: T) -> Self {
        Self {
            transcriber,
            status: MemoStatus::Idle,
            text: String::new(),
            error: None,
        }
    }

    /// Start or stop recording. Returns the new status.
    pub fn toggle(&mut self) -> MemoStatus {
        self.status = match self.status {
            MemoStatus::Idle => match self.transcriber.start() {
                Ok(()) => {
                    self.error = None;
                    MemoStatus::Recording
                }
                Err(error) => {
                    self.error = Some(error);
                    MemoStatus::Idle
                }
            },
            MemoStatus::Recording => {
                self.transcriber.stop();
                MemoStatus::Idle
            }
        };

        #[cfg(feature = "tracing")]
        {
            let _span = tracing::debug_span!(
                "memo.toggle",
                recording = self.is_recording(),
                failed = self.error.is_some()
            )
            .entered();
        }

        self.status
    }

    /// While recording, replace the text with the latest transcript.
    pub fn tick(&mut self, dt: Duration) {
        if self.status != MemoStatus::Recording {
            return;
        }
        if let Some(text) = self.transcriber.poll_transcript(dt) {
            self.text = text;
        }
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> MemoStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.status == MemoStatus::Recording
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self.status {
            MemoStatus::Idle => "Tap to Record",
            MemoStatus::Recording => "Recording...",
        }
    }

    /// Mic while idle, stop while recording.
    #[must_use]
    pub fn button_icon(&self) -> &'static str {
        match self.status {
            MemoStatus::Idle => "🎤",
            MemoStatus::Recording => "⏹",
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<TranscriberError> {
        self.error
    }

    #[must_use]
    pub fn transcriber(&self) -> &T {
        &self.transcriber
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn scripted_reveals_words_over_time() {
        let mut t = ScriptedTranscriber::new("revise newton laws tonight", 2.0);
        t.start().unwrap();
        assert_eq!(t.poll_transcript(Duration::from_millis(400)), None);
        assert_eq!(t.poll_transcript(Duration::from_millis(100)).as_deref(), Some("revise"));
        assert_eq!(t.poll_transcript(SEC).as_deref(), Some("revise newton laws"));
        assert_eq!(
            t.poll_transcript(SEC * 10).as_deref(),
            Some("revise newton laws tonight")
        );
    }

    #[test]
    fn stopped_transcriber_is_silent() {
        let mut t = ScriptedTranscriber::new("a b", 10.0);
        assert_eq!(t.poll_transcript(SEC), None);
    }

    #[test]
    fn memo_toggles_and_collects_text() {
        let mut memo = VoiceMemo::new(ScriptedTranscriber::new("one two three", 1.0));
        assert_eq!(memo.label(), "Tap to Record");

        assert_eq!(memo.toggle(), MemoStatus::Recording);
        assert_eq!(memo.label(), "Recording...");
        memo.tick(SEC * 2);
        assert_eq!(memo.text(), "one two");

        assert_eq!(memo.toggle(), MemoStatus::Idle);
        assert!(!memo.transcriber().is_running());
        memo.tick(SEC * 5);
        assert_eq!(memo.text(), "one two");
    }

    #[test]
    fn refused_start_stays_idle() {
        let mut memo = VoiceMemo::new(ScriptedTranscriber::refusing(TranscriberError::Denied));
        assert_eq!(memo.toggle(), MemoStatus::Idle);
        assert_eq!(memo.error(), Some(TranscriberError::Denied));
        assert_eq!(
            memo.error().map(|e| e.to_string()).as_deref(),
            Some("speech recognition permission denied")
        );
    }

    #[test]
    fn non_positive_rate_falls_back() {
        let mut t = ScriptedTranscriber::new("x y", f64::NAN);
        t.start().unwrap();
        assert_eq!(t.poll_transcript(SEC).as_deref(), Some("x"));
    }
}
