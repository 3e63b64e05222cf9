//! The composition animation's timeline.
//!
//! Progress runs from 0 to 1 over five segments: fade (0 → 0.33), a pause, bridge
//! (0.33 → 0.67), a pause, and straighten (0.67 → 1). [`TimelineConfig::progress`] is a pure
//! function of elapsed time; [`Animation`] wraps it in the idle/running/complete state machine
//! driven by per-frame ticks.
use crate::error::{RelationError, Result};

use std::time::{Duration, Instant};

/// Segment durations in milliseconds and the progress reached at the end of each moving phase.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub fade_ms: u64,
    pub pause1_ms: u64,
    pub bridge_ms: u64,
    pub pause2_ms: u64,
    pub straighten_ms: u64,
    /// Progress held during the first pause.
    pub fade_end: f64,
    /// Progress held during the second pause.
    pub bridge_end: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            fade_ms: 1000,
            pause1_ms: 1500,
            bridge_ms: 2000,
            pause2_ms: 1000,
            straighten_ms: 1500,
            fade_end: 0.33,
            bridge_end: 0.67,
        }
    }
}

/// Which segment of the timeline an elapsed time falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    Fade,
    Pause1,
    Bridge,
    Pause2,
    Straighten,
    Complete,
}

/// The four steps shown to the viewer, derived from progress.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Stage {
    AllRelations,
    RemoveSingleEdges,
    ConnectAndShrink,
    StraightenLines,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Self::AllRelations => "1. All Relations",
            Self::RemoveSingleEdges => "2. Remove Single Edges",
            Self::ConnectAndShrink => "3. Connect & Shrink",
            Self::StraightenLines => "4. Straighten Lines",
        }
    }
}

// Linear interpolation over a segment of length `len` starting at `t0`; zero-length segments
// jump straight to `to`.
fn segment(t: f64, t0: f64, len: f64, from: f64, to: f64) -> f64 {
    if len <= 0.0 {
        return to;
    }
    let f = ((t - t0) / len).clamp(0.0, 1.0);
    from * (1.0 - f) + to * f
}

impl TimelineConfig {
    pub fn new(durations_ms: [u64; 5], fade_end: f64, bridge_end: f64) -> Result<Self> {
        let [fade_ms, pause1_ms, bridge_ms, pause2_ms, straighten_ms] = durations_ms;
        let config = Self {
            fade_ms,
            pause1_ms,
            bridge_ms,
            pause2_ms,
            straighten_ms,
            fade_end,
            bridge_end,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.checked_total_ms() {
            None => return Err(RelationError::timeline("total duration overflows")),
            Some(0) => return Err(RelationError::timeline("total duration must be positive")),
            Some(_) => {}
        }
        if !(0.0 < self.fade_end && self.fade_end < self.bridge_end && self.bridge_end < 1.0) {
            return Err(RelationError::timeline(format!(
                "keyframes must satisfy 0 < {} < {} < 1",
                self.fade_end, self.bridge_end
            )));
        }
        Ok(())
    }

    fn durations_ms(&self) -> [u64; 5] {
        [
            self.fade_ms,
            self.pause1_ms,
            self.bridge_ms,
            self.pause2_ms,
            self.straighten_ms,
        ]
    }

    fn checked_total_ms(&self) -> Option<u64> {
        self.durations_ms()
            .into_iter()
            .try_fold(0u64, |acc, d| acc.checked_add(d))
    }

    /// Segment end times in milliseconds, cumulative. Saturates on unvalidated configs.
    fn marks(&self) -> [f64; 5] {
        let mut acc = 0u64;
        self.durations_ms().map(|d| {
            acc = acc.saturating_add(d);
            acc as f64
        })
    }

    /// Sum of the five segments, saturating at `u64::MAX` milliseconds.
    pub fn total(&self) -> Duration {
        Duration::from_millis(
            self.durations_ms()
                .into_iter()
                .fold(0u64, u64::saturating_add),
        )
    }

    /// Progress in `[0, 1]` after `elapsed` time, non-decreasing in `elapsed`.
    ///
    /// ```rust
    /// # use finite_relations::timeline::*;
    /// # use std::time::Duration;
    /// let t = TimelineConfig::default();
    /// assert_eq!(t.progress(Duration::ZERO), 0.0);
    /// assert!((t.progress(Duration::from_millis(500)) - 0.165).abs() < 1e-9);
    /// assert_eq!(t.progress(Duration::from_millis(2500)), 0.33);
    /// assert_eq!(t.progress(Duration::from_secs(60)), 1.0);
    /// ```
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if elapsed >= self.total() {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() * 1000.0;
        let [m1, m2, m3, m4, _] = self.marks();
        if t <= m1 {
            segment(t, 0.0, m1, 0.0, self.fade_end)
        } else if t <= m2 {
            self.fade_end
        } else if t <= m3 {
            segment(t, m2, m3 - m2, self.fade_end, self.bridge_end)
        } else if t <= m4 {
            self.bridge_end
        } else {
            segment(t, m4, self.total_ms() - m4, self.bridge_end, 1.0)
        }
    }

    fn total_ms(&self) -> f64 {
        self.total().as_secs_f64() * 1000.0
    }

    pub fn phase(&self, elapsed: Duration) -> Phase {
        if elapsed >= self.total() {
            return Phase::Complete;
        }
        let t = elapsed.as_secs_f64() * 1000.0;
        let [m1, m2, m3, m4, _] = self.marks();
        if t <= m1 {
            Phase::Fade
        } else if t <= m2 {
            Phase::Pause1
        } else if t <= m3 {
            Phase::Bridge
        } else if t <= m4 {
            Phase::Pause2
        } else {
            Phase::Straighten
        }
    }

    pub fn stage(&self, progress: f64) -> Stage {
        if progress <= 0.0 {
            Stage::AllRelations
        } else if progress <= self.fade_end {
            Stage::RemoveSingleEdges
        } else if progress <= self.bridge_end {
            Stage::ConnectAndShrink
        } else {
            Stage::StraightenLines
        }
    }

    /// How far the fade has got, in `[0, 1]`.
    pub fn fade_fraction(&self, progress: f64) -> f64 {
        (progress / self.fade_end).clamp(0.0, 1.0)
    }

    /// How far the bridge phase has got: 0 up to `fade_end`, 1 after `bridge_end`.
    pub fn bridge_fraction(&self, progress: f64) -> f64 {
        ((progress - self.fade_end) / (self.bridge_end - self.fade_end)).clamp(0.0, 1.0)
    }

    /// How far the straighten phase has got: 0 up to `bridge_end`.
    pub fn straighten_fraction(&self, progress: f64) -> f64 {
        ((progress - self.bridge_end) / (1.0 - self.bridge_end)).clamp(0.0, 1.0)
    }
}

/// Progress under the default timeline.
pub fn progress(elapsed: Duration) -> f64 {
    TimelineConfig::default().progress(elapsed)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    Running { started: Instant },
    Complete,
}

/// A restartable run of the timeline.
///
/// The caller schedules ticks (one per display frame) for as long as [`Animation::tick`] returns
/// `true`. Each tick recomputes progress from the elapsed time, so dropped or repeated ticks
/// are harmless.
#[derive(Clone, Debug)]
pub struct Animation {
    config: TimelineConfig,
    state: AnimationState,
    progress: f64,
}

impl Animation {
    pub fn new(config: TimelineConfig) -> Self {
        Self {
            config,
            state: AnimationState::Idle,
            progress: 0.0,
        }
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running { .. })
    }

    /// Start a run at `now` from progress 0.
    ///
    /// Returns `false`, leaving the run untouched, if one is already in flight.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = AnimationState::Running { started: now };
        self.progress = 0.0;
        tracing::debug!("animation started");
        true
    }

    /// Recompute progress at `now`. Returns whether another tick should be scheduled.
    pub fn tick(&mut self, now: Instant) -> bool {
        let AnimationState::Running { started } = self.state else {
            return false;
        };
        let elapsed = now.saturating_duration_since(started);
        self.progress = self.config.progress(elapsed);
        tracing::trace!(elapsed_ms = elapsed.as_millis() as u64, progress = self.progress, "tick");
        if elapsed >= self.config.total() {
            self.progress = 1.0;
            self.state = AnimationState::Complete;
            tracing::debug!("animation complete");
            return false;
        }
        true
    }

    /// Stop any run and return to progress 0.
    pub fn reset(&mut self) {
        self.state = AnimationState::Idle;
        self.progress = 0.0;
    }

    /// Time since the current run started, if one is in flight.
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        match self.state {
            AnimationState::Running { started } => Some(now.saturating_duration_since(started)),
            _ => None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.config.stage(self.progress)
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(TimelineConfig::default())
    }
}
