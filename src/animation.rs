//! Search playback.
//!
//! This module turns a finished [`SearchResult`] into a queue of animation steps and releases
//! them either on a timer or one at a time on request, so the explored cells and then the path
//! appear progressively on the editor grid.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use crate::solver::{Coordinate, SearchResult, Strategy};

/// Single step of a search playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AnimationStep {
    /// Show a cell as explored by the search.
    Visit(Coordinate),
    /// Show a cell as part of the found path.
    Trace(Coordinate),
}

/// How queued steps are released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Playback {
    /// Steps are released on their own after a fixed delay.
    Timed,
    /// Steps are released one per user request.
    Stepped,
}

/// Playback state for the latest search.
///
/// This structure manages the queue of pending steps, the timing between them and the outcome
/// that is reported once the queue has drained.
#[derive(Debug)]
pub(crate) struct AnimationManager {
    /// Steps not yet shown, visited cells first and path cells after.
    steps: VecDeque<AnimationStep>,
    /// Release mode of the loaded search, [`None`] when nothing is loaded.
    playback: Option<Playback>,
    /// Strategy that produced the loaded search.
    strategy: Option<Strategy>,
    /// Whether the loaded search found a path, reported once the queue empties.
    outcome: Option<bool>,
    /// Time of the last released step.
    last_update_time: Instant,
    /// Pause before each visited cell during timed playback.
    visit_delay: Duration,
    /// Pause before each path cell during timed playback.
    path_delay: Duration,
}

impl AnimationManager {
    /// Creates an empty manager with the given timed playback delays.
    pub(crate) fn new(visit_delay: Duration, path_delay: Duration) -> Self {
        Self {
            steps: VecDeque::new(),
            playback: None,
            strategy: None,
            outcome: None,
            last_update_time: Instant::now(),
            visit_delay,
            path_delay,
        }
    }

    /// Queues the steps of `result` for playback, replacing anything loaded before.
    ///
    /// Path cells are only queued when the search found a path.
    pub(crate) fn load(&mut self, result: SearchResult, strategy: Strategy, playback: Playback) {
        let found = result.has_path();

        self.steps = result
            .visited
            .into_iter()
            .map(AnimationStep::Visit)
            .chain(result.path.into_iter().map(AnimationStep::Trace))
            .collect();
        self.playback = Some(playback);
        self.strategy = Some(strategy);
        self.outcome = Some(found);
        self.last_update_time = Instant::now();
    }

    /// Drops the loaded search.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
        self.playback = None;
        self.strategy = None;
        self.outcome = None;
    }

    /// Returns the release mode of the loaded search.
    pub(crate) const fn playback(&self) -> Option<Playback> {
        self.playback
    }

    /// Returns the strategy of the loaded search.
    pub(crate) const fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    /// Returns how many steps are still queued.
    pub(crate) fn remaining(&self) -> usize {
        self.steps.len()
    }

    /// Releases the next step if its delay has elapsed during timed playback.
    ///
    /// Stepped playback never releases anything here.
    pub(crate) fn update(&mut self) -> Option<AnimationStep> {
        if self.playback != Some(Playback::Timed) {
            return None;
        }

        let delay = match self.steps.front()? {
            AnimationStep::Visit(_) => self.visit_delay,
            AnimationStep::Trace(_) => self.path_delay,
        };

        if self.last_update_time.elapsed() >= delay {
            self.last_update_time = Instant::now();
            self.steps.pop_front()
        } else {
            None
        }
    }

    /// Releases the next step immediately.
    pub(crate) fn advance(&mut self) -> Option<AnimationStep> {
        self.last_update_time = Instant::now();
        self.steps.pop_front()
    }

    /// Returns whether the loaded search found a path, once all its steps have been released.
    ///
    /// The outcome is reported a single time per loaded search.
    pub(crate) fn take_outcome(&mut self) -> Option<bool> {
        if self.steps.is_empty() {
            self.outcome.take()
        } else {
            None
        }
    }
}
