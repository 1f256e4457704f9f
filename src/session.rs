//! Playback of the currently selected algorithm.

use log::info;

use crate::algorithm::{Algorithm, PartKind};
use crate::executor::{MoveExecutor, Phase, Step};
use crate::scheduler::AnimationScheduler;

/// Owns the selected algorithm and drives an executor through it.
pub struct AlgorithmPlayer<H, S> {
    executor: MoveExecutor<H, S>,
    algorithm: Option<Algorithm>,
}

impl<H, S: AnimationScheduler> AlgorithmPlayer<H, S> {
    pub fn new(executor: MoveExecutor<H, S>) -> Self {
        Self {
            executor,
            algorithm: None,
        }
    }

    /// Makes `algorithm` current and rewinds the cube to the start of it.
    pub fn select(&mut self, algorithm: Algorithm) {
        info!("selected algorithm {:?}", algorithm.name());
        self.executor.reset(algorithm.get_moves());
        self.algorithm = Some(algorithm);
    }

    /// Starts or resumes playback. Once a run has fully drained, playing
    /// again rewinds and replays from the beginning.
    pub fn play(&mut self) -> Step {
        let finished = self.executor.phase() == Phase::Idle
            && self.executor.current().is_none()
            && self.executor.pending().is_empty();
        if finished {
            self.reset();
        }
        self.executor.start()
    }

    pub fn pause(&mut self) {
        self.executor.stop();
    }

    /// Restores the solved layout and reloads the selection's moves.
    pub fn reset(&mut self) {
        let moves = self
            .algorithm
            .as_ref()
            .map(Algorithm::get_moves)
            .unwrap_or_default();
        self.executor.reset(moves);
    }

    /// The part label of the move currently turning.
    pub fn current_part(&self) -> Option<PartKind> {
        self.executor.current().and_then(|mv| mv.part)
    }

    pub fn algorithm(&self) -> Option<&Algorithm> {
        self.algorithm.as_ref()
    }

    pub fn executor(&self) -> &MoveExecutor<H, S> {
        &self.executor
    }

    pub fn executor_mut(&mut self) -> &mut MoveExecutor<H, S> {
        &mut self.executor
    }
}
