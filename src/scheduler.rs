//! Seams to the rendering side: animation scheduling and transform sync.

use std::collections::VecDeque;
use std::time::Duration;

use crate::geometry::Axis;
use crate::pieces::{Coord, CubePiece};

/// Identifies one requested rotation.
///
/// The executor only accepts the completion of the ticket it issued last;
/// a reset invalidates every outstanding ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub u64);

/// A rotation the renderer should animate.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationRequest {
    pub ticket: Ticket,
    /// Indices into the executor's piece list.
    pub pieces: Vec<usize>,
    pub axis: Axis,
    /// Signed angle about the positive axis.
    pub angle_radians: f32,
    pub duration: Duration,
}

/// Animates rotations on behalf of the executor.
///
/// Implementations must eventually hand the request's ticket back to
/// [`MoveExecutor::on_animation_complete`](crate::executor::MoveExecutor::on_animation_complete),
/// exactly once.
pub trait AnimationScheduler {
    fn rotate(&mut self, request: RotationRequest);
}

/// Receives committed discrete positions so continuous transforms can be
/// brought back in line.
pub trait RenderSync<H> {
    fn apply_discrete_position(&mut self, piece: &CubePiece<H>, position: Coord);
}

/// A scheduler with no clock: requests queue up until the caller completes
/// them. Used headless and in tests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    requests: VecDeque<RotationRequest>,
    issued: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the oldest outstanding request.
    pub fn next_request(&mut self) -> Option<RotationRequest> {
        self.requests.pop_front()
    }

    pub fn outstanding(&self) -> usize {
        self.requests.len()
    }

    /// Total requests received since construction.
    pub fn issued(&self) -> usize {
        self.issued
    }
}

impl AnimationScheduler for ManualScheduler {
    fn rotate(&mut self, request: RotationRequest) {
        self.issued += 1;
        self.requests.push_back(request);
    }
}
