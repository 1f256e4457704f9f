//! Turn-by-turn execution of a move queue.
//!
//! The executor is a two-state machine. In `Idle` it may pop the next move,
//! select the affected pieces and ask the scheduler to animate them, which
//! puts it in `Moving`. When the scheduler reports completion the new lattice
//! positions are committed and the next move starts automatically, so at
//! most one turn is ever in flight.

use std::collections::VecDeque;
use std::time::Duration;

use log::{debug, info, trace};

use crate::error::LayoutError;
use crate::geometry::rotate;
use crate::layer::select_layer;
use crate::moves::Move;
use crate::pieces::{validate_layout, Coord, CubePiece};
use crate::scheduler::{AnimationScheduler, ManualScheduler, RenderSync, RotationRequest, Ticket};

/// Tunables for move execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Nominal animation time for one turn.
    pub move_duration: Duration,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            move_duration: Duration::from_millis(600),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Moving,
}

/// What a call to [`MoveExecutor::start`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A rotation was requested for this move.
    Started(Move),
    /// Nothing left to do.
    Drained,
    /// A move is already in flight.
    Busy,
    /// Execution is stopped.
    Paused,
}

/// Notifications delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutorEvent {
    MoveStarted(Move),
    QueueDrained,
}

type Listener = Box<dyn FnMut(&ExecutorEvent)>;

pub struct MoveExecutor<H, S> {
    pieces: Vec<CubePiece<H>>,
    initial_positions: Vec<Coord>,
    pending: VecDeque<Move>,
    current: Option<Move>,
    active_group: Vec<usize>,
    phase: Phase,
    paused: bool,
    in_flight: Option<Ticket>,
    next_ticket: u64,
    scheduler: S,
    render_sync: Option<Box<dyn RenderSync<H>>>,
    listeners: Vec<Listener>,
    config: ExecutorConfig,
}

impl<H, S: AnimationScheduler> MoveExecutor<H, S> {
    /// Takes ownership of the piece set. The positions given here are the
    /// ones [`reset`](Self::reset) restores.
    pub fn new(
        pieces: Vec<CubePiece<H>>,
        scheduler: S,
        config: ExecutorConfig,
    ) -> Result<Self, LayoutError> {
        validate_layout(&pieces)?;
        let initial_positions = pieces.iter().map(|piece| piece.position).collect();

        Ok(Self {
            pieces,
            initial_positions,
            pending: VecDeque::new(),
            current: None,
            active_group: Vec::new(),
            phase: Phase::Idle,
            paused: false,
            in_flight: None,
            next_ticket: 0,
            scheduler,
            render_sync: None,
            listeners: Vec::new(),
            config,
        })
    }

    pub fn with_render_sync(mut self, sync: impl RenderSync<H> + 'static) -> Self {
        self.render_sync = Some(Box::new(sync));
        self
    }

    /// Registers a listener for every future event.
    pub fn subscribe(&mut self, listener: impl FnMut(&ExecutorEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Appends moves to the queue without starting them.
    pub fn enqueue(&mut self, moves: impl IntoIterator<Item = Move>) {
        self.pending.extend(moves);
    }

    /// Clears a previous [`stop`](Self::stop) and starts the next move if
    /// idle.
    pub fn start(&mut self) -> Step {
        self.paused = false;
        self.advance()
    }

    /// Same as [`start`](Self::start).
    pub fn resume(&mut self) -> Step {
        self.start()
    }

    /// Halts auto-chaining. A move already in flight still completes and
    /// commits.
    pub fn stop(&mut self) {
        self.paused = true;
    }

    /// Commits the rotation identified by `ticket` and chains into the next
    /// move.
    ///
    /// Returns `false` and changes nothing when the ticket is not the one in
    /// flight, e.g. a completion arriving after a reset.
    pub fn on_animation_complete(&mut self, ticket: Ticket) -> bool {
        if self.in_flight != Some(ticket) {
            trace!("ignoring stale completion {ticket:?}");
            return false;
        }
        self.in_flight = None;

        if let Some(mv) = self.current.take() {
            let axis = mv.face.axis();
            let turns = mv.quarter_turns();
            for &index in &self.active_group {
                let piece = &mut self.pieces[index];
                let position = rotate(piece.position, axis, turns);
                piece.position = position;
                if let Some(sync) = self.render_sync.as_mut() {
                    sync.apply_discrete_position(piece, position);
                }
            }
            debug!("committed {mv} ({} pieces)", self.active_group.len());
        }

        self.active_group.clear();
        self.phase = Phase::Idle;
        self.advance();
        true
    }

    /// Abandons all work, restores the initial layout and queues `moves`.
    ///
    /// Any completion for a rotation requested before the reset is ignored.
    pub fn reset(&mut self, moves: impl IntoIterator<Item = Move>) {
        self.in_flight = None;
        self.current = None;
        self.active_group.clear();
        self.phase = Phase::Idle;
        self.paused = false;
        self.pending = moves.into_iter().collect();

        for (piece, &initial) in self.pieces.iter_mut().zip(&self.initial_positions) {
            piece.position = initial;
            if let Some(sync) = self.render_sync.as_mut() {
                sync.apply_discrete_position(piece, initial);
            }
        }

        info!("reset with {} pending move(s)", self.pending.len());
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> Option<&Move> {
        self.current.as_ref()
    }

    pub fn pending(&self) -> &VecDeque<Move> {
        &self.pending
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pieces(&self) -> &[CubePiece<H>] {
        &self.pieces
    }

    /// Whether every piece is back at its initial position.
    pub fn is_solved(&self) -> bool {
        self.pieces
            .iter()
            .zip(&self.initial_positions)
            .all(|(piece, &initial)| piece.position == initial)
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn advance(&mut self) -> Step {
        if self.phase == Phase::Moving {
            trace!("start rejected: a move is in flight");
            return Step::Busy;
        }
        if self.paused {
            return Step::Paused;
        }

        let Some(mv) = self.pending.pop_front() else {
            info!("move queue drained");
            self.emit(&ExecutorEvent::QueueDrained);
            return Step::Drained;
        };

        self.active_group = select_layer(&self.pieces, &mv);
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        self.current = Some(mv.clone());
        self.phase = Phase::Moving;

        debug!(
            "starting {mv} on {} pieces, {} left",
            self.active_group.len(),
            self.pending.len()
        );
        self.scheduler.rotate(RotationRequest {
            ticket,
            pieces: self.active_group.clone(),
            axis: mv.face.axis(),
            angle_radians: mv.angle_radians(),
            duration: self.config.move_duration,
        });
        self.emit(&ExecutorEvent::MoveStarted(mv.clone()));

        Step::Started(mv)
    }

    fn emit(&mut self, event: &ExecutorEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

impl<H> MoveExecutor<H, ManualScheduler> {
    /// Completes outstanding rotations in request order until none remain.
    ///
    /// Returns the number of moves committed.
    pub fn run_to_completion(&mut self) -> usize {
        let mut committed = 0;
        while let Some(request) = self.scheduler.next_request() {
            if self.on_animation_complete(request.ticket) {
                committed += 1;
            }
        }
        committed
    }
}
