//! Cube Algorithm Notation and Turn Engine
//!
//! Parses commutator notation into face turns and executes them one at a
//! time against a discrete model of a 3x3x3 cube. Animation and rendering
//! are left to the caller through the traits in [`scheduler`].

pub mod algorithm;
pub mod catalog;
pub mod error;
pub mod executor;
pub mod geometry;
pub mod grid;
pub mod inverse;
pub mod layer;
pub mod moves;
pub mod pieces;
pub mod scheduler;
pub mod session;

pub use algorithm::{Algorithm, AlgorithmPart, PartKind};
pub use error::{LayoutError, NotationError};
pub use executor::{ExecutorConfig, ExecutorEvent, MoveExecutor, Phase, Step};
pub use moves::{Face, Move};
pub use pieces::CubePiece;
pub use scheduler::{AnimationScheduler, ManualScheduler, RenderSync, RotationRequest, Ticket};
pub use session::AlgorithmPlayer;
