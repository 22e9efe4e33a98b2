#![warn(clippy::all)]
#![allow(clippy::too_many_arguments)]

pub mod analysis;
pub mod bootstrap;
pub mod properties;
pub mod simulation;

pub use cpprops_core::si;
pub use cpprops_core::{CpError, CpResult, Observable, Trajectory, Verbosity};
