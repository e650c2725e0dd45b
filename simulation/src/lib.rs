//! Discrete-tick simulation of a single elevator car serving rider
//! requests in a fixed-height building. The driver decides when a tick
//! fires; this crate owns everything that happens inside one.

pub mod building;
pub mod call;
pub mod direction;
pub mod elevator;
pub mod errors;
pub mod floor;
pub mod queue;
pub mod rider;
