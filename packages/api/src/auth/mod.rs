//! Authentication backends for the login and signup workflows.

mod simulated;

pub use simulated::{Outcome, SimulatedAuth};
