//! Pure company state transitions.
//!
//! Every function takes the current [`Company`](crate::company::Company) by
//! reference and returns a new one inside an [`ActionOutcome`]. Nothing here
//! holds state, schedules work, or logs; the caller owns the record and
//! decides when to replace it.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
