//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `toast`) and kept free of browser
//! APIs so the reducers and guard decisions are unit-testable on the host.
//! All mutation goes through named actions on the state types; components
//! never poke fields directly.

pub mod guard;
pub mod session;
pub mod toast;
