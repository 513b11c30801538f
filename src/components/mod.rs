//! Reusable UI components: route guards, the authenticated shell, and the
//! toast stack.

pub mod guards;
pub mod shell;
pub mod toast;
