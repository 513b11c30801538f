//! Small utilities: token persistence and password validation.

pub mod password;
pub mod token;
