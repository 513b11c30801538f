//! Page components for the auth surface and the authenticated landing.

pub mod change_password;
pub mod dashboard;
pub mod login;
pub mod register;
