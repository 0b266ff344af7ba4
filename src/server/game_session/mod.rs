pub mod session;
pub mod messages;
pub mod input;
