/// Main configuration module.
///
/// Re-exports submodules for game and signup configuration.
pub mod game;
pub mod signup;
