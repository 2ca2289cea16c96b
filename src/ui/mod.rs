//! Terminal user interface.

mod events;
mod input;
mod loop_runner;
mod render;

pub use loop_runner::run;
pub(crate) use loop_runner::Action;
