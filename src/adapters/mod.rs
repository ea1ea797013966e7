//! Adapters: concrete implementations of the domain ports.

pub mod anthropic;
pub mod console;

pub use anthropic::AnthropicProvider;
pub use console::{AutoAcceptReviewer, ConsolePlanReviewer};
