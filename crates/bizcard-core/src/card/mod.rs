//! Card field extraction module.

pub mod classify;
mod normalize;
mod parser;
pub mod rules;
pub mod sanitize;

pub use normalize::{Line, NormalizedText, normalize};
pub use parser::{CardParser, ExtractionResult, HeuristicCardParser};
