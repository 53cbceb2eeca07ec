//! Story engine for Gem's isekai simulator.
//!
//! A linear interactive fiction: the player picks a world, an origin, a power
//! and a legacy from a fixed catalog, then resolves three scripted events.
//! Each event choice carries an outcome tag that adjusts the character's
//! glory, scars or mana, and the final balance of glory against scars picks
//! the epilogue.

/// Character attributes and the attribute map.
pub mod attribute;
/// Static catalog of selectable options.
pub mod catalog;
/// Player character state.
pub mod character;
/// Session configuration.
pub mod config;
/// Small polyhedral dice.
pub mod dice;
/// Epilogue synthesis.
pub mod epilogue;
/// Error types for the story engine.
pub mod error;
/// Scripted story events.
pub mod event;
/// Line-based prompting and input validation.
pub mod prompt;
/// Outcome-tag dispatch for event choices.
pub mod resolve;
/// The fixed story pipeline.
pub mod session;
/// Fixed-width text layout.
pub mod text;

pub use attribute::{Attribute, Attributes};
pub use catalog::{Category, ChoiceOption};
pub use character::{Character, Selections};
pub use config::StoryConfig;
pub use epilogue::{Tier, epilogue};
pub use error::{StoryError, StoryResult};
pub use event::{Event, EventOption, OutcomeTag};
pub use prompt::{Prompter, Rejection, parse_index};
pub use resolve::{Flavor, Resolution, resolve};
pub use session::StorySession;
