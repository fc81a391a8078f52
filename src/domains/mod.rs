//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: greeting and prototype lookups
//! - **resources**: server information and usage guide
//! - **prompts**: the prototype assistant prompt

pub mod prompts;
pub mod resources;
pub mod tools;
