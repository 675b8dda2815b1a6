//! Core domain types and contracts for the thyme recipe server.
//!
//! Everything in this crate is storage-agnostic: the concrete backends live
//! in the `thyme` binary crate and plug in through
//! [`storage::RecipeRepository`].

pub mod recipe;
pub mod serde;
pub mod storage;
