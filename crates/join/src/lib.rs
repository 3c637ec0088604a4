// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Relational joins over in-memory sequences.
//!
//! Every join reads its right side once into a [`RightIndex`] and then
//! streams the left side, so results come out in left order with matches
//! in right order. Nothing is evaluated until the first call to `next()`.
//!
//! ```
//! use relate_join::left_outer_join;
//!
//! let people = [(1, "Joe"), (4, "Sally")];
//! let pets = [(1, "Barley")];
//!
//! let owners: Vec<_> = left_outer_join(
//! 	people.iter(),
//! 	pets.iter(),
//! 	|person| person.0,
//! 	|pet| pet.0,
//! 	|person, pet| (person.1, pet.map(|p| p.1)),
//! )
//! .collect();
//!
//! assert_eq!(owners, vec![("Joe", Some("Barley")), ("Sally", None)]);
//! ```

pub use config::{JoinBuilder, JoinConfig, JoinStrategy, JoinType};
pub use error::Error;
pub use index::RightIndex;
pub use join::{
	GroupJoin, InnerJoin, Join, Rows, group_join, inner_join, left_outer_join, try_group_join, try_inner_join,
	try_left_outer_join,
};
pub use lookup::Lookup;
pub use sequence::{DefaultIfEmpty, SelectMany, SequenceExt};

pub mod config;
mod error;
pub mod index;
pub mod join;
pub mod lookup;
pub mod sequence;

pub type Result<T> = std::result::Result<T, Error>;
