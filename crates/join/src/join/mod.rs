// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Join evaluator.
//!
//! The free functions run with the default [`JoinConfig`]; use [`Join`] to
//! pick a strategy. The `try_*` flavours take fallible selectors and hand
//! the first selector error back unchanged, after which they yield nothing.

use std::{convert::Infallible, hash::Hash};

pub use group::GroupJoin;
pub use inner::InnerJoin;

use crate::{JoinBuilder, JoinConfig, JoinType};

mod group;
mod inner;
mod outer;
mod probe;

/// A configured join evaluator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Join {
	config: JoinConfig,
}

impl Join {
	pub fn new(config: JoinConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn builder() -> JoinBuilder {
		JoinBuilder::new()
	}

	pub fn config(&self) -> &JoinConfig {
		&self.config
	}

	/// Join with the mode picked at runtime, yielding `(left, right)` rows.
	/// Inner rows always carry `Some` right record.
	pub fn rows<LI, RI, K, LK, RK>(
		self,
		join_type: JoinType,
		left: LI,
		right: RI,
		left_key: LK,
		right_key: RK,
	) -> Rows<impl Iterator<Item = (LI::Item, Option<RI::Item>)>, impl Iterator<Item = (LI::Item, Option<RI::Item>)>>
	where
		LI: IntoIterator,
		LI::Item: Clone,
		RI: IntoIterator,
		RI::Item: Clone,
		K: Eq + Hash,
		LK: FnMut(&LI::Item) -> K,
		RK: FnMut(&RI::Item) -> K,
	{
		match join_type {
			JoinType::Inner => Rows::Inner(self.inner_join(left, right, left_key, right_key, |l, r| (l, Some(r)))),
			JoinType::Left => Rows::Left(self.left_outer_join(left, right, left_key, right_key, |l, r| (l, r))),
		}
	}
}

/// Rows of a join whose type was chosen at runtime
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub enum Rows<I, L> {
	Inner(I),
	Left(L),
}

impl<T, I, L> Iterator for Rows<I, L>
where
	I: Iterator<Item = T>,
	L: Iterator<Item = T>,
{
	type Item = T;

	fn next(&mut self) -> Option<T> {
		match self {
			Rows::Inner(rows) => rows.next(),
			Rows::Left(rows) => rows.next(),
		}
	}
}

/// Inner join with the default configuration, see [`Join::inner_join`]
pub fn inner_join<LI, RI, K, LK, RK, F, O>(
	left: LI,
	right: RI,
	left_key: LK,
	right_key: RK,
	result: F,
) -> impl Iterator<Item = O>
where
	LI: IntoIterator,
	LI::Item: Clone,
	RI: IntoIterator,
	RI::Item: Clone,
	K: Eq + Hash,
	LK: FnMut(&LI::Item) -> K,
	RK: FnMut(&RI::Item) -> K,
	F: FnMut(LI::Item, RI::Item) -> O,
{
	Join::default().inner_join(left, right, left_key, right_key, result)
}

/// Fallible inner join with the default configuration
pub fn try_inner_join<LI, RI, K, LK, RK, F, O, E>(
	left: LI,
	right: RI,
	left_key: LK,
	right_key: RK,
	result: F,
) -> InnerJoin<LI::IntoIter, RI::IntoIter, K, LK, RK, F>
where
	LI: IntoIterator,
	LI::Item: Clone,
	RI: IntoIterator,
	RI::Item: Clone,
	K: Eq + Hash,
	LK: FnMut(&LI::Item) -> Result<K, E>,
	RK: FnMut(&RI::Item) -> Result<K, E>,
	F: FnMut(LI::Item, RI::Item) -> Result<O, E>,
{
	Join::default().try_inner_join(left, right, left_key, right_key, result)
}

/// Group join with the default configuration, see [`Join::group_join`]
pub fn group_join<LI, RI, K, LK, RK, F, O>(
	left: LI,
	right: RI,
	left_key: LK,
	right_key: RK,
	result: F,
) -> impl Iterator<Item = O>
where
	LI: IntoIterator,
	RI: IntoIterator,
	RI::Item: Clone,
	K: Eq + Hash,
	LK: FnMut(&LI::Item) -> K,
	RK: FnMut(&RI::Item) -> K,
	F: FnMut(LI::Item, Vec<RI::Item>) -> O,
{
	Join::default().group_join(left, right, left_key, right_key, result)
}

/// Fallible group join with the default configuration
pub fn try_group_join<LI, RI, K, LK, RK, F, O, E>(
	left: LI,
	right: RI,
	left_key: LK,
	right_key: RK,
	result: F,
) -> GroupJoin<LI::IntoIter, RI::IntoIter, K, LK, RK, F>
where
	LI: IntoIterator,
	RI: IntoIterator,
	RI::Item: Clone,
	K: Eq + Hash,
	LK: FnMut(&LI::Item) -> Result<K, E>,
	RK: FnMut(&RI::Item) -> Result<K, E>,
	F: FnMut(LI::Item, Vec<RI::Item>) -> Result<O, E>,
{
	Join::default().try_group_join(left, right, left_key, right_key, result)
}

/// Left outer join with the default configuration, see
/// [`Join::left_outer_join`]
pub fn left_outer_join<LI, RI, K, LK, RK, F, O>(
	left: LI,
	right: RI,
	left_key: LK,
	right_key: RK,
	result: F,
) -> impl Iterator<Item = O>
where
	LI: IntoIterator,
	LI::Item: Clone,
	RI: IntoIterator,
	RI::Item: Clone,
	K: Eq + Hash,
	LK: FnMut(&LI::Item) -> K,
	RK: FnMut(&RI::Item) -> K,
	F: FnMut(LI::Item, Option<RI::Item>) -> O,
{
	Join::default().left_outer_join(left, right, left_key, right_key, result)
}

/// Fallible left outer join with the default configuration
pub fn try_left_outer_join<LI, RI, K, LK, RK, F, O, E>(
	left: LI,
	right: RI,
	left_key: LK,
	right_key: RK,
	result: F,
) -> impl Iterator<Item = Result<O, E>>
where
	LI: IntoIterator,
	LI::Item: Clone,
	RI: IntoIterator,
	RI::Item: Clone,
	K: Eq + Hash,
	LK: FnMut(&LI::Item) -> Result<K, E>,
	RK: FnMut(&RI::Item) -> Result<K, E>,
	F: FnMut(LI::Item, Option<RI::Item>) -> Result<O, E>,
{
	Join::default().try_left_outer_join(left, right, left_key, right_key, result)
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
	match result {
		Ok(value) => value,
		Err(never) => match never {},
	}
}

/// Stop after the first error
fn until_error<I, T, E>(rows: I) -> impl Iterator<Item = Result<T, E>>
where
	I: Iterator<Item = Result<T, E>>,
{
	rows.scan(false, |failed, row| {
		if *failed {
			return None;
		}
		*failed = row.is_err();
		Some(row)
	})
}
