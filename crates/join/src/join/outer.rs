// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{convert::Infallible, hash::Hash, iter};

use super::{Join, infallible, until_error};
use crate::SequenceExt;

/// Passes the `Ok` groups of a fallible group join through and keeps the
/// first error back, ending the sequence at it.
struct Groups<I, E> {
	iter: I,
	error: Option<E>,
	done: bool,
}

impl<I, E> Groups<I, E> {
	fn new(iter: I) -> Self {
		Self {
			iter,
			error: None,
			done: false,
		}
	}

	fn take_error(&mut self) -> Option<E> {
		self.error.take()
	}
}

impl<I, T, E> Iterator for Groups<I, E>
where
	I: Iterator<Item = Result<T, E>>,
{
	type Item = T;

	fn next(&mut self) -> Option<T> {
		if self.done {
			return None;
		}

		match self.iter.next() {
			Some(Ok(group)) => Some(group),
			Some(Err(err)) => {
				self.error = Some(err);
				self.done = true;
				None
			}
			None => {
				self.done = true;
				None
			}
		}
	}
}

impl Join {
	/// Fallible left outer join: a group join expanded with
	/// [`SequenceExt::select_many`], substituting `None` for every empty group.
	pub fn try_left_outer_join<LI, RI, K, LK, RK, F, O, E>(
		self,
		left: LI,
		right: RI,
		left_key: LK,
		right_key: RK,
		mut result: F,
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
		let groups = self.try_group_join(left, right, left_key, right_key, |left, matches| Ok((left, matches)));

		let mut rows = Groups::new(groups).select_many(
			|(_, matches): &(LI::Item, Vec<RI::Item>)| matches.clone().into_iter().map(Some).default_if_empty(None),
			move |(left, _), right| result(left, right),
		);

		// a failed group join surfaces its error once the expanded rows run out
		let rows = iter::from_fn(move || match rows.next() {
			Some(row) => Some(row),
			None => rows.get_mut().take_error().map(Err),
		});

		until_error(rows)
	}

	/// Every left record paired with each right record sharing its key, or
	/// once with `None` when nothing on the right matches
	pub fn left_outer_join<LI, RI, K, LK, RK, F, O>(
		self,
		left: LI,
		right: RI,
		mut left_key: LK,
		mut right_key: RK,
		mut result: F,
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
		self.try_left_outer_join(
			left,
			right,
			move |l: &LI::Item| Ok::<_, Infallible>(left_key(l)),
			move |r: &RI::Item| Ok(right_key(r)),
			move |l, r| Ok(result(l, r)),
		)
		.map(infallible)
	}
}
