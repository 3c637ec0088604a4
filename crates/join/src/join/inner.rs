// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{convert::Infallible, hash::Hash, vec};

use super::{Join, infallible, probe::Probe};

/// Fallible inner join, see [`crate::try_inner_join`].
///
/// Yields one result per matching `(left, right)` pair. After the first
/// error the iterator is exhausted.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct InnerJoin<LI, RI, K, LK, RK, F>
where
	LI: Iterator,
	RI: Iterator,
{
	probe: Probe<LI, RI, K, LK, RK>,
	result: F,
	current: Option<(LI::Item, vec::IntoIter<RI::Item>)>,
	done: bool,
}

impl<LI, RI, K, LK, RK, F> InnerJoin<LI, RI, K, LK, RK, F>
where
	LI: Iterator,
	RI: Iterator,
{
	pub(crate) fn new(probe: Probe<LI, RI, K, LK, RK>, result: F) -> Self {
		Self {
			probe,
			result,
			current: None,
			done: false,
		}
	}
}

impl<LI, RI, K, LK, RK, F, O, E> InnerJoin<LI, RI, K, LK, RK, F>
where
	LI: Iterator,
	LI::Item: Clone,
	RI: Iterator,
	RI::Item: Clone,
	K: Eq + Hash,
	LK: FnMut(&LI::Item) -> Result<K, E>,
	RK: FnMut(&RI::Item) -> Result<K, E>,
	F: FnMut(LI::Item, RI::Item) -> Result<O, E>,
{
	fn step(&mut self) -> Result<Option<O>, E> {
		loop {
			if let Some((left, matches)) = &mut self.current {
				if let Some(right) = matches.next() {
					return (self.result)(left.clone(), right).map(Some);
				}
			}

			// left records without matches fall through to the next one
			match self.probe.next_left()? {
				Some((left, matches)) => self.current = Some((left, matches.into_iter())),
				None => return Ok(None),
			}
		}
	}
}

impl<LI, RI, K, LK, RK, F, O, E> Iterator for InnerJoin<LI, RI, K, LK, RK, F>
where
	LI: Iterator,
	LI::Item: Clone,
	RI: Iterator,
	RI::Item: Clone,
	K: Eq + Hash,
	LK: FnMut(&LI::Item) -> Result<K, E>,
	RK: FnMut(&RI::Item) -> Result<K, E>,
	F: FnMut(LI::Item, RI::Item) -> Result<O, E>,
{
	type Item = Result<O, E>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		match self.step() {
			Ok(Some(output)) => Some(Ok(output)),
			Ok(None) => {
				self.done = true;
				None
			}
			Err(err) => {
				self.done = true;
				Some(Err(err))
			}
		}
	}
}

impl Join {
	/// Fallible inner join, see [`Join::inner_join`]
	pub fn try_inner_join<LI, RI, K, LK, RK, F, O, E>(
		self,
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
		InnerJoin::new(Probe::new(self.config, left.into_iter(), right.into_iter(), left_key, right_key), result)
	}

	/// Every `(left, right)` pair whose keys are equal, in left order with
	/// the matches of each left record in right order. Left records without
	/// a match produce nothing.
	pub fn inner_join<LI, RI, K, LK, RK, F, O>(
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
		F: FnMut(LI::Item, RI::Item) -> O,
	{
		self.try_inner_join(
			left,
			right,
			move |l: &LI::Item| Ok::<_, Infallible>(left_key(l)),
			move |r: &RI::Item| Ok(right_key(r)),
			move |l, r| Ok(result(l, r)),
		)
		.map(infallible)
	}
}
