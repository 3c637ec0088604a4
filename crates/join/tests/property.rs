// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use proptest::prelude::*;
use relate_join::{Join, JoinStrategy, group_join, inner_join, left_outer_join};

// (key, payload) records; a small key range forces duplicate keys
fn arb_records() -> impl Strategy<Value = Vec<(u8, u16)>> {
	prop::collection::vec((0u8..6, any::<u16>()), 0..24)
}

fn matches_for(key: u8, right: &[(u8, u16)]) -> usize {
	right.iter().filter(|r| r.0 == key).count()
}

proptest! {
	#[test]
	fn inner_join_pairs_satisfy_key_equality(left in arb_records(), right in arb_records()) {
		let pairs: Vec<_> = inner_join(&left, &right, |l| l.0, |r| r.0, |l, r| (*l, *r)).collect();

		prop_assert!(pairs.len() <= left.len() * right.len());
		for (l, r) in &pairs {
			prop_assert_eq!(l.0, r.0);
		}

		let expected: usize = left.iter().map(|l| matches_for(l.0, &right)).sum();
		prop_assert_eq!(pairs.len(), expected);
	}

	#[test]
	fn left_outer_join_keeps_every_left_record(left in arb_records(), right in arb_records()) {
		let rows: Vec<_> = left_outer_join(&left, &right, |l| l.0, |r| r.0, |l, r| (*l, r.copied())).collect();

		prop_assert!(rows.len() >= left.len());

		let at_most_one = left.iter().all(|l| matches_for(l.0, &right) <= 1);
		prop_assert_eq!(rows.len() == left.len(), at_most_one);

		for (l, r) in &rows {
			match r {
				Some(r) => prop_assert_eq!(l.0, r.0),
				None => prop_assert_eq!(matches_for(l.0, &right), 0),
			}
		}
	}

	#[test]
	fn left_outer_join_with_empty_right_is_all_absent(left in arb_records()) {
		let rows: Vec<_> = left_outer_join(&left, Vec::<(u8, u16)>::new(), |l| l.0, |r| r.0, |l, r| (*l, r)).collect();

		prop_assert_eq!(rows.len(), left.len());
		prop_assert!(rows.iter().all(|(_, r)| r.is_none()));
	}

	#[test]
	fn group_join_sizes_add_up_to_inner_join(left in arb_records(), right in arb_records()) {
		let sizes: Vec<usize> = group_join(&left, &right, |l| l.0, |r| r.0, |_, rs| rs.len()).collect();
		let inner = inner_join(&left, &right, |l| l.0, |r| r.0, |_, _| ()).count();

		prop_assert_eq!(sizes.len(), left.len());
		prop_assert_eq!(sizes.iter().sum::<usize>(), inner);
	}

	#[test]
	fn strategies_agree(left in arb_records(), right in arb_records()) {
		let hash = Join::builder().strategy(JoinStrategy::Hash).build();
		let nested = Join::builder().strategy(JoinStrategy::NestedLoop).build();

		let a: Vec<_> = hash.left_outer_join(&left, &right, |l| l.0, |r| r.0, |l, r| (*l, r.copied())).collect();
		let b: Vec<_> = nested.left_outer_join(&left, &right, |l| l.0, |r| r.0, |l, r| (*l, r.copied())).collect();
		prop_assert_eq!(a, b);

		let a: Vec<_> = hash.inner_join(&left, &right, |l| l.0, |r| r.0, |l, r| (*l, *r)).collect();
		let b: Vec<_> = nested.inner_join(&left, &right, |l| l.0, |r| r.0, |l, r| (*l, *r)).collect();
		prop_assert_eq!(a, b);
	}

	#[test]
	fn compound_keys_match_structurally(left in arb_records(), right in arb_records()) {
		let pairs: Vec<_> = inner_join(
			&left,
			&right,
			|l| (l.0, l.1 % 4),
			|r| (r.0, r.1.wrapping_mul(2) % 4),
			|l, r| (*l, *r),
		)
		.collect();

		for (l, r) in &pairs {
			prop_assert_eq!((l.0, l.1 % 4), (r.0, r.1.wrapping_mul(2) % 4));
		}
	}
}
