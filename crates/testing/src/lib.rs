// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod fixture;
pub mod logging;

pub use fixture::{Fixture, Person, Pet, PetOwner};
pub use logging::init_tracing;
