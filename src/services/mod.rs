// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - loading, filtering and statistics.

pub mod frequency;
pub mod loader;
pub mod paginator;
pub mod stats;

pub use frequency::FrequencyCounter;
pub use loader::TripLoader;
pub use paginator::{page, RawDataPager, PAGE_SIZE};
pub use stats::summarize;
