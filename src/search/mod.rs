// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog search: from a raw query to a ranked list and, optionally, a page.
//!
//! The pipeline is short. Normalize the query and drop it if it is too
//! short. A quick redirect hit returns one synthetic result. Otherwise the
//! alias table widens the query into a set of terms, every item is scored
//! against every term, and the matches are ranked and truncated.

pub mod alias;
pub mod cache;
pub mod cursor;
pub mod engine;
pub mod redirect;
pub mod session;
pub mod utils;
