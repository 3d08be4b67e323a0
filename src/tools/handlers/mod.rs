// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Tool handler implementations.
//!
//! This module contains the implementations of all built-in tools.

mod fetch_web;
mod weather;

pub use fetch_web::FetchWebHandler;
pub use weather::WeatherHandler;
