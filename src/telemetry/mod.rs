// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Telemetry, tracing, and metrics infrastructure.
//!
//! - **Tracing**: structured logging via `tracing`, initialized once at
//!   startup with [`init_telemetry`]
//! - **Metrics**: lightweight counters and durations for tool dispatch and
//!   template expansion, recorded only when the `telemetry` feature is on
//!
//! Initialize at application startup:
//!
//! ```rust,ignore
//! use quill::telemetry::{init_telemetry, TelemetryConfig};
//!
//! let _guard = init_telemetry(&TelemetryConfig::default())?;
//! ```

mod init;
pub mod metrics;

pub use init::{init_telemetry, TelemetryConfig, TelemetryGuard};
pub use metrics::{Metrics, MetricsSnapshot, OperationMetrics, ToolMetrics, GLOBAL_METRICS};
