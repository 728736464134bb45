// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration settings.

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a toast stays on screen before hiding itself (in milliseconds).
pub const DEFAULT_AUTO_HIDE_MS: u64 = 3000;

/// Shortest auto-hide delay accepted from `settings.toml` (in milliseconds).
pub const MIN_AUTO_HIDE_MS: u64 = 500;

/// Longest auto-hide delay accepted from `settings.toml` (in milliseconds).
pub const MAX_AUTO_HIDE_MS: u64 = 60_000;

/// How often the auto-hide deadlines are checked while toasts are visible.
pub const AUTO_HIDE_TICK_MS: u64 = 100;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

/// Number of recent events listed in the activity panel.
pub const ACTIVITY_PANEL_ROWS: usize = 8;

const _: () = {
    assert!(MIN_AUTO_HIDE_MS <= DEFAULT_AUTO_HIDE_MS);
    assert!(DEFAULT_AUTO_HIDE_MS <= MAX_AUTO_HIDE_MS);
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
