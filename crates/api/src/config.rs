// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use salary_board::DEFAULT_MAX_ENTRY_BEFORE_DISPLAY;

/// Runtime settings shared by the API operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Submissions a company needs before it appears in the companies listing.
    pub max_entry_before_display: u64,
}

impl ServiceConfig {
    /// Creates a configuration with the given display threshold.
    #[must_use]
    pub const fn new(max_entry_before_display: u64) -> Self {
        Self {
            max_entry_before_display,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRY_BEFORE_DISPLAY)
    }
}
