// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.

mod fixtures;

#[allow(unused_imports)]
pub use fixtures::{RecordingEditor, STORED_RULES, test_config};
