// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command line interface of Cadence.

mod arg;
mod cli;
mod cmd_check;
mod cmd_describe;
mod cmd_edit;
mod cmd_generate_completion;
mod cmd_normalize;
mod config;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::Config;
