// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Register persistence.
//!
//! The register is a single integer stored as decimal text in a file.
//! Every operation opens and closes the file once; nothing is cached
//! between calls.

mod register;

pub use register::{parse_value, Reading, RegisterStore, MAX_LINE_BYTES};
