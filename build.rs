// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

// Embeds git metadata for `reg version`; outside a git checkout vergen
// emits placeholder values instead of failing.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .git_branch()
        .emit()?;
    Ok(())
}
