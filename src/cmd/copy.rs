// pathkit: PATH-list environment and file copy helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Copy and comparison commands.

use anyhow::Context;
use tracing::info;

use crate::cli::copy::{CopyArgs, SameArgs};
use crate::error::Result;
use crate::utility::fs::{copy_dir, copy_file, is_dir, is_the_same};

/// Copies a file, or a directory tree when the source is a directory.
///
/// # Errors
///
/// Returns an error if the source cannot be inspected or the copy fails.
pub fn run_copy_command(args: &CopyArgs) -> Result<()> {
    let (src, dst) = (&args.src, &args.dst);
    let recursive = is_dir(src).with_context(|| format!("failed to inspect {}", src.display()))?;

    if recursive {
        copy_dir(dst, src).with_context(|| {
            format!(
                "failed to copy directory {} to {}",
                src.display(),
                dst.display()
            )
        })?;
    } else {
        copy_file(dst, src).with_context(|| {
            format!("failed to copy {} to {}", src.display(), dst.display())
        })?;
    }

    info!(src = %src.display(), dst = %dst.display(), recursive, "copy finished");
    Ok(())
}

/// Prints whether two paths name the same entry.
///
/// # Errors
///
/// Returns an error if the working directory cannot be determined.
pub fn run_same_command(args: &SameArgs) -> Result<()> {
    let same = is_the_same(&args.lhs, &args.rhs).context("failed to resolve paths")?;
    println!("{same}");
    Ok(())
}
