// Copyright 2025 the Styletrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-argument command line for the styletrim minifier: a source path and
//! a target path, nothing else. On success the size reduction is reported
//! as a percentage of the source size.

use anyhow::{Context, bail};
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use styletrim::minify;

#[derive(Debug, Parser)]
#[command(name = "styletrim", about = "Minifies a CSS file.", version)]
struct Args {
    /// The CSS file to minify.
    source: PathBuf,
    /// Where the minified CSS is written.
    target: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Check the source before touching the target, so a bad invocation
    // never creates or truncates the output file.
    if !args.source.is_file() {
        bail!("source file {} does not exist", args.source.display());
    }
    let source = File::open(&args.source)
        .with_context(|| format!("failed to open {}", args.source.display()))?;
    let target = File::create(&args.target)
        .with_context(|| format!("failed to create {}", args.target.display()))?;

    let mut writer = BufWriter::new(target);
    let stats = minify(BufReader::new(source), &mut writer)
        .with_context(|| format!("failed to minify {}", args.source.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", args.target.display()))?;

    println!(
        "{}: {} bytes, {}: {} bytes ({}% reduction)",
        args.source.display(),
        stats.read,
        args.target.display(),
        stats.written,
        stats.reduction_percent()
    );
    Ok(())
}
