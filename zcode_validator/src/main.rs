use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quendor::{classify, read};

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, long)]
    story_path: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let image = read(&args.story_path).with_context(|| {
        format!(
            "failed to read story file '{}'",
            args.story_path.display()
        )
    })?;
    let format = classify(&image).with_context(|| {
        format!(
            "failed to classify story file '{}'",
            args.story_path.display()
        )
    })?;

    println!("{format}");
    Ok(())
}
