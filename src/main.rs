//! fresheye - Russian writing style checker, interactive front end.

use anyhow::{Context, Result};
use fresheye::cli::{self, Invocation};
use fresheye::review::{select_files, validate_files};
use fresheye::{Config, Prompter, StickyAnswer};

fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for key-level tracing)
    env_logger::init();

    let base = load_base_config()?;
    let (config, files) = match cli::parse_args(std::env::args_os(), base)? {
        Invocation::Run { config, files } => (config, files),
        Invocation::Exit { text } => {
            print!("{text}");
            return Ok(());
        }
    };

    if files.is_empty() {
        print!("{}", cli::usage_text());
        return Ok(());
    }

    validate_files(&files)?;

    log::info!(
        "context {} words, sensitivity {}, wordcount use {}, input codepage {}, log {}",
        config.context_size,
        config.sensitivity_threshold,
        config.wordcount_use,
        config.input_codepage,
        config.log_path.display()
    );

    let mut prompter = Prompter::stdio();
    let mut sticky = StickyAnswer::new();
    let selection = select_files(&mut prompter, &mut sticky, &files, config.silent)
        .context("Failed to read answers from the console")?;

    for file in &selection.files {
        println!("{}: selected for checking", file.display());
    }
    if selection.interrupted {
        log::info!("{} of {} files selected before stopping", selection.files.len(), files.len());
    }

    Ok(())
}

#[cfg(feature = "config")]
fn load_base_config() -> Result<Config> {
    Config::load_default().context("Failed to load configuration file")
}

#[cfg(not(feature = "config"))]
fn load_base_config() -> Result<Config> {
    Ok(Config::default())
}
