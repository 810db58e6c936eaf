//! Command-line surface.
//!
//! Mirrors the classic Fresh Eye option table. Help, version and unknown
//! options do not fail: they produce text for the binary to print before it
//! exits with status 0.

use crate::config::{Codepage, Config};
use crate::error::{FreshEyeError, Result};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
cp parameter (used for code page definition) can be one of the following:

koi8-r    -- KOI8-R (default on UNIX-compatible platforms)
cp866     -- MS-DOS CP866 (aka 'alternative', default on Win32 platforms)
cp1251    -- Windows CP1251
mac       -- Cyrillic encoding used on Apple Macintosh
iso8859-5 -- ISO 8859-5

Please make sure there are words 'Fresh Eye' in the Subject: line of bug reports.";

/// Raw command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "fresheye",
    about = "Check Russian writing style.",
    disable_help_flag = true,
    disable_version_flag = true,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Set size of context to n words (default = 15, min = 2)
    #[arg(
        short = 'l',
        long = "context-size",
        value_name = "n",
        value_parser = clap::value_parser!(u32).range(2..)
    )]
    pub context_size: Option<u32>,

    /// Set sensitivity threshold to n (default = 600)
    #[arg(short = 's', long = "sensitivity", value_name = "n")]
    pub sensitivity: Option<u32>,

    /// Set coefficient of using wordcount information to n (0..100, 0 = off, default = 50)
    #[arg(
        short = 'c',
        long = "wordcount-use",
        value_name = "n",
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub wordcount_use: Option<u8>,

    /// Output into log file without queries
    #[arg(short = 'a', long = "silent")]
    pub silent: bool,

    /// Dump wordcount into log file
    #[arg(short = 'd', long = "dump-wordcount")]
    pub dump_wordcount: bool,

    /// Do not exclude proper names
    #[arg(short = 'p', long = "proper-names")]
    pub proper_names: bool,

    /// Resume processing, if possible
    #[arg(short = 'r', long = "resume")]
    pub resume: bool,

    /// Use path as log file ('fresheye.log' is the default)
    #[arg(short = 'o', long = "output", value_name = "path")]
    pub output: Option<PathBuf>,

    /// Set Cyrillic code page of input file to cp
    #[arg(short = 'I', long = "input-codepage", value_name = "cp", value_enum)]
    pub input_codepage: Option<Codepage>,

    /// Set Cyrillic code page of the interface and log file to cp
    #[arg(short = 'O', long = "output-codepage", value_name = "cp", value_enum)]
    pub output_codepage: Option<Codepage>,

    /// Display this help and exit
    #[arg(short = 'h', short_alias = '?', long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Display version information and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Files to check
    #[arg(value_name = "file")]
    pub files: Vec<PathBuf>,
}

/// What the binary should do after parsing.
#[derive(Debug)]
pub enum Invocation {
    Run { config: Config, files: Vec<PathBuf> },
    /// Print `text` and exit successfully.
    Exit { text: String },
}

impl Cli {
    /// Overlay the options given on the command line onto `base`.
    pub fn apply(&self, base: Config) -> Config {
        Config {
            context_size: self.context_size.unwrap_or(base.context_size),
            sensitivity_threshold: self.sensitivity.unwrap_or(base.sensitivity_threshold),
            wordcount_use: self.wordcount_use.unwrap_or(base.wordcount_use),
            silent: base.silent || self.silent,
            dump_wordcount: base.dump_wordcount || self.dump_wordcount,
            exclude_proper_names: base.exclude_proper_names && !self.proper_names,
            resume: base.resume || self.resume,
            log_path: self.output.clone().unwrap_or(base.log_path),
            input_codepage: self.input_codepage.unwrap_or(base.input_codepage),
            output_codepage: self.output_codepage.unwrap_or(base.output_codepage),
        }
    }
}

/// Full usage text.
pub fn usage_text() -> String {
    Cli::command().render_help().to_string()
}

/// Version banner with platform and default codepage.
pub fn version_text() -> String {
    format!(
        "fresheye version {} ({} [{}])\n\
         Copyright (C) 1999 OnMind Systems.\n\
         Fresh Eye is distributed in the hope that it will be useful,\n\
         but THERE IS ABSOLUTELY NO WARRANTY OF ANY KIND for this software.\n\
         You may redistribute copies of Fresh Eye\n\
         under the terms of the GNU General Public License.\n\
         For more information, see the file named COPYING.\n",
        crate::VERSION,
        std::env::consts::OS,
        Codepage::platform_default()
    )
}

/// A known option given without its value, e.g. a trailing `-l`.
fn is_missing_value(err: &clap::Error) -> bool {
    err.kind() == ErrorKind::InvalidValue
        && matches!(
            err.get(ContextKind::InvalidValue),
            Some(ContextValue::String(value)) if value.is_empty()
        )
}

/// Parse `args` (including the program name) on top of `base`.
pub fn parse_args<I, T>(args: I, base: Config) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    Ok(Invocation::Exit {
                        text: err.render().to_string(),
                    })
                }
                _ if err.kind() == ErrorKind::UnknownArgument || is_missing_value(&err) => {
                    log::debug!("unusable option: {}", err.render());
                    Ok(Invocation::Exit { text: usage_text() })
                }
                _ => Err(FreshEyeError::invalid_argument(
                    err.render().to_string().trim_end(),
                )),
            };
        }
    };

    if cli.version {
        return Ok(Invocation::Exit {
            text: version_text(),
        });
    }

    let config = cli.apply(base);
    config.validate()?;
    Ok(Invocation::Run {
        config,
        files: cli.files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> (Config, Vec<PathBuf>) {
        let argv = std::iter::once("fresheye").chain(args.iter().copied());
        match parse_args(argv, Config::default()).unwrap() {
            Invocation::Run { config, files } => (config, files),
            Invocation::Exit { text } => panic!("unexpected exit: {text}"),
        }
    }

    fn exit_text(args: &[&str]) -> String {
        let argv = std::iter::once("fresheye").chain(args.iter().copied());
        match parse_args(argv, Config::default()).unwrap() {
            Invocation::Exit { text } => text,
            other => panic!("expected exit, got {other:?}"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_options_keep_defaults() {
        let (config, files) = run(&["text.txt"]);
        assert_eq!(config, Config::default());
        assert_eq!(files, vec![PathBuf::from("text.txt")]);
    }

    #[test]
    fn short_options() {
        let (config, files) = run(&[
            "-l", "20", "-s", "450", "-c", "0", "-a", "-d", "-p", "-r", "-o", "out.log", "-I",
            "cp1251", "a.txt", "b.txt",
        ]);
        assert_eq!(config.context_size, 20);
        assert_eq!(config.sensitivity_threshold, 450);
        assert_eq!(config.wordcount_use, 0);
        assert!(config.silent && config.dump_wordcount && config.resume);
        assert!(!config.exclude_proper_names);
        assert_eq!(config.log_path, PathBuf::from("out.log"));
        assert_eq!(config.input_codepage, Codepage::Cp1251);
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn long_options() {
        let (config, _) = run(&[
            "--context-size=8",
            "--sensitivity",
            "700",
            "--wordcount-use",
            "75",
            "--silent",
            "--input-codepage",
            "iso8859-5",
            "--output-codepage",
            "mac",
        ]);
        assert_eq!(config.context_size, 8);
        assert_eq!(config.sensitivity_threshold, 700);
        assert_eq!(config.wordcount_use, 75);
        assert!(config.silent);
        assert_eq!(config.input_codepage, Codepage::Iso8859_5);
        assert_eq!(config.output_codepage, Codepage::Mac);
    }

    #[test]
    fn command_line_overrides_base_config() {
        let base = Config {
            context_size: 30,
            silent: true,
            ..Config::default()
        };
        let argv = ["fresheye", "-l", "5"];
        match parse_args(argv, base).unwrap() {
            Invocation::Run { config, .. } => {
                assert_eq!(config.context_size, 5);
                assert!(config.silent);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn help_variants_exit_with_usage() {
        for flag in ["-h", "-?", "--help"] {
            let text = exit_text(&[flag]);
            assert!(text.contains("--context-size"), "{flag}: {text}");
            assert!(text.contains("iso8859-5"), "{flag}");
        }
    }

    #[test]
    fn unknown_option_prints_usage() {
        let text = exit_text(&["--frobnicate"]);
        assert!(text.contains("Check Russian writing style."));
    }

    #[test]
    fn option_without_value_prints_usage() {
        for flag in ["-l", "--output", "-I"] {
            let text = exit_text(&[flag]);
            assert!(text.contains("Check Russian writing style."), "{flag}");
        }
    }

    #[test]
    fn version_flags() {
        for flag in ["-v", "--version"] {
            let text = exit_text(&[flag]);
            assert!(text.starts_with("fresheye version "));
            assert!(text.contains("NO WARRANTY"));
        }
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        for args in [["-l", "1"], ["-c", "101"], ["-I", "utf-8"]] {
            let argv = std::iter::once("fresheye").chain(args);
            assert!(matches!(
                parse_args(argv, Config::default()),
                Err(FreshEyeError::InvalidArgument { .. })
            ));
        }
    }
}
