//! init-template - turn the component library template into a client package

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use template_init_core::{
    run_init, InitOptions, InteractivePrompts, PresetAnswers, PresetValues, PromptProvider,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "init-template")]
#[command(about = "Initialize the component library template for a client")]
#[command(version)]
pub struct Args {
    /// Show what would change without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Log every file operation
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a single JSON object instead of human-readable output
    #[arg(long)]
    pub json: bool,

    /// Re-initialize a directory that was already initialized
    #[arg(long)]
    pub force: bool,

    /// Auto-confirm all prompts (non-interactive mode, every answer must be given as a flag)
    #[arg(short, long)]
    pub yes: bool,

    /// Project root containing the template files
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Client or organization name
    #[arg(long)]
    pub client_name: Option<String>,

    /// npm package name, e.g. @acme/ui
    #[arg(long)]
    pub package_name: Option<String>,

    /// Package description
    #[arg(long)]
    pub description: Option<String>,

    /// Primary brand colour as a hex code, e.g. #3B82F6
    #[arg(long, alias = "primary-color")]
    pub primary_colour: Option<String>,
}

impl From<Args> for InitOptions {
    fn from(args: Args) -> Self {
        InitOptions {
            root: args.root,
            dry_run: args.dry_run,
            verbose: args.verbose,
            json: args.json,
            force: args.force,
            yes: args.yes,
            presets: PresetValues {
                client_name: args.client_name,
                package_name: args.package_name,
                description: args.description,
                primary_colour: args.primary_colour,
            },
        }
    }
}

/// Log filter: `RUST_LOG` wins, otherwise warnings only unless `--verbose`
fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("template_init_core=debug,init_template=debug")
        } else {
            EnvFilter::new("warn")
        }
    })
}

/// Pick the prompt provider: flags only with `--yes`, interactive otherwise
fn prompt_provider(options: &InitOptions) -> Box<dyn PromptProvider> {
    if options.yes {
        Box::new(PresetAnswers::new(options.presets.clone(), options.force))
    } else {
        Box::new(InteractivePrompts::new(options.presets.clone()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let options: InitOptions = Args::parse().into();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(options.verbose))
        .init();

    tracing::debug!(?options, "Parsed options");

    let mut prompts = prompt_provider(&options);
    let report = run_init(&options, prompts.as_mut()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if options.json {
        println!("{}", report.to_json()?);
    } else {
        println!();
        for line in report.summary_lines() {
            println!("{}", line);
        }
    }

    std::process::exit(report.exit_code());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> InitOptions {
        Args::try_parse_from(std::iter::once("init-template").chain(args.iter().copied()))
            .unwrap()
            .into()
    }

    #[test]
    fn test_defaults() {
        let options = parse(&[]);
        assert!(!options.dry_run && !options.verbose && !options.json);
        assert!(!options.force && !options.yes);
        assert_eq!(options.root, PathBuf::from("."));
        assert_eq!(options.presets, PresetValues::default());
    }

    #[test]
    fn test_flags_combine() {
        let options = parse(&["--dry-run", "--verbose", "--json"]);
        assert!(options.dry_run);
        assert!(options.verbose);
        assert!(options.json);

        let options = parse(&["--json", "-v"]);
        assert!(options.json && options.verbose && !options.dry_run);
    }

    #[test]
    fn test_preset_answers_from_flags() {
        let options = parse(&[
            "--yes",
            "--force",
            "--root",
            "lib",
            "--client-name",
            "Acme Corp",
            "--package-name",
            "@acme/ui",
            "--description",
            "Widgets",
            "--primary-color",
            "#fff",
        ]);

        assert!(options.yes && options.force);
        assert_eq!(options.root, PathBuf::from("lib"));
        assert!(options.presets.is_complete());
        assert_eq!(options.presets.primary_colour.as_deref(), Some("#fff"));
    }

    #[test]
    fn test_help_exits_early() {
        let err = Args::try_parse_from(["init-template", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);

        let err = Args::try_parse_from(["init-template", "--help", "--dry-run"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["init-template", "--bogus"]).is_err());
    }
}
