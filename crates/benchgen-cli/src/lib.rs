//! benchgen command line
//!
//! Subcommands:
//!
//! - `generate`: write the fixtures of every (or every matching) variant
//! - `list`: print identifiers and their step sequences
//! - `check`: render everything in memory, writing nothing

use anyhow::{Context, Result};
use benchgen_artifact::{DirectorySink, MemorySink, WriteMode};
use benchgen_core::{
    default_catalog, derive, AnnotationPolicy, Emitter, FailurePolicy, GeneratorConfig,
    VariantDescriptor,
};
use benchgen_template::step_names;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use regex::Regex;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command-line definition
#[must_use]
pub fn cli() -> Command {
    Command::new("benchgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate Ada benchmark fixtures for container variants")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .subcommand(
            Command::new("generate")
                .about("Write .ads/.adb fixtures for every variant")
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_parser(value_parser!(PathBuf))
                        .help("Output directory (overrides the configuration)"),
                )
                .arg(
                    Arg::new("keep-going")
                        .long("keep-going")
                        .action(ArgAction::SetTrue)
                        .help("Continue after a failing variant"),
                )
                .arg(
                    Arg::new("always-write")
                        .long("always-write")
                        .action(ArgAction::SetTrue)
                        .help("Rewrite files even when their content is unchanged"),
                )
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .value_parser(value_parser!(String))
                        .help("Only generate variants whose identifier matches this regex"),
                )
                .arg(
                    Arg::new("report")
                        .long("report")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write the JSON run report to this file"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List variant identifiers and their steps")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(Command::new("check").about("Render every variant without writing files"))
}

/// Install the global subscriber (`RUST_LOG`, default `info`) on stderr
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    // A second install (tests) keeps the first subscriber.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// Run the selected subcommand; `Ok(false)` when some variant failed
///
/// # Errors
/// Returns error on configuration, IO or generation failures
pub fn dispatch(matches: &ArgMatches, out: &mut impl Write) -> Result<bool> {
    let config = load_config(matches)?;
    match matches.subcommand() {
        Some(("generate", args)) => generate(args, config, out),
        Some(("list", args)) => list(args.get_flag("json"), out),
        Some(("check", _)) => check(&config, out),
        _ => Ok(false),
    }
}

fn load_config(matches: &ArgMatches) -> Result<GeneratorConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(GeneratorConfig::default()),
    }
}

/// Apply `generate` flags on top of the file configuration
fn apply_overrides(args: &ArgMatches, mut config: GeneratorConfig) -> GeneratorConfig {
    if let Some(dir) = args.get_one::<PathBuf>("output") {
        config = config.with_output_dir(dir);
    }
    if args.get_flag("keep-going") {
        config = config.with_failure_policy(FailurePolicy::Continue);
    }
    if args.get_flag("always-write") {
        config = config.with_write_mode(WriteMode::Always);
    }
    config
}

/// Keep descriptors whose identifier matches; underivable ones are kept so
/// their error surfaces during the run
fn filter_catalog(catalog: Vec<VariantDescriptor>, pattern: &Regex) -> Vec<VariantDescriptor> {
    catalog
        .into_iter()
        .filter(|d| derive(d).map_or(true, |p| pattern.is_match(p.id().as_str())))
        .collect()
}

fn generate(args: &ArgMatches, config: GeneratorConfig, out: &mut impl Write) -> Result<bool> {
    let config = apply_overrides(args, config);
    let mut catalog = default_catalog();
    if let Some(pattern) = args.get_one::<String>("filter") {
        let pattern = Regex::new(pattern).with_context(|| format!("invalid filter '{pattern}'"))?;
        catalog = filter_catalog(catalog, &pattern);
        tracing::info!(%pattern, variants = catalog.len(), "filter applied");
    }

    let mut sink = DirectorySink::new(&config.output_dir, config.write_mode);
    let report = Emitter::standard()
        .with_annotation_policy(config.annotation_policy)
        .run(&catalog, &mut sink, config.failure_policy)
        .with_context(|| format!("generating into {}", config.output_dir.display()))?;

    if let Some(path) = args.get_one::<PathBuf>("report") {
        let json = report.to_json().context("serializing run report")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }

    writeln!(
        out,
        "{} variants: {} written, {} unchanged, {} failed ({})",
        report.variants.len() + report.failures.len(),
        report.written(),
        report.unchanged(),
        report.failures.len(),
        config.output_dir.display()
    )?;
    for failure in &report.failures {
        writeln!(out, "  FAILED {}: {}", failure.variant, failure.error)?;
    }
    Ok(report.passed())
}

fn list(json: bool, out: &mut impl Write) -> Result<bool> {
    let mut entries = Vec::new();
    for descriptor in default_catalog() {
        let derived = derive(&descriptor)?;
        entries.push((derived, descriptor.is_favorite()));
    }

    if json {
        let value: Vec<_> = entries
            .iter()
            .map(|(derived, favorite)| {
                serde_json::json!({
                    "id": derived.id(),
                    "stem": derived.id().stem(),
                    "kind": derived.kind(),
                    "class": derived.class(),
                    "steps": step_names(derived.kind(), derived.class()),
                    "favorite": favorite,
                })
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        for (derived, favorite) in &entries {
            let marker = if *favorite { "*" } else { " " };
            writeln!(
                out,
                "{marker} {:<48} {}",
                derived.id().as_str(),
                step_names(derived.kind(), derived.class()).join(", ")
            )?;
        }
    }
    Ok(true)
}

/// Annotation keys are always validated strictly here
fn check(config: &GeneratorConfig, out: &mut impl Write) -> Result<bool> {
    if config.annotation_policy != AnnotationPolicy::Deny {
        tracing::debug!(configured = ?config.annotation_policy, "check denies unknown annotations");
    }
    let catalog = default_catalog();
    let mut sink = MemorySink::new();
    let report = Emitter::standard()
        .with_annotation_policy(AnnotationPolicy::Deny)
        .run(&catalog, &mut sink, FailurePolicy::Continue)
        .context("checking default catalog")?;

    for failure in &report.failures {
        writeln!(out, "FAILED {}: {}", failure.variant, failure.error)?;
    }
    writeln!(
        out,
        "{} variants checked, {} files rendered, {} failed",
        catalog.len(),
        sink.len(),
        report.failures.len()
    )?;
    Ok(report.passed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        cli().try_get_matches_from(args).unwrap()
    }

    #[test]
    fn flags_override_configuration() {
        let all = matches(&[
            "benchgen",
            "generate",
            "--output",
            "out",
            "--keep-going",
            "--always-write",
        ]);
        let (_, args) = all.subcommand().unwrap();
        let config = apply_overrides(args, GeneratorConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.failure_policy, FailurePolicy::Continue);
        assert_eq!(config.write_mode, WriteMode::Always);
    }

    #[test]
    fn defaults_survive_without_flags() {
        let all = matches(&["benchgen", "generate"]);
        let (_, args) = all.subcommand().unwrap();
        let config = apply_overrides(args, GeneratorConfig::default());
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn filter_selects_by_identifier() {
        let pattern = Regex::new("^Map_.*_StrStr$").unwrap();
        let filtered = filter_catalog(default_catalog(), &pattern);
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(cli().try_get_matches_from(["benchgen"]).is_err());
    }
}
