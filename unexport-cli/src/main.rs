//! unexport CLI - finds exported identifiers of a target module that no
//! other module in the program uses, and prints the rename instructions
//! that would make them non-exported.
//!
//! The resolved program model comes from an external symbol-resolution
//! front end as a JSON export (single file or per-module directory); this
//! tool never parses source and never mutates anything.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use unexport_core::{
    init_structured_logging, load_config, print_json, print_plain, ExportRule, JsonProvider,
    Unexport, UnexportConfig,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find unused exported identifiers and propose unexport renames"
)]
struct Cli {
    /// Path to the resolved program model: a JSON program file or a
    /// directory of per-module JSON exports
    model: PathBuf,

    /// Module path to analyze (overrides unexport.toml)
    #[arg(long)]
    target: Option<String>,

    /// Skip workspace modules when scanning for usages
    #[arg(long)]
    no_workspace: bool,

    /// Skip core/standard modules when scanning for usages
    #[arg(long)]
    no_core: bool,

    /// Export convention used to pick candidates
    #[arg(long, value_enum, default_value = "uppercase")]
    export_rule: ExportRuleArg,

    /// Candidate names or patterns to ignore
    #[arg(long, num_args = 1..)]
    ignore: Vec<String>,

    /// Log every matched reference (file and line) to stderr
    #[arg(long)]
    verbose: bool,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Print only the summary line, without rename commands
    #[arg(long)]
    summary_only: bool,
}

/// Export convention choices exposed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ExportRuleArg {
    /// Names beginning with an uppercase letter are exported
    Uppercase,
    /// Every named definition is treated as exported
    All,
}

impl From<ExportRuleArg> for ExportRule {
    fn from(arg: ExportRuleArg) -> Self {
        match arg {
            ExportRuleArg::Uppercase => ExportRule::UppercaseInitial,
            ExportRuleArg::All => ExportRule::All,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_structured_logging(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(&cwd)?.unwrap_or_default();

    let target = resolve_target(&cli, &config)?;
    let analyzer = build_analyzer(&cli, &config, target);

    let provider = JsonProvider::new(&cli.model);
    let result = analyzer
        .analyze_with(&provider)
        .with_context(|| format!("Analysis of {} failed", cli.model.display()))?;

    let json_output = cli.json
        || config
            .output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"));

    if json_output {
        print_json(&result);
    } else if cli.summary_only {
        println!("{}", result.summary());
    } else {
        print_plain(&result);
    }

    Ok(())
}

/// Target module comes from the flag first, then the config file.
fn resolve_target(cli: &Cli, config: &UnexportConfig) -> Result<String> {
    cli.target
        .clone()
        .or_else(|| config.target.clone())
        .ok_or_else(|| anyhow!("No target module: pass --target or set `target` in unexport.toml"))
}

/// Merge CLI flags over config-file values into an analyzer.
fn build_analyzer(cli: &Cli, config: &UnexportConfig, target: String) -> Unexport {
    let include_workspace = !cli.no_workspace && config.include_workspace.unwrap_or(true);
    let include_core = !cli.no_core && config.include_core.unwrap_or(true);

    let mut ignore = config.ignore.clone().unwrap_or_default();
    ignore.extend(cli.ignore.iter().cloned());

    Unexport::new(target)
        .include_workspace(include_workspace)
        .include_core(include_core)
        .export_rule(cli.export_rule.into())
        .ignore_patterns(ignore)
        .verbose(cli.verbose)
}
