mod catalog;
mod cli;
mod config;
mod error;
mod logging;
mod matcher;
mod report;
mod types;
mod ui;

use crate::catalog::Catalog;
use crate::error::{CareerError, Result};
use crate::matcher::{ScoringPolicy, Selection};
use crate::types::config::{CareerConfig, FormatKind, PolicyKind};
use crate::types::report::PredictionReport;
use clap::Parser;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn resolve_catalog(
    root: &Path,
    source: &cli::CatalogSource,
    cfg: &CareerConfig,
) -> Result<Cow<'static, Catalog>> {
    let path = source
        .catalog
        .clone()
        .or_else(|| cfg.catalog_path().map(|path| root.join(path)));
    match path {
        Some(path) => {
            info!(path = %path.display(), "using catalog file");
            Ok(Cow::Owned(Catalog::load(&path)?))
        }
        None => Ok(Cow::Borrowed(Catalog::builtin())),
    }
}

fn policy_for(cfg: &CareerConfig, arg: Option<cli::PolicyArg>) -> ScoringPolicy {
    let kind = arg.map(|policy| match policy {
        cli::PolicyArg::Simple => PolicyKind::Simple,
        cli::PolicyArg::Weighted => PolicyKind::Weighted,
    });
    let policy = cfg.scoring_policy(kind);
    info!(policy = %policy, "scoring policy selected");
    policy
}

fn format_for(cfg: &CareerConfig, arg: Option<cli::ReportFormat>) -> report::OutputFormat {
    match arg {
        Some(cli::ReportFormat::Text) => report::OutputFormat::Text,
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match cfg.output_format() {
            FormatKind::Text => report::OutputFormat::Text,
            FormatKind::Json => report::OutputFormat::Json,
            FormatKind::Md => report::OutputFormat::Md,
        },
    }
}

fn emit_prediction(
    catalog: &Catalog,
    selection: Selection,
    policy: &ScoringPolicy,
    format: report::OutputFormat,
    explain: bool,
) -> Result<i32> {
    let prediction = matcher::predict(catalog, &selection, policy);
    let ranking = if explain {
        matcher::rank(catalog, &selection, policy)
    } else {
        Vec::new()
    };
    let matched = prediction.is_match();
    info!(career = ?prediction.career(), "prediction ready");
    let prediction_report = PredictionReport::new(policy, selection, prediction, ranking);
    let rendered = report::render(&prediction_report, format)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }

    if matched {
        Ok(exit_code::SUCCESS)
    } else {
        Ok(exit_code::WARNINGS)
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let root = std::env::current_dir()?;
    let cfg = config::load_config(&root, cli.config.as_deref())?.unwrap_or_default();
    debug!(root = %root.display(), "configuration resolved");

    match cli.command {
        cli::Commands::Predict(cmd) => {
            let mut selection =
                Selection::from_skills(&cmd.skills).with_education(cmd.education);
            if !cmd.interests.is_empty() {
                selection = selection.with_interests(&cmd.interests);
            }

            if !selection.has_skills() {
                eprintln!("{}", CareerError::NoSkillsSelected);
                return Ok(exit_code::WARNINGS);
            }

            let catalog = resolve_catalog(&root, &cmd.source, &cfg)?;
            let policy = policy_for(&cfg, cmd.policy);
            emit_prediction(
                &catalog,
                selection,
                &policy,
                format_for(&cfg, cmd.format),
                cmd.explain,
            )
        }
        cli::Commands::Pick(cmd) => {
            let catalog = resolve_catalog(&root, &cmd.source, &cfg)?;
            let policy = policy_for(&cfg, cmd.policy);
            let mut state = ui::SelectionState::new();
            state.subscribe(|state| {
                debug!(
                    revision = state.revision(),
                    skills = state.skills().len(),
                    interests = state.interests().len(),
                    "selection updated"
                )
            });
            ui::collect_selection(&mut ui::TerminalPrompter, &catalog, &mut state)?;

            if let Err(e) = state.validate_for_prediction() {
                eprintln!("{e}");
                return Ok(exit_code::WARNINGS);
            }
            emit_prediction(
                &catalog,
                state.snapshot(),
                &policy,
                format_for(&cfg, cmd.format),
                cmd.explain,
            )
        }
        cli::Commands::Skills(source) => {
            let catalog = resolve_catalog(&root, &source, &cfg)?;
            for skill in catalog.all_skills() {
                println!("{skill}");
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Interests(source) => {
            let catalog = resolve_catalog(&root, &source, &cfg)?;
            for interest in catalog.all_interests() {
                println!("{interest}");
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Catalog(cmd) => {
            let catalog = resolve_catalog(&root, &cmd.source, &cfg)?;
            let rendered = report::render_catalog(&catalog, format_for(&cfg, cmd.format))?;
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
