use std::borrow::Cow;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};

use crate::catalog::CategoryPool;
use crate::config::SelectionConfig;
use crate::data::Candidate;
use crate::demo::default_pool;
use crate::metrics::category_coverage;
use crate::selection::{CatalogSelector, SelectionContext};

#[derive(Debug, Parser)]
#[command(
    name = "catalog_select",
    disable_help_subcommand = true,
    about = "Deterministic catalog selection",
    long_about = "Draw a stable, seeded selection of candidates from a category catalog.",
    after_help = "Without --catalog the built-in engineer catalog is used."
)]
/// CLI for `catalog_select`.
///
/// Common usage:
/// - Sample every category of the built-in catalog: `catalog_select`
/// - Sample one category with a fixed prefix: `--context revit --seed-prefix home-`
/// - Use a JSON catalog file: `--catalog catalog.json`
struct CatalogSelectCli {
    #[arg(
        long,
        value_name = "PATH",
        help = "JSON catalog file (array of candidates or {\"candidates\": [...]})"
    )]
    catalog: Option<PathBuf>,
    #[arg(
        long,
        default_value = "all",
        value_name = "CATEGORY",
        help = "Category to sample, or 'all' for every category"
    )]
    context: String,
    #[arg(
        long = "seed-prefix",
        value_name = "PREFIX",
        help = "Prefix prepended to every derived seed key (default: empty)"
    )]
    seed_prefix: Option<String>,
    #[arg(long, help = "Print the selection as JSON")]
    json: bool,
    #[arg(
        long = "list-categories",
        help = "Print catalog categories with their sizes and exit"
    )]
    list_categories: bool,
    #[arg(long, help = "Append a per-category coverage summary")]
    coverage: bool,
}

/// Entry point for the `catalog_select` binary.
pub fn run_catalog_select<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let Some(cli) = parse_cli::<CatalogSelectCli, _>(
        std::iter::once("catalog_select".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

fn execute<W: Write>(cli: &CatalogSelectCli, out: &mut W) -> Result<(), Box<dyn Error>> {
    let pool: Cow<'static, CategoryPool> = match &cli.catalog {
        Some(path) => Cow::Owned(CategoryPool::from_json_path(path)?),
        None => Cow::Borrowed(default_pool()),
    };

    if cli.list_categories {
        for (category, members) in pool.iter() {
            writeln!(out, "{category}\t{}", members.len())?;
        }
        return Ok(());
    }

    let context = SelectionContext::parse(&cli.context);
    let seed_prefix = cli.seed_prefix.as_deref().unwrap_or_default();
    let selector = CatalogSelector::new(&pool, SelectionConfig::with_prefix(seed_prefix));
    let selection = selector.select(&context);

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &selection)?;
        writeln!(out)?;
    } else if selection.is_empty() {
        writeln!(out, "no candidates for context '{context}'")?;
    } else {
        for (idx, candidate) in selection.iter().enumerate() {
            writeln!(out, "{:>3}. {}", idx + 1, format_candidate(candidate))?;
        }
    }

    if cli.coverage {
        if let Some(coverage) = category_coverage(&pool, &selection) {
            writeln!(
                out,
                "coverage: {}/{} categories, {} selected, min={} max={} max_share={:.3}",
                coverage.covered,
                coverage.categories,
                coverage.total,
                coverage.min,
                coverage.max,
                coverage.max_share
            )?;
            for entry in &coverage.per_category {
                writeln!(
                    out,
                    "  {:<16} {:>3} ({:.1}%)",
                    entry.category,
                    entry.count,
                    entry.share * 100.0
                )?;
            }
        }
    }
    Ok(())
}

fn format_candidate(candidate: &Candidate) -> String {
    let mut line = format!(
        "{:<10} {:<18} [{}]",
        candidate.id,
        candidate.name,
        candidate.categories.join(", ")
    );
    for (name, value) in &candidate.attributes {
        line.push_str(&format!(" {name}={value}"));
    }
    line
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
