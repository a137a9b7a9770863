mod badge;
mod controller;
mod format;
mod loader;
mod model;
mod pages;
mod query;
mod settings;
mod view;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use controller::Interaction;
use loader::{DataSource, Source};
use model::ItemId;
use pages::{render_page, PageKind, Status, ALL_PAGES};
use settings::Settings;

#[derive(Parser)]
#[command(name = "cafe-pages", about = "Café colonial content pages, rendered from JSON documents")]
struct Cli {
    /// Extra settings file, layered over ./cafe.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load one page, apply interactions and print its view as HTML
    Render {
        /// menu, cardapio, produtores, programacao or receitas
        page: PageKind,
        /// Base URL or directory holding the page documents
        #[arg(short, long)]
        source: Option<String>,
        /// Category to select (catalog)
        #[arg(short, long)]
        category: Option<String>,
        /// Search term (catalog)
        #[arg(long)]
        search: Option<String>,
        /// Recipe id to expand; repeat to toggle several
        #[arg(long = "toggle", value_name = "ID")]
        toggles: Vec<String>,
    },
    /// Load every page and report which ones are ready
    Check {
        #[arg(short, long)]
        source: Option<String>,
    },
    /// List pages with their documents and mount points
    Pages,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();

    let result = match cli.command {
        Commands::Render {
            page,
            source,
            category,
            search,
            toggles,
        } => {
            let source = Source::from_location(source.as_deref().unwrap_or(&settings.data_source));
            let interactions = interactions(category, search, toggles);
            let rendered = render_page(page, &source, &interactions).await;
            info!(
                page = page.name(),
                status = %rendered.status,
                handled = rendered.handled,
                requested = interactions.len(),
                "rendered"
            );
            print!("{}", rendered.html);
            Ok(())
        }
        Commands::Check { source } => {
            let source = Source::from_location(source.as_deref().unwrap_or(&settings.data_source));
            check_pages(&source).await
        }
        Commands::Pages => {
            println!("{:<12} | {:<18} | {}", "Page", "Document", "Mount points");
            println!("{}", "-".repeat(72));
            for kind in ALL_PAGES {
                println!(
                    "{:<12} | {:<18} | {}",
                    kind.name(),
                    kind.resource(),
                    kind.mount_points().join(", ")
                );
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

/// Command-line flags as interactions, in dispatch order: category, search, toggles.
fn interactions(category: Option<String>, search: Option<String>, toggles: Vec<String>) -> Vec<Interaction> {
    category
        .map(Interaction::CategoryClicked)
        .into_iter()
        .chain(search.map(Interaction::SearchInput))
        .chain(toggles.into_iter().map(|id| Interaction::ToggleDetails(ItemId(id))))
        .collect()
}

async fn check_pages(source: &Source) -> anyhow::Result<()> {
    let pb = ProgressBar::new(ALL_PAGES.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut rows = Vec::with_capacity(ALL_PAGES.len());
    for kind in ALL_PAGES {
        pb.set_message(kind.name());
        let rendered = render_page(kind, source, &[]).await;
        rows.push((kind, rendered.status));
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("{:<12} | {:<8} | {}", "Page", "Status", "Location");
    println!("{}", "-".repeat(72));
    for (kind, status) in &rows {
        println!("{:<12} | {:<8} | {}", kind.name(), status, source.describe(kind.resource()));
    }

    let failed = rows.iter().filter(|(_, s)| *s == Status::Failed).count();
    println!("\n{} ready, {} failed", rows.len() - failed, failed);
    if failed > 0 {
        anyhow::bail!("{} of {} pages failed to load", failed, rows.len());
    }
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_become_ordered_interactions() {
        let got = interactions(
            Some("Doces".into()),
            Some("fubá".into()),
            vec!["1".into(), "2".into()],
        );
        assert_eq!(
            got,
            vec![
                Interaction::CategoryClicked("Doces".into()),
                Interaction::SearchInput("fubá".into()),
                Interaction::ToggleDetails(ItemId("1".into())),
                Interaction::ToggleDetails(ItemId("2".into())),
            ]
        );
        assert!(interactions(None, None, Vec::new()).is_empty());
    }

    #[test]
    fn cli_parses_render_flags() {
        let cli = Cli::parse_from([
            "cafe-pages", "render", "cardapio", "--category", "Doces", "--toggle", "1", "--toggle", "2",
        ]);
        match cli.command {
            Commands::Render { page, category, toggles, .. } => {
                assert_eq!(page, PageKind::Catalog);
                assert_eq!(category.as_deref(), Some("Doces"));
                assert_eq!(toggles, vec!["1", "2"]);
            }
            _ => panic!("expected render"),
        }
        assert!(Cli::try_parse_from(["cafe-pages", "render", "blog"]).is_err());
    }

    #[test]
    fn durations_format_compactly() {
        assert_eq!(format_duration(std::time::Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(std::time::Duration::from_secs(125)), "2m 5s");
    }
}
