use anyhow::{bail, Result};
use serde_json::json;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

use magazine_catalog::{AuthorId, Catalog, MagazineId, VERSION};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None => run_report(),
        Some("json") => run_json(),
        Some(other) => bail!("unknown command `{other}`; usage: magazine-catalog [json]"),
    }
}

struct Demo {
    catalog: Catalog,
    ama: AuthorId,
    kofi: AuthorId,
    techlife: MagazineId,
    foodweek: MagazineId,
}

/// Seed a small catalog: the end-to-end scenario plus enough articles to
/// give every query a non-empty answer.
fn seed() -> Result<Demo> {
    let mut catalog = Catalog::new();

    let ama = catalog.add_author("Ama")?;
    let kofi = catalog.add_author("Kofi")?;
    let techlife = catalog.add_magazine("TechLife", "Tech")?;
    let foodweek = catalog.add_magazine("FoodWeek", "Food")?;

    catalog.author_add_article(ama, techlife, "A Very Good Title")?;
    catalog.author_add_article(ama, techlife, "Rust in Production")?;
    catalog.author_add_article(ama, techlife, "Borrowing Without Tears")?;
    catalog.author_add_article(kofi, techlife, "Gadgets of the Year")?;
    catalog.author_add_article(kofi, foodweek, "Jollof Rice, Three Ways")?;

    // Rejected attempts leave the catalog untouched
    if let Err(err) = catalog.add_article(ama, techlife, "Bad") {
        info!(%err, "expected rejection");
    }
    if let Err(err) = catalog.add_magazine("ThisNameIsWayTooLong", "Tech") {
        info!(%err, "expected rejection");
    }

    info!(
        authors = catalog.authors().count(),
        magazines = catalog.magazines().count(),
        articles = catalog.articles().count(),
        "catalog seeded"
    );

    Ok(Demo {
        catalog,
        ama,
        kofi,
        techlife,
        foodweek,
    })
}

fn run_report() -> Result<()> {
    let demo = seed()?;
    let catalog = &demo.catalog;

    println!("📚 Magazine Catalog v{VERSION}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for author_id in [demo.ama, demo.kofi] {
        let Some(author) = catalog.author(author_id) else {
            continue;
        };
        println!("\n✍️  {}", author.name());
        println!("   articles:    {}", catalog.author_articles(author_id).len());
        let magazines: Vec<&str> = catalog
            .author_magazines(author_id)
            .into_iter()
            .map(|m| m.name())
            .collect();
        println!("   magazines:   {}", magazines.join(", "));
        println!(
            "   topic areas: {}",
            catalog
                .topic_areas(author_id)
                .map(|areas| areas.join(", "))
                .unwrap_or_else(|| "-".to_string())
        );
    }

    for magazine_id in [demo.techlife, demo.foodweek] {
        let Some(magazine) = catalog.magazine(magazine_id) else {
            continue;
        };
        println!("\n📰 {} ({})", magazine.name(), magazine.category());
        for title in catalog.article_titles(magazine_id).unwrap_or_default() {
            println!("   • {title}");
        }
        let contributing: Vec<&str> = catalog
            .contributing_authors(magazine_id)
            .unwrap_or_default()
            .into_iter()
            .map(|a| a.name())
            .collect();
        println!(
            "   contributing authors: {}",
            if contributing.is_empty() {
                "-".to_string()
            } else {
                contributing.join(", ")
            }
        );
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    match catalog.top_publisher() {
        Some(top) => println!("🏆 Top publisher: {}", top.name()),
        None => println!("🏆 Top publisher: -"),
    }

    Ok(())
}

fn run_json() -> Result<()> {
    let demo = seed()?;
    let catalog = &demo.catalog;

    let techlife_contributing: Option<Vec<&str>> = catalog
        .contributing_authors(demo.techlife)
        .map(|authors| authors.into_iter().map(|a| a.name()).collect());

    let output = json!({
        "version": VERSION,
        "snapshot": catalog.snapshot(),
        "queries": {
            "topic_areas": {
                "Ama": catalog.topic_areas(demo.ama),
                "Kofi": catalog.topic_areas(demo.kofi),
            },
            "article_titles": {
                "TechLife": catalog.article_titles(demo.techlife),
                "FoodWeek": catalog.article_titles(demo.foodweek),
            },
            "contributing_authors": {
                "TechLife": techlife_contributing,
            },
            "top_publisher": catalog.top_publisher().map(|m| m.name()),
        },
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
