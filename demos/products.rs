use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;
use specified_rust::{Entity, GetById, InMemoryRepository, ListAll, Specification};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Deserialize, Entity)]
struct Product {
    id: i32,
    name: String,
}

impl Product {
    fn new(id: i32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// Look up products through specifications.
#[derive(Debug, Parser)]
struct Args {
    /// JSON file holding an array of `{ "id": .., "name": .. }` products.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Product id to look up.
    #[arg(long, default_value_t = 2)]
    id: i32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let repo = match &args.data {
        Some(path) => InMemoryRepository::from_json_file(path)?,
        None => InMemoryRepository::new(vec![
            Product::new(1, "one"),
            Product::new(2, "two"),
            Product::new(3, "three"),
        ]),
    };

    match repo.get_by_id(&Specification::by_id(args.id)) {
        Some(product) => println!("Single element:{}", product.name),
        None => println!("Single element not found"),
    }

    println!();

    for product in repo.list_all(&Specification::all()) {
        println!("{}.{}", product.id, product.name);
    }

    Ok(())
}
