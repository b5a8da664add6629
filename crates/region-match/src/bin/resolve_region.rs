use std::env;

use region_match::{Catalog, RegionMatcher, Resolution};

fn load_catalog() -> Result<Catalog, region_match::CatalogError> {
    match env::var("CATALOG_PATH") {
        Ok(path) => Catalog::from_path(path),
        Err(_) => Ok(Catalog::builtin()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let query = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.trim().is_empty() {
        eprintln!("Usage: resolve_region <region name>");
        std::process::exit(1);
    }

    let matcher = RegionMatcher::new(load_catalog()?);

    match matcher.resolve(&query) {
        Resolution::Matched { entry, strategy } => {
            println!("{}", serde_json::to_string_pretty(entry)?);
            eprintln!("matched by: {}", strategy);
        }
        Resolution::NotFound => {
            println!("No region matched: {}", query);
            println!("Known regions: {}", matcher.region_names().join(", "));
            std::process::exit(1);
        }
    }

    Ok(())
}
