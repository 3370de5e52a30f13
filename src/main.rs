use anyhow::Context;
use clap::Parser;
use realty_search::listings::{source_from_config, ListingsConfig};
use realty_search::search::{parse, ExplicitFields, SearchFilters};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Free-text property search
#[derive(Parser, Debug)]
#[command(name = "realty-search")]
#[command(
    about = "Turn a phrase like \"Franklin 3 bed 2 bath 400k-800k house\" into listing filters"
)]
#[command(version)]
struct Cli {
    /// Search phrase; words are joined with spaces
    #[arg(value_name = "PHRASE")]
    phrase: Vec<String>,

    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    county: Option<String>,

    /// Property type label, e.g. "Condo"
    #[arg(long = "type")]
    property_type: Option<String>,

    #[arg(long)]
    beds: Option<String>,

    #[arg(long)]
    baths: Option<String>,

    #[arg(long)]
    min_price: Option<String>,

    #[arg(long)]
    max_price: Option<String>,

    #[arg(long)]
    postal_code: Option<String>,

    /// Query the listing source with the merged filters
    #[arg(long)]
    fetch: bool,

    /// Maximum number of listings to fetch
    #[arg(long)]
    limit: Option<usize>,

    /// Save fetched listings as JSON
    #[arg(long, value_name = "FILE", requires = "fetch")]
    out: Option<String>,
}

impl Cli {
    fn explicit_fields(&self) -> ExplicitFields {
        ExplicitFields {
            city: self.city.clone(),
            county: self.county.clone(),
            property_type: self.property_type.clone(),
            beds: self.beds.clone(),
            baths: self.baths.clone(),
            min_price: self.min_price.clone(),
            max_price: self.max_price.clone(),
            postal_code: self.postal_code.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let phrase = cli.phrase.join(" ");
    let parsed = parse(&phrase);
    if let Some(hint) = parsed.hint() {
        info!("Nothing recognised in {:?}", phrase);
        println!("{}", hint);
    }

    let filters = SearchFilters::merge(&cli.explicit_fields(), &parsed);
    println!("{}", serde_json::to_string_pretty(&filters)?);

    if !cli.fetch {
        return Ok(());
    }

    let mut config = ListingsConfig::load_from_env()?;
    if let Some(limit) = cli.limit {
        config = config.with_limit(limit);
    }

    let source = source_from_config(config)?;
    info!("Searching {}...", source.source_name());

    let listings = source.search(&filters).await?;
    info!("✅ Found {} listings", listings.len());

    for (i, listing) in listings.iter().enumerate() {
        println!("{}. {} (${})", i + 1, listing.address, listing.price);
        println!("   {} bd, {} ba, {}", listing.beds, listing.baths, listing.property_type);
        match &listing.location.county {
            Some(county) => println!("   {}, {} County", listing.location.city, county),
            None => println!("   {}", listing.location.city),
        }
        println!("   URL: {}", listing.url);
        println!();
    }

    if let Some(path) = &cli.out {
        let json = serde_json::to_string_pretty(&listings)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write {}", path))?;
        info!("💾 Saved {} listings to {}", listings.len(), path);
    }

    Ok(())
}
