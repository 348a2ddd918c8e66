use ugtabs_rs::{SearchBuilder, TabType, UgClient, get_tab};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "wonderwall".to_string());
    let client = UgClient::default();

    // --- Part 1: Search ---
    println!("--- Searching chords for '{query}' ---");
    let results = SearchBuilder::new(&client, &query)
        .kind(TabType::Chords)
        .fetch()
        .await?;
    println!(
        "Page {} of {}, {} results",
        results.pagination.current,
        results.pagination.total,
        results.tabs.len()
    );
    for tab in results.tabs.iter().take(10) {
        println!(
            "  {} - {} [{}] rating={:.2} votes={}",
            tab.artist.as_deref().unwrap_or("?"),
            tab.name.as_deref().unwrap_or("?"),
            tab.slug.as_deref().unwrap_or("-"),
            tab.rating.unwrap_or_default(),
            tab.number_rates.unwrap_or_default()
        );
    }

    // --- Part 2: First tab's content ---
    if let Some(url) = results.tabs.iter().find_map(|t| t.url.as_deref()) {
        println!("\n--- Loading {url} ---");
        let tab = get_tab(&client, url).await?;
        let content = tab.raw_tabs.unwrap_or_default();
        println!("{}", content.lines().take(20).collect::<Vec<_>>().join("\n"));
    }

    Ok(())
}
