use arabseed_core::{ArabSeedScraper, DetailValue};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scraper = ArabSeedScraper::new()?;

    println!("Netflix listing, page 1\n");
    let listing = scraper.netflix_films(1).await?;
    for (i, film) in listing.films.iter().enumerate() {
        println!(
            "  {}. {} [{}] {}",
            i + 1,
            film.title,
            film.info.genres.join(", "),
            film.ratings.as_deref().unwrap_or("-")
        );
    }
    println!(
        "\n{} films, page {} of {}",
        listing.total_results,
        listing.pagination.current_page,
        listing
            .pagination
            .total_pages
            .map(|p| p.to_string())
            .unwrap_or_else(|| "?".to_string())
    );

    if let Some(first) = listing.films.first() {
        println!("\nDetails of {}\n", first.url);
        match scraper.get_film_information(&first.url).await? {
            Some(detail) => {
                println!("Title: {}", detail.title.as_deref().unwrap_or("-"));
                println!("Quality: {}", detail.quality.as_deref().unwrap_or("-"));
                for (label, value) in &detail.details {
                    match value {
                        DetailValue::Text(text) => println!("  {}: {}", label, text),
                        DetailValue::Tags(tags) => println!("  {}: {}", label, tags.join(", ")),
                    }
                }
                if let Some(watch) = &detail.links.watch {
                    println!("Watch: {}", watch);
                }
            }
            None => println!("No film on that page"),
        }
    }

    let episodes = scraper.films_from_home().await?;
    println!("\nLatest episodes ({}):", episodes.len());
    for episode in episodes.iter().take(10) {
        println!(
            "  {} {}{}",
            episode.series_title.as_deref().unwrap_or(&episode.title),
            episode.episode_number.as_deref().unwrap_or(""),
            if episode.is_last { " (new)" } else { "" }
        );
    }

    Ok(())
}
