use expathome::api::ApiClient;
use expathome::catalog::ListingCatalog;
use expathome::filter::FilterPatch;
use tracing::{info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 ExpatHome - Rental Catalog Client");
    info!("=====================================");
    info!("");

    let client = ApiClient::from_env()?;
    info!("Backend: {}", client.base_url());

    let mut catalog = ListingCatalog::new();
    catalog.load(&client).await;
    info!("Loaded {} properties", catalog.total());

    // Sample narrowing: Bangkok listings under $1500/month with WiFi
    catalog.update(FilterPatch {
        city: Some("Bangkok".to_string()),
        price_ceiling: Some(1500.0),
        amenities: Some(["WiFi".to_string()].into_iter().collect()),
        ..FilterPatch::default()
    });

    info!(
        "\n✅ {} of {} properties match the sample filter\n",
        catalog.results().len(),
        catalog.total()
    );

    for (i, property) in catalog.results().iter().enumerate() {
        println!("{}. {} ({} {}/month)", i + 1, property.title, property.price, property.currency);
        println!("   {}, {}", property.location.district, property.location.city);
        println!(
            "   {} · {} bed · {} bath · {} m²",
            property.property_type, property.bedrooms, property.bathrooms, property.area
        );
        println!("   Amenities: {}", property.amenities.join(", "));
        println!("   Host: {} ({} ★, {} reviews)", property.host.name, property.host.rating, property.host.reviews);
        println!();
    }

    // Save the matching subset to JSON
    let json = serde_json::to_string_pretty(catalog.results())?;
    tokio::fs::write("filtered_properties.json", json).await?;
    info!("💾 Saved {} matching properties to filtered_properties.json", catalog.results().len());

    Ok(())
}
