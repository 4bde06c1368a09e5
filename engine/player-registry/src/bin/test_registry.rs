use player_registry::PlayerRegistry;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Testing PlayerRegistry...");

    let mut registry = PlayerRegistry::with_fixtures();
    if let Some(path) = std::env::args().nth(1) {
        registry.load_from_file(&path).await?;
    }

    info!("Registry loaded with {} players", registry.player_count());

    println!("\nRoster:");
    println!("  ID Name                  Team                 Pos  Years      PPG");
    println!("--------------------------------------------------------------------");

    for player in registry.get_all_players() {
        let years = match (player.year_start, player.year_end) {
            (Some(start), Some(end)) => format!("{start}-{end}"),
            _ => "-".to_string(),
        };
        let ppg = registry.get_stats(player.id).map(|s| format!("{:5.1}", s.ppg)).unwrap_or_default();
        println!(
            "{:4} {:21} {:20} {:4} {:10} {}",
            player.id,
            player.name,
            player.team,
            player.position.as_deref().unwrap_or("-"),
            years,
            ppg
        );
    }

    println!("\nSearching for 'celtics':");
    for player in registry.search_players("celtics")? {
        println!("  {} - {}", player.name, player.team);
    }

    info!("PlayerRegistry test completed successfully!");
    Ok(())
}
