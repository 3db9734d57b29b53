use clap::Parser;
use ragseed::cli::commands::{Cli, Commands};
use ragseed::RagSeed;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let rs = match RagSeed::new() {
        Ok(rs) => rs,
        Err(e) => {
            eprintln!("Error initializing ragseed: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(rs, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(rs: RagSeed, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Seed { file, keep_index } => {
            let outcome = rs.seed(&file, keep_index).await?;
            println!(
                "Embedded {} reviews, upserted {} vectors in {} batches",
                outcome.load.embedded, outcome.load.upserted, outcome.load.batches
            );
            if let Some(stats) = &outcome.verify.stats {
                println!("Index statistics:");
                println!("{}", serde_json::to_string_pretty(stats)?);
            }
            if !outcome.verify.probe.is_empty() {
                println!("Query response:");
                println!("{}", serde_json::to_string_pretty(&outcome.verify.probe)?);
            }
            for err in &outcome.verify.errors {
                eprintln!("{err}");
            }
        }
        Commands::Stats => {
            let stats = rs.stats().await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Commands::Query { text, limit } => {
            let matches = rs.query(&text, limit).await?;
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
    }
    Ok(())
}
