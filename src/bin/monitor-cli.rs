use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "monitor-cli")]
#[command(about = "Command line client for the service monitor", long_about = None)]
struct Cli {
    #[arg(short, long, env = "MONITOR_URL", default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the monitor is up
    Status,
    /// Run an on-demand check, optionally limited to some groups
    Check {
        /// Group to check; repeat for several. Defaults to all groups.
        #[arg(long = "vps", value_name = "GROUP")]
        groups: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/", base)).send().await?;
            print_response(res).await?;
        }
        Commands::Check { groups } => {
            let query: Vec<(&str, &str)> = groups.iter().map(|g| ("vps", g.as_str())).collect();
            let res = client
                .get(format!("{}/check/", base))
                .query(&query)
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: monitor returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
