//! Rose CSM CLI
//!
//! Command-line front end for the dashboard API:
//! - Browse the customer roster
//! - Compute, preview and save health scores
//! - Read and save client notes
//! - Check server status

use clap::{Parser, Subcommand};
use reqwest::{Client, Url};
use rose_csm::roster::format_score;
use rose_csm::scoring::{HealthInputs, NPS, TICKET_LOAD, USAGE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rose-csm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rose CSM Dashboard - customer roster, health scores and notes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8501", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

/// Slider readings shared by the scoring commands
#[derive(clap::Args, Clone, Copy)]
pub struct SliderArgs {
    /// Product usage level (1-10)
    #[arg(long, default_value_t = USAGE.default)]
    pub usage: f64,
    /// Support ticket load, higher is worse (0-10)
    #[arg(long, default_value_t = TICKET_LOAD.default)]
    pub tickets: f64,
    /// Simplified NPS (1-10)
    #[arg(long, default_value_t = NPS.default)]
    pub nps: f64,
}

impl SliderArgs {
    /// Readings snapped into slider range
    fn inputs(&self) -> HealthInputs {
        HealthInputs::new(self.usage, self.tickets, self.nps).clamped()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all customers
    Customers,

    /// Show one customer's details
    Show {
        /// Customer name
        name: String,
    },

    /// Compute a health score locally
    Score {
        #[command(flatten)]
        sliders: SliderArgs,
    },

    /// Preview a new health score against the stored one
    Preview {
        /// Customer name
        name: String,
        #[command(flatten)]
        sliders: SliderArgs,
    },

    /// Save a new health score
    SaveScore {
        /// Customer name
        name: String,
        #[command(flatten)]
        sliders: SliderArgs,
    },

    /// Show notes for a customer
    Notes {
        /// Customer name
        name: String,
    },

    /// Replace notes for a customer
    SaveNotes {
        /// Customer name
        name: String,
        /// Note text
        text: String,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = Client::new();
    let json_output = cli.format == "json";

    match cli.command {
        Commands::Customers => {
            let url = api_url(&cli.api_url, &["customers"])?;
            let data = fetch(client.get(url)).await?;

            if json_output {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_customer_table(&data);
            }
        }

        Commands::Show { name } => {
            let url = api_url(&cli.api_url, &["customers", &name])?;
            let data = fetch(client.get(url)).await?;

            if json_output {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_customer_detail(&data);
            }
        }

        Commands::Score { sliders } => {
            let inputs = sliders.inputs();
            let score = inputs.score();

            if json_output {
                let body = serde_json::json!({ "inputs": inputs, "score": score });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!(
                    "Usage {:.1}, tickets {:.1}, NPS {:.1}",
                    inputs.usage, inputs.ticket_load, inputs.nps
                );
                println!("Proposed new Health Score: {}", format_score(score));
            }
        }

        Commands::Preview { name, sliders } => {
            let url = api_url(&cli.api_url, &["customers", &name, "health-score", "preview"])?;
            let data = fetch(client.post(url).json(&sliders.inputs())).await?;

            if json_output {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!(
                    "Current stored Health Score for {}: {}",
                    name,
                    data["current_display"].as_str().unwrap_or("-")
                );
                println!(
                    "Proposed new Health Score: {}",
                    data["proposed_display"].as_str().unwrap_or("-")
                );
            }
        }

        Commands::SaveScore { name, sliders } => {
            let url = api_url(&cli.api_url, &["customers", &name, "health-score"])?;
            let data = fetch(client.put(url).json(&sliders.inputs())).await?;

            if json_output {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("{}", data["message"].as_str().unwrap_or("Saved"));
            }
        }

        Commands::Notes { name } => {
            let url = api_url(&cli.api_url, &["customers", &name, "notes"])?;
            let data = fetch(client.get(url)).await?;

            if json_output {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                match data["text"].as_str() {
                    Some(text) if !text.is_empty() => println!("{}", text),
                    _ => println!("No notes for {} yet.", name),
                }
            }
        }

        Commands::SaveNotes { name, text } => {
            let url = api_url(&cli.api_url, &["customers", &name, "notes"])?;
            let body = serde_json::json!({ "text": text });
            let data = fetch(client.put(url).json(&body)).await?;

            if json_output {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("{}", data["message"].as_str().unwrap_or("Saved"));
            }
        }

        Commands::Status => {
            let url = format!("{}/health", cli.api_url.trim_end_matches('/'));

            match client.get(&url).send().await {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("Rose CSM v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!("Customers: {}", health["customers"].as_u64().unwrap_or(0));

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Rose CSM API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the API server is running:");
                    eprintln!("  cargo run --bin rose-csm");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = rose_csm::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Build an `/api/v1/...` URL, percent-encoding each segment
fn api_url(base: &str, segments: &[&str]) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| format!("Invalid API URL: {}", base))?
        .pop_if_empty()
        .extend(["api", "v1"])
        .extend(segments);
    Ok(url)
}

/// Send a request and decode the JSON body, exiting on an error status
async fn fetch(
    request: reqwest::RequestBuilder,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let response = request.send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        let message = body["error"]["message"].as_str().unwrap_or("request failed");
        eprintln!("Failed ({}): {}", status, message);
        std::process::exit(1);
    }

    Ok(response.json().await?)
}

fn print_customer_table(data: &serde_json::Value) {
    let customers = match data["customers"].as_array() {
        Some(c) if !c.is_empty() => c,
        _ => {
            println!("No customers");
            return;
        }
    };

    println!(
        "{:<4} {:<32} {:>10} {:<8} {:>6}  {}",
        "#", "Customer", "ARR", "CSM", "Health", "Email"
    );
    println!("{}", "-".repeat(100));

    for c in customers {
        println!(
            "{:<4} {:<32} {:>10} {:<8} {:>6.1}  {}",
            c["row"].as_u64().unwrap_or(0),
            c["name"].as_str().unwrap_or("-"),
            c["arr_display"].as_str().unwrap_or("-"),
            c["csm"].as_str().unwrap_or("-"),
            c["health_score"].as_f64().unwrap_or(0.0),
            c["email"].as_str().unwrap_or("-"),
        );
    }
}

fn print_customer_detail(data: &serde_json::Value) {
    println!("Customer: {}", data["name"].as_str().unwrap_or("-"));
    println!(
        "Customer Success Manager: {}",
        data["csm"].as_str().unwrap_or("-")
    );
    println!("ARR: {}", data["arr_display"].as_str().unwrap_or("-"));
    println!(
        "Health Score: {}",
        data["health_display"].as_str().unwrap_or("-")
    );
    println!();
    println!("Contact Information");
    println!("  Email:   {}", data["contact"]["email"].as_str().unwrap_or("-"));
    println!("  Phone:   {}", data["contact"]["phone"].as_str().unwrap_or("-"));
    println!("  Address: {}", data["contact"]["address"].as_str().unwrap_or("-"));

    if let Some(notes) = data["notes"].as_str().filter(|n| !n.is_empty()) {
        println!();
        println!("Notes");
        println!("  {}", notes);
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
