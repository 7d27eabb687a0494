use anyhow::Result;
use clap::Parser;
use upto_cli::report::render_suggestions;
use upto_cli::UptoClient;

/// Search trails through a running upto server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// upto server URL
    #[arg(long, env = "UPTO_SERVER_URL", default_value = "http://localhost:3001")]
    url: String,

    /// Trail name to look for
    title: String,

    /// Activity: hiking, cycling, winter-sports, trail-running
    #[arg(long = "type", default_value = "hiking")]
    activity_type: String,

    /// Free-text location hint, e.g. "North Bend, Washington"
    #[arg(long)]
    location: Option<String>,

    /// Print raw JSON suggestions
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    upto_cli::init_tracing();
    let args = Args::parse();
    let client = UptoClient::new(args.url.as_str());

    let results = client
        .search_trails(&args.title, &args.activity_type, args.location.as_deref())
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results.suggestions)?);
        return Ok(());
    }

    if let Some(message) = &results.message {
        println!("{}", message);
    }
    print!("{}", render_suggestions(&results.suggestions));

    Ok(())
}
