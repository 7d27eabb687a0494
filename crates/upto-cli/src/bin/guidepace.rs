use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use upto_cli::report::render_estimate;
use upto_cli::UptoClient;
use upto_core::{demo_route, estimate_route, ActivityType, PaceFactors, RouteData, Season};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Activity {
    Hiking,
    Climbing,
    Skiing,
    Other,
}

impl From<Activity> for ActivityType {
    fn from(activity: Activity) -> Self {
        match activity {
            Activity::Hiking => ActivityType::Hiking,
            Activity::Climbing => ActivityType::Climbing,
            Activity::Skiing => ActivityType::Skiing,
            Activity::Other => ActivityType::Other,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SeasonArg {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl From<SeasonArg> for Season {
    fn from(season: SeasonArg) -> Self {
        match season {
            SeasonArg::Spring => Season::Spring,
            SeasonArg::Summer => Season::Summer,
            SeasonArg::Fall => Season::Fall,
            SeasonArg::Winter => Season::Winter,
        }
    }
}

/// Estimate travel time and start times for a route.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Route JSON file (same shape as the web client's route data)
    #[arg(long, conflicts_with_all = ["distance", "demo"])]
    route: Option<PathBuf>,

    /// Use the built-in demo climb
    #[arg(long, conflicts_with = "distance")]
    demo: bool,

    /// Distance in km
    #[arg(long)]
    distance: Option<f64>,

    /// Elevation gain in m
    #[arg(long, default_value_t = 0.0)]
    gain: f64,

    /// Elevation loss in m (0 = derive from gain)
    #[arg(long, default_value_t = 0.0)]
    loss: f64,

    #[arg(long, value_enum, default_value_t = Activity::Hiking)]
    activity: Activity,

    /// Climbing grade, e.g. 5.7 or 5.10a
    #[arg(long)]
    grade: Option<String>,

    #[arg(long)]
    pitches: Option<u32>,

    #[arg(long, value_enum)]
    season: Option<SeasonArg>,

    #[arg(long, default_value_t = 1.0)]
    fitness: f64,

    #[arg(long, default_value_t = 1.0)]
    weather: f64,

    #[arg(long, default_value_t = 1.0)]
    party_size: f64,

    #[arg(long, default_value_t = 1.0)]
    pack_weight: f64,

    #[arg(long, default_value_t = 1.0)]
    experience: f64,

    /// Ask a running upto server instead of estimating locally
    #[arg(long, env = "UPTO_SERVER_URL")]
    server: Option<String>,

    /// Print the estimate as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn route_data(&self) -> Result<RouteData> {
        if self.demo {
            return Ok(demo_route());
        }
        if let Some(path) = &self.route {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            return serde_json::from_str(&raw)
                .with_context(|| format!("Invalid route JSON in {}", path.display()));
        }
        let Some(distance) = self.distance else {
            bail!("Provide --distance, --route <file> or --demo");
        };
        Ok(RouteData {
            distance,
            elevation_gain: self.gain,
            elevation_loss: self.loss,
            activity_type: self.activity.into(),
            climbing_grade: self.grade.clone(),
            number_of_pitches: self.pitches,
            route_description: None,
            season: self.season.map(Season::from),
        })
    }

    fn pace_factors(&self) -> PaceFactors {
        PaceFactors {
            fitness: self.fitness,
            weather: self.weather,
            party_size: self.party_size,
            pack_weight: self.pack_weight,
            experience: self.experience,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    upto_cli::init_tracing();
    let args = Args::parse();

    let route = args.route_data()?;
    let factors = args.pace_factors();

    let estimate = match &args.server {
        Some(url) => {
            tracing::info!("Requesting estimate from {}", url);
            UptoClient::new(url.as_str()).estimate(&route, &factors).await?
        }
        None => estimate_route(&route, &factors)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        print!("{}", render_estimate(&estimate));
    }

    Ok(())
}
