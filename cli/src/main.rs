use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use labellens_core::domain::analysis::ports::AnalysisService;
use labellens_core::domain::common::services::Service;
use labellens_core::domain::common::{DEFAULT_GROQ_MODEL, LabelLensConfig, LlmConfig};
use labellens_core::domain::profile::entities::ProfileType;
use labellens_core::domain::profile::registry;
use labellens_core::domain::profile::value_objects::UserProfile;
use labellens_core::domain::report::{ReportFormat, generate_report, health_score};
use labellens_core::infrastructure::llm::GroqSemanticAnalyzer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Plain,
    Json,
}

/// Profile-aware food label analysis.
#[derive(Debug, Parser)]
#[command(name = "labellens", version)]
struct Args {
    /// Raw ingredient list; read from stdin when omitted
    ingredients: Option<String>,

    /// Active health profile tags (repeatable); see --list-profiles
    #[arg(short, long = "profile", value_name = "PROFILE")]
    profiles: Vec<ProfileType>,

    /// Custom restriction strings, e.g. "Histamine: avoid [aged cheese]"
    #[arg(long = "restrict", value_name = "RESTRICTION")]
    restrictions: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Groq model name
    #[arg(long, env = "GROQ_MODEL", default_value = DEFAULT_GROQ_MODEL)]
    model: String,

    /// List supported health profiles and exit
    #[arg(long)]
    list_profiles: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.list_profiles {
        print_profiles();
        return Ok(());
    }

    let ingredients = match args.ingredients {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read ingredients from stdin")?;
            buffer
        }
    };

    let api_key = args
        .api_key
        .context("Groq API key not found. Set GROQ_API_KEY or pass --api-key.")?;

    let user_profile = UserProfile {
        active_profiles: args.profiles,
        custom_restrictions: args.restrictions,
        ..UserProfile::default()
    };

    tracing::debug!(
        profiles = user_profile.active_profiles.len(),
        "starting analysis"
    );

    let config = LabelLensConfig {
        llm: LlmConfig::new(api_key, args.model),
    };

    let analyzer = GroqSemanticAnalyzer::new(config.llm);
    let service = Service::new(analyzer);
    let result = service.analyze_ingredients(&ingredients, &user_profile).await;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Markdown => {
            println!("{}", generate_report(&result, ReportFormat::Markdown));
            print_score(&result);
        }
        OutputFormat::Plain => {
            println!("{}", generate_report(&result, ReportFormat::Plain));
            print_score(&result);
        }
    }

    Ok(())
}

fn print_score(result: &labellens_core::domain::analysis::entities::AnalysisResult) {
    if result.error {
        return;
    }
    let score = health_score(result);
    println!(
        "\nHealth Score: {} ({}) - {}",
        score.score, score.grade, score.label
    );
}

fn print_profiles() {
    let mut profiles: Vec<_> = registry::available_profiles().into_iter().collect();
    profiles.sort_by_key(|(_, pt)| pt.as_str());

    println!("Supported health profiles:\n");
    for (display_name, profile_type) in profiles {
        let profile = registry::lookup(profile_type);
        println!(
            "  {:<22} {} - {}",
            profile_type.as_str(),
            display_name,
            profile.description
        );
    }
}
