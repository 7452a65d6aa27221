use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use meet_client::MeetClient;
use meet_directory::{DirectoryConfig, DirectoryController, DisplayEntry};
use meet_profile::MeetInfo;
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meet")]
#[command(about = "Find teammates in the participant directory", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Profile store base URL (overrides MEET_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Contact link base URL (overrides MEET_CONTACT_BASE)
    #[arg(long, global = true)]
    contact_base: Option<String>,

    /// Shuffle seed: the same seed gives the same browse order
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the directory in randomized order
    Browse(BrowseArgs),

    /// Search the directory by idea, vertical or first name
    Search(SearchArgs),

    /// Show or submit a participant profile
    #[command(subcommand)]
    Profile(ProfileCommands),
}

#[derive(Args)]
struct BrowseArgs {
    /// Maximum number of entries to show
    #[arg(long, short = 'n')]
    limit: Option<usize>,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SearchArgs {
    /// Search query
    query: String,

    /// Maximum number of entries to show
    #[arg(long, short = 'n')]
    limit: Option<usize>,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show a participant's submitted profile
    Show(ShowArgs),

    /// Submit a profile from a JSON file
    Submit(SubmitArgs),
}

#[derive(Args)]
struct ShowArgs {
    /// Participant username
    username: String,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SubmitArgs {
    /// Participant username
    username: String,

    /// Path to the profile JSON file
    #[arg(long)]
    file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Quiet is forced under --json so stdout stays parseable.
    let json_output = match &cli.command {
        Commands::Browse(args) => args.json,
        Commands::Search(args) => args.json,
        Commands::Profile(ProfileCommands::Show(args)) => args.json,
        Commands::Profile(ProfileCommands::Submit(_)) => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let client = match &cli.api_url {
        Some(url) => MeetClient::new(url.as_str()),
        None => MeetClient::from_env(),
    }
    .context("Failed to build HTTP client")?;

    let config = DirectoryConfig {
        contact_base: cli
            .contact_base
            .clone()
            .or_else(|| env::var("MEET_CONTACT_BASE").ok())
            .unwrap_or_else(|| client.base_url().to_string()),
        shuffle_seed: cli.seed,
    };

    match cli.command {
        Commands::Browse(args) => run_browse(client, config, args).await?,
        Commands::Search(args) => run_search(client, config, args).await?,
        Commands::Profile(ProfileCommands::Show(args)) => run_profile_show(client, args).await?,
        Commands::Profile(ProfileCommands::Submit(args)) => {
            run_profile_submit(client, args).await?
        }
    }

    Ok(())
}

/// Browse the directory in randomized order
async fn run_browse(client: MeetClient, config: DirectoryConfig, args: BrowseArgs) -> Result<()> {
    let mut directory = DirectoryController::new(client, config);
    if let Err(err) = directory.load().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    let mut entries = directory.entries();
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        eprintln!(
            "Showing {} of {} teammates",
            entries.len(),
            directory.record_count()
        );
        eprintln!();
        print_entries(&entries);
    }
    Ok(())
}

/// Search the directory by idea, vertical or first name
async fn run_search(client: MeetClient, config: DirectoryConfig, args: SearchArgs) -> Result<()> {
    let mut directory = DirectoryController::new(client, config);
    if let Err(err) = directory.load().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    directory.set_query(&args.query);
    let mut entries = directory.entries();
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        eprintln!(
            "Found {} of {} teammates for '{}'",
            entries.len(),
            directory.record_count(),
            args.query
        );
        eprintln!();
        print_entries(&entries);
    }
    Ok(())
}

fn print_entries(entries: &[DisplayEntry]) {
    for (i, entry) in entries.iter().enumerate() {
        println!("{}. {}", i + 1, entry.display_name);
        if let Some(idea) = &entry.idea {
            println!("   Idea: {idea}");
        }
        if !entry.tags.is_empty() {
            let labels: Vec<&str> = entry.tags.iter().map(|t| t.label.as_str()).collect();
            println!("   Verticals: {}", labels.join(", "));
        }
        println!("   Contact: {}", entry.contact_url);
        println!();
    }
}

/// Show a participant's submitted profile
async fn run_profile_show(client: MeetClient, args: ShowArgs) -> Result<()> {
    match client.fetch_meet_info(&args.username).await {
        Ok(Some(info)) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print_meet_info(&args.username, &info);
            }
        }
        Ok(None) => {
            if args.json {
                println!("null");
            } else {
                eprintln!("No profile submitted for '{}'", args.username);
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn print_meet_info(username: &str, info: &MeetInfo) {
    println!("Profile for {username}");
    if let Some(pronouns) = &info.pronouns {
        println!("  Pronouns: {pronouns}");
    }
    if let Some(desc) = &info.profile_desc {
        println!("  About: {desc}");
    }
    if let Some(idea) = &info.idea {
        println!("  Idea: {idea}");
    }
    if !info.verticals.is_empty() {
        println!("  Verticals: {}", info.verticals.join(", "));
    }
    if !info.skills.is_empty() {
        println!("  Skills: {}", info.skills.join(", "));
    }
    if let Some(commitment) = &info.commitment {
        println!("  Commitment: {commitment}");
    }
    if let Some(offset) = &info.timezone_offset {
        println!("  Timezone: {offset}");
    }
    for (label, link) in [
        ("GitHub", &info.github_link),
        ("Devpost", &info.devpost_link),
        ("Portfolio", &info.portfolio_link),
        ("LinkedIn", &info.linkedin_link),
    ] {
        if let Some(url) = link {
            println!("  {label}: {url}");
        }
    }
    println!(
        "  Visible in directory: {}",
        info.show_profile.unwrap_or(false)
    );
}

/// Submit a profile from a JSON file
async fn run_profile_submit(client: MeetClient, args: SubmitArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read profile from {}", args.file.display()))?;
    let info: MeetInfo = serde_json::from_str(&raw).context("Invalid profile JSON")?;

    if let Err(err) = client.submit_meet_info(&args.username, &info).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    eprintln!("Profile submitted for '{}'", args.username);
    Ok(())
}
