pub mod commands;
pub mod context;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::models::ResourceKind;
use crate::sections::Section;
pub use context::AppContext;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio console - landing page sections and content management over the portfolio API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, global = true, value_name = "URL", help = "Portfolio API base URL (overrides PORTFOLIO_API_URL)")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Render the whole landing page")]
    Home,

    #[command(about = "Render a single landing page section")]
    Show {
        #[arg(value_enum, help = "Section to render")]
        section: Section,
        #[arg(long, help = "Project showcase filter (All, Web Apps, UI Components, Full Stack)")]
        category: Option<String>,
    },

    #[command(about = "Resolve a route and render its screen")]
    Open {
        #[arg(help = "Route path, e.g. /skills-manage")]
        path: String,
    },

    #[command(about = "Show the navigation links visible to the current session")]
    Nav,

    #[command(about = "Login, logout and access requests")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "List, add, edit and delete portfolio content")]
    Manage {
        #[arg(value_enum, help = "Resource collection")]
        resource: ResourceKind,
        #[command(subcommand)]
        cmd: commands::manage::ManageCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let ctx = AppContext::from_env(cli.api_url.as_deref())?;

    match cli.command {
        Commands::Home => commands::site::home(&ctx, output_format).await,
        Commands::Show { section, category } => {
            commands::site::show(&ctx, section, category.as_deref(), output_format).await
        }
        Commands::Open { path } => commands::site::open(&ctx, &path, output_format).await,
        Commands::Nav => commands::site::nav(&ctx, output_format),
        Commands::Auth { cmd } => commands::auth::handle(&ctx, cmd, output_format),
        Commands::Manage { resource, cmd } => commands::manage::handle(&ctx, resource, cmd, output_format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_manage_with_repeated_assignments() {
        let cli = Cli::try_parse_from([
            "portfolio",
            "--json",
            "manage",
            "skills",
            "add",
            "--set",
            "name=Rust",
            "--set",
            "proficiency=80",
        ])
        .unwrap();

        assert_eq!(OutputFormat::from_cli(&cli), OutputFormat::Json);
        match cli.command {
            Commands::Manage { resource, cmd } => {
                assert_eq!(resource, ResourceKind::Skills);
                assert!(matches!(
                    cmd,
                    commands::manage::ManageCommands::Add { ref set } if set.len() == 2
                ));
            }
            _ => panic!("expected manage command"),
        }
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["portfolio", "show", "projects", "--category", "Web Apps", "--api-url", "http://x/api"])
            .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://x/api"));
        assert_eq!(OutputFormat::from_cli(&cli), OutputFormat::Text);
        assert!(matches!(
            cli.command,
            Commands::Show { section: Section::Projects, category: Some(ref c) } if c == "Web Apps"
        ));
    }
}
