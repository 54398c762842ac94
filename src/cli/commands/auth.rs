use clap::Subcommand;
use inquire::Password;
use serde_json::json;

use crate::cli::utils::{output_error, output_success};
use crate::cli::{AppContext, OutputFormat};
use crate::session::{MockAuthenticator, RegistrationRequest};

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Login as the site administrator")]
    Login {
        #[arg(help = "Email address")]
        email: String,
        #[arg(long, help = "Password (will prompt if not provided)")]
        password: Option<String>,
    },

    #[command(about = "Logout and forget the stored session")]
    Logout,

    #[command(about = "Show current authentication status")]
    Status,

    #[command(about = "Request access to manage portfolio content")]
    Register {
        #[arg(help = "Full name")]
        name: String,
        #[arg(help = "Email address")]
        email: String,
        #[arg(long, help = "Password (will prompt if not provided)")]
        password: Option<String>,
        #[arg(long, help = "Password confirmation (will prompt if not provided)")]
        confirm_password: Option<String>,
    },
}

fn prompt_secret(label: &str, provided: Option<String>) -> anyhow::Result<String> {
    match provided {
        Some(secret) => Ok(secret),
        None => Ok(Password::new(label).without_confirmation().prompt()?),
    }
}

pub fn handle(ctx: &AppContext, cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { email, password } => {
            let password = prompt_secret("Password:", password)?;

            if !ctx.session.login(&email, &password) {
                let hint = MockAuthenticator::new().hint();
                output_error(&output_format, &hint, Some("INVALID_CREDENTIALS"))?;
                anyhow::bail!("login failed for {}", email);
            }

            output_success(
                &output_format,
                &format!("Logged in as {}", email),
                ctx.session.current_user().map(|s| json!({ "user": s })),
            )
        }
        AuthCommands::Logout => {
            let previous = ctx.session.current_user();
            ctx.session.logout();

            match previous {
                Some(session) => output_success(&output_format, &format!("Logged out {}", session.email), None),
                None => output_success(&output_format, "No active session", None),
            }
        }
        AuthCommands::Status => match ctx.session.current_user() {
            Some(session) => output_success(
                &output_format,
                &format!("Logged in as {} ({})", session.email, session.role),
                Some(json!({ "authenticated": true, "user": session })),
            ),
            None => output_success(
                &output_format,
                "Not logged in",
                Some(json!({ "authenticated": false, "user": null })),
            ),
        },
        AuthCommands::Register {
            name,
            email,
            password,
            confirm_password,
        } => {
            let password = prompt_secret("Password:", password)?;
            let confirm_password = prompt_secret("Confirm Password:", confirm_password)?;
            let request = RegistrationRequest {
                name,
                email,
                password,
                confirm_password,
            };

            if let Err(e) = request.validate() {
                output_error(&output_format, &e.to_string(), Some("INVALID_REGISTRATION"))?;
                anyhow::bail!(e);
            }

            ctx.session.register(&request);
            output_success(
                &output_format,
                &format!("Access request for {} submitted", request.email),
                Some(json!({ "request": request, "approved": false })),
            )
        }
    }
}
