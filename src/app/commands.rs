//! Client operation handlers
//!
//! One handler per CLI subcommand. Handlers talk to the remote services
//! through `ApiClient` and print human-readable results; all remote
//! failures surface as `CommandError`.

use colored::Colorize;

use crate::app::cli::{Command, Config};
use crate::app::scan_flow;
use crate::core::error_handling::ContextualError;
use crate::core::validation::{self, ValidationError};
use crate::services::{ApiClient, ApiError, Profile, ProfileUpdate, ScanStats};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ContextualError for CommandError {
    fn is_user_actionable(&self) -> bool {
        match self {
            CommandError::Api(e) => e.is_user_actionable(),
            CommandError::Validation(e) => e.is_user_actionable(),
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            CommandError::Api(e) => e.user_message(),
            CommandError::Validation(e) => e.user_message(),
        }
    }
}

/// Dispatch one parsed subcommand.
pub async fn run(command: Command, config: &Config) -> Result<(), CommandError> {
    let mut client = ApiClient::new(config.endpoints());
    if let Some(token) = &config.token {
        client.set_token(token.clone());
    }

    match command {
        Command::Register {
            email,
            username,
            password,
        } => {
            validation::validate_registration(&email, &username, &password)?;
            let user = client.register(&email, &username, &password).await?;
            log::info!("Registered account id {} for '{}'", user.id, user.username);
            println!(
                "Account created: {} <{}> (joined {})",
                user.username.bold(),
                user.email,
                user.created_at.format("%Y-%m-%d")
            );
        }

        Command::Login { email, password } => {
            let token = client.login(&email, &password).await?;
            log::info!("Login succeeded for {email}");
            println!("Access token:\n{token}");
            println!(
                "{}",
                "Store it as 'token' in your meetmii.toml to stay logged in.".dimmed()
            );
        }

        Command::Profile { username } => {
            let profile = client.fetch_profile(&username).await?;
            print_profile(&profile);
        }

        Command::Edit {
            token,
            display_name,
            bio,
            instagram,
            snapchat,
            linkedin,
            twitter,
            tiktok,
            email,
            website,
            professional,
        } => {
            if let Some(token) = token {
                client.set_token(token);
            }
            let update = ProfileUpdate {
                display_name,
                bio,
                instagram,
                snapchat,
                linkedin,
                twitter,
                tiktok,
                email,
                website,
                is_professional_mode: professional,
            };
            let profile = client.update_profile(&update).await?;
            log::info!("Profile updated for '{}'", profile.username);
            print_profile(&profile);
        }

        Command::Qr { username } => {
            println!("{}", client.qr_code_url(&username));
        }

        Command::Stats { username } => {
            let stats = client.scan_stats(&username).await?;
            print_stats(&stats);
        }

        Command::Scan { payloads, lookup } => {
            let outcome = scan_flow::run_scan_session(&payloads).await;
            match &outcome.resolved {
                Some(identifier) => {
                    println!(
                        "Resolved {} from {} frame(s) ({} suppressed)",
                        identifier.to_string().bold(),
                        outcome.frames,
                        outcome.suppressed
                    );
                    if lookup {
                        let profile = scan_flow::resolve_profile(&client, identifier).await?;
                        print_profile(&profile);
                    }
                }
                None => {
                    println!(
                        "No profile link recognised in {} frame(s)",
                        outcome.frames
                    );
                }
            }
        }
    }

    Ok(())
}

fn print_profile(profile: &Profile) {
    let name = profile
        .display_name
        .as_deref()
        .unwrap_or(profile.username.as_str());
    println!("{} (@{})", name.bold(), profile.username);
    if profile.is_professional_mode {
        println!("{}", "professional mode".dimmed());
    }
    if let Some(bio) = &profile.bio {
        println!("{bio}");
    }
    for (label, value) in [
        ("instagram", &profile.instagram),
        ("snapchat", &profile.snapchat),
        ("linkedin", &profile.linkedin),
        ("twitter", &profile.twitter),
        ("tiktok", &profile.tiktok),
        ("email", &profile.email),
        ("website", &profile.website),
    ] {
        if let Some(value) = value {
            println!("  {}: {}", label.cyan(), value);
        }
    }
}

fn print_stats(stats: &ScanStats) {
    println!("Scan statistics for @{}", stats.username.bold());
    println!("  total:      {}", stats.total_scans);
    println!("  this week:  {}", stats.scans_this_week);
    println!("  this month: {}", stats.scans_this_month);
}
