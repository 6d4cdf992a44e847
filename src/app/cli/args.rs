//! Command-line arguments for the MeetMii client harness

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Global arguments plus one client operation
#[derive(Parser, Debug, Clone)]
#[command(name = "meetmii")]
#[command(about = "MeetMii client: shareable profiles, QR links and scan analytics")]
#[command(version)]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true, value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", global = true, value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Force colored output
    #[arg(long = "color", global = true)]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true, conflicts_with = "color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a new MeetMii account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Log in and print the access token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Show the public profile for a username
    Profile { username: String },

    /// Create or update your own profile (requires a token)
    Edit {
        /// Access token; falls back to the configured token
        #[arg(long)]
        token: Option<String>,
        #[arg(long)]
        display_name: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        instagram: Option<String>,
        #[arg(long)]
        snapchat: Option<String>,
        #[arg(long)]
        linkedin: Option<String>,
        #[arg(long)]
        twitter: Option<String>,
        #[arg(long)]
        tiktok: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        website: Option<String>,
        /// Switch professional mode on or off
        #[arg(long, value_name = "BOOL")]
        professional: Option<bool>,
    },

    /// Print the QR code image URL for a username
    Qr { username: String },

    /// Show scan statistics for a username
    Stats { username: String },

    /// Resolve decoded QR payloads as one scan session
    ///
    /// Payloads stand in for camera frames and are processed in order;
    /// at most one resolves per session.
    Scan {
        /// Decoded payload strings, in decode order
        #[arg(required = true)]
        payloads: Vec<String>,

        /// Fetch the resolved profile and record the scan remotely
        #[arg(long)]
        lookup: bool,
    },
}
