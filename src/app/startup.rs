//! Application startup

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;

use crate::app::cli::{Args, Config};
use crate::app::commands;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::notifications::api::{get_notification_service, Event, SystemEvent, SystemEventType};

/// Initialize the client and run the requested operation
pub async fn startup() -> ExitCode {
    let args = Args::parse();

    let config = Config::load(args.config_file.clone()).await;

    // CLI flags win over config file values
    let log_level = args.log_level.clone().or(config.log_level.clone());
    let log_format = args.log_format.clone().or(config.log_format.clone());
    let log_file = args.log_file.clone().or(config.log_file.clone());
    let use_color = if args.no_color {
        false
    } else if args.color {
        true
    } else {
        config.color.unwrap_or_else(|| std::io::stdout().is_terminal())
    };

    if let Err(e) = init_logging(
        log_level.as_deref(),
        log_format.as_deref(),
        log_file.as_deref().and_then(|p| p.to_str()),
        use_color,
    ) {
        eprintln!("Error initialising logging: {e}");
        return ExitCode::FAILURE;
    }

    log::debug!(
        "MeetMii client starting (built {} / {})",
        crate::BUILD_TIME,
        crate::GIT_HASH
    );

    {
        let mut manager = get_notification_service().await;
        let _ = manager.publish(Event::System(SystemEvent::new(SystemEventType::Startup)));
    }

    let exit = match commands::run(args.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error_with_context(&e, "Command failed");
            ExitCode::FAILURE
        }
    };

    {
        let mut manager = get_notification_service().await;
        let _ = manager.publish(Event::System(SystemEvent::new(SystemEventType::Shutdown)));
    }

    exit
}
