//! # restdeckd — restdeck daemon
//!
//! Composition root that wires the adapters together and runs the trigger
//! loop.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing`
//! - Construct the event bus, notifier and timer (adapters)
//! - Construct the action registry, injecting the port implementations
//! - Feed bus events to the virtual surface
//! - Read action ids from stdin, spawning one task per activation so a
//!   long-running sequence never blocks the next trigger
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use restdeck_adapter_notify::CommandNotifier;
use restdeck_adapter_virtual::VirtualSurface;
use restdeck_app::actions::ActionRegistry;
use restdeck_app::event_bus::InProcessEventBus;
use restdeck_app::ports::{EventPublisher, Notifier, Timer};
use restdeck_app::timer::SystemTimer;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let bus = Arc::new(InProcessEventBus::new(config.bus.capacity));
    let notifier = Arc::new(CommandNotifier::new(&config.notifier));
    let registry = Arc::new(ActionRegistry::new(
        notifier,
        Arc::clone(&bus),
        SystemTimer,
    ));

    // Render device feedback until the bus closes or we shut down.
    let surface = Arc::new(VirtualSurface::default());
    let surface_task = tokio::spawn({
        let surface = Arc::clone(&surface);
        let receiver = bus.subscribe();
        async move { surface.run(receiver).await }
    });

    eprintln!("restdeckd ready — type an action id (or `list`), ctrl-c to quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                handle_line(&registry, line.trim());
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    surface_task.abort();
    Ok(())
}

/// Dispatch one line of input: `list`, an action id, or nothing.
fn handle_line<N, P, T>(registry: &Arc<ActionRegistry<N, P, T>>, line: &str)
where
    N: Notifier + Clone + Send + Sync + 'static,
    P: EventPublisher + Clone + Send + Sync + 'static,
    T: Timer + Clone + Send + Sync + 'static,
{
    match line {
        "" => {}
        "list" => {
            for info in registry.list() {
                println!("{:<14} {:<24} {}", info.id, info.display_name, info.description);
            }
        }
        action_id => {
            let registry = Arc::clone(registry);
            let action_id = action_id.to_string();
            tokio::spawn(async move {
                if let Err(err) = registry.trigger(&action_id).await {
                    tracing::warn!(%err, "trigger failed");
                    eprintln!("{err}");
                }
            });
        }
    }
}
