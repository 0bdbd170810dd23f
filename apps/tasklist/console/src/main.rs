//! TaskList console
//!
//! Interactive REPL over an in-memory task list. Logs go to stderr so stdout
//! carries only the session.

use clap::Parser;
use core_config::tracing::{LogOutput, init_tracing_to, install_color_eyre};
use domain_tasklist::{InMemoryTaskRepository, SequentialIdRegister, TaskManager};
use eyre::Result;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;

mod command;
mod config;
mod controller;

use config::Config;
use controller::Controller;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Manage projects, tasks and deadlines from the terminal")]
struct Cli {
    /// First identifier issued to projects and tasks (overrides TASKLIST_FIRST_ID)
    #[arg(long)]
    first_id: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "error")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    install_color_eyre();

    let cli = Cli::parse();
    let config = Config::from_env()?.with_first_id(cli.first_id);

    init_tracing_to(&config.environment, LogOutput::Stderr, Some(&cli.log_level));

    let register = SequentialIdRegister::from_config(&config.registers);
    let repository = InMemoryTaskRepository::with_register(Arc::new(register));
    let manager = TaskManager::console(repository);

    info!(first_id = config.registers.first_id, "Starting TaskList console");

    let mut controller = Controller::new(
        manager,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    controller.run().await?;

    info!("TaskList console finished");
    Ok(())
}
