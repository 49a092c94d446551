//! Headless simulated run command implementation.

use anyhow::Result;
use testdash_core::traits::TestRunner;
use testdash_core::types::{LogEntry, TestCatalog};
use testdash_runner::SimulatedRunner;
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::SimulateArgs;

pub async fn run(args: SimulateArgs) -> Result<()> {
    let catalog = TestCatalog::builtin();
    if !catalog.contains(&args.test) {
        anyhow::bail!(
            "Unknown test '{}'. Run `testdash tests` to list available tests.",
            args.test
        );
    }

    let (entries_tx, mut entries_rx) = mpsc::unbounded_channel();
    let runner = SimulatedRunner::new(entries_tx);
    let run_id = runner.start(&args.test)?;
    info!("Simulated run {} started", run_id);

    let mut entries: Vec<LogEntry> = Vec::with_capacity(SimulatedRunner::STEP_COUNT);
    while entries.len() < SimulatedRunner::STEP_COUNT {
        match entries_rx.recv().await {
            Some(entry) => {
                if args.output != "json" {
                    println!(
                        "{}  {:<7} {:<10} {}",
                        entry.time,
                        entry.level.to_string(),
                        entry.step,
                        entry.message
                    );
                }
                entries.push(entry);
            }
            None => break,
        }
    }

    if args.output == "json" {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    }

    if let Some(save_path) = &args.save {
        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(save_path, json)?;
        info!("Entries saved to {:?}", save_path);
    }

    Ok(())
}
