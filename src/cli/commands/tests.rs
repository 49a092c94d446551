//! List tests command.

use anyhow::Result;
use testdash_core::types::TestCatalog;

pub async fn run() -> Result<()> {
    let catalog = TestCatalog::builtin();

    println!("Available Tests");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for item in catalog.items() {
        println!("  {} ({})", item.name, item.id);
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", item.description);
        println!();
    }

    println!("Use `testdash simulate --test <id>` to run one locally.");

    Ok(())
}
