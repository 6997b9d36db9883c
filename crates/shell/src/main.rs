use anyhow::Context;

use storefront_cart::CartEngine;
use storefront_shell::{Shell, ShellConfig};

fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = ShellConfig::from_env();
    let inventory = config
        .load_inventory()
        .context("failed to load the product catalog")?;
    tracing::info!(products = inventory.len(), "storefront ready");

    let mut shell = Shell::new(CartEngine::new(inventory));
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell.run(stdin.lock(), stdout.lock())
}
