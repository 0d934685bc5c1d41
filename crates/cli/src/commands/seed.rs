use shopfront_catalog::{DemoCatalog, JsonFileStore, ProductStore};
use shopfront_core::config::{AppConfig, LoadOptions};

use crate::commands::{CommandResult, EXIT_CONFIG, EXIT_RUNTIME};

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "seed",
                "config_validation",
                format!("configuration issue: {error}"),
                EXIT_CONFIG,
            );
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "seed",
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                EXIT_RUNTIME,
            );
        }
    };

    let path = config.catalog.db_path.clone();
    let result = runtime.block_on(async {
        DemoCatalog::write_to(&path)
            .await
            .map_err(|error| ("seed_write", error.to_string(), 5u8))?;

        // Read back through the real store so the written document is
        // verified the way consumers will read it.
        let products = JsonFileStore::new(path.clone())
            .load_all()
            .await
            .map_err(|error| ("seed_verification", error.to_string(), 6u8))?;

        let verification = DemoCatalog::verify(&products);
        if !verification.all_present {
            let failed_checks = verification
                .checks
                .iter()
                .filter_map(|(check, passed)| (!passed).then_some(*check))
                .collect::<Vec<_>>();
            let message = if failed_checks.is_empty() {
                "Some demo catalog records failed verification".to_string()
            } else {
                format!("Demo catalog verification failed for checks: {}", failed_checks.join(", "))
            };
            return Err(("seed_verification", message, 6u8));
        }

        Ok(products)
    });

    match result {
        Ok(products) => {
            let product_lines: Vec<String> = products
                .iter()
                .map(|product| format!("  - {}: {}", product.id, product.name))
                .collect();
            let message = format!(
                "demo catalog written to `{}` ({} products):\n{}",
                path.display(),
                products.len(),
                product_lines.join("\n")
            );
            CommandResult::success("seed", message)
        }
        Err((error_class, message, exit_code)) => {
            CommandResult::failure("seed", error_class, message, exit_code)
        }
    }
}
