use serde_json::json;

use shopfront_core::domain::product::ProductId;

use crate::commands::{self, CommandResult, EXIT_CONFIG};

pub fn run(id: &str) -> CommandResult {
    let product_id = match ProductId::new(id) {
        Ok(product_id) => product_id,
        Err(error) => {
            return CommandResult::failure("show", "invalid_id", error.to_string(), EXIT_CONFIG);
        }
    };

    let reader = match commands::catalog_reader("show") {
        Ok(reader) => reader,
        Err(result) => return result,
    };
    let runtime = match commands::build_runtime("show") {
        Ok(runtime) => runtime,
        Err(result) => return result,
    };

    match runtime.block_on(reader.fetch_by_id(&product_id)) {
        Ok(product) => {
            let message = format!("{}: {} ({})", product.id, product.name, product.price);
            CommandResult::success_with_details("show", message, json!({ "product": product }))
        }
        Err(error) => commands::catalog_failure("show", &error),
    }
}
