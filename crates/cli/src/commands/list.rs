use serde_json::json;

use crate::commands::{self, CommandResult};

pub fn run() -> CommandResult {
    let reader = match commands::catalog_reader("list") {
        Ok(reader) => reader,
        Err(result) => return result,
    };
    let runtime = match commands::build_runtime("list") {
        Ok(runtime) => runtime,
        Err(result) => return result,
    };

    match runtime.block_on(reader.fetch_all()) {
        Ok(products) => {
            let lines: Vec<String> = products
                .iter()
                .map(|product| format!("  - {}: {} ({})", product.id, product.name, product.price))
                .collect();
            let message =
                format!("catalog contains {} products:\n{}", products.len(), lines.join("\n"));
            let details = json!({ "count": products.len(), "products": products });
            CommandResult::success_with_details("list", message, details)
        }
        Err(error) => commands::catalog_failure("list", &error),
    }
}
