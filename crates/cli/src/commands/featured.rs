use serde_json::json;

use crate::commands::{self, CommandResult};

pub fn run() -> CommandResult {
    let reader = match commands::catalog_reader("featured") {
        Ok(reader) => reader,
        Err(result) => return result,
    };
    let runtime = match commands::build_runtime("featured") {
        Ok(runtime) => runtime,
        Err(result) => return result,
    };

    match runtime.block_on(reader.fetch_featured()) {
        Ok(product) => {
            let message =
                format!("featured product is {}: {} ({})", product.id, product.name, product.price);
            CommandResult::success_with_details("featured", message, json!({ "product": product }))
        }
        Err(error) => commands::catalog_failure("featured", &error),
    }
}
