use docforge_core::{Document, Template};
use schemars::schema_for;

fn main() {
    let contracts = serde_json::json!({
        "template": schema_for!(Template),
        "document": schema_for!(Document),
    });
    let json = serde_json::to_string_pretty(&contracts).expect("serialize json schema");
    println!("{json}");
}
