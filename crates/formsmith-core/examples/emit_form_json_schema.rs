use formsmith_core::form_json_schema;

fn main() {
    let schema = form_json_schema();
    let json = serde_json::to_string_pretty(&schema).expect("serialize form json schema");
    println!("{json}");
}
