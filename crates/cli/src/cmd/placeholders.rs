use serde_json::json;

use super::load_or_exit;
use crate::PlaceholdersArgs;

pub fn run(args: &PlaceholdersArgs) {
    let prompt = load_or_exit(&args.file, args.meta);
    let info = prompt.prompt().info();

    if args.json {
        let output = json!({
            "count": info.count,
            "names": info.names,
            "has_positional": info.has_positional,
            "has_named": info.has_named,
            "is_mixed": info.is_mixed,
        });
        println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        return;
    }

    if info.names.is_empty() {
        println!("(no placeholders)");
        return;
    }
    for name in &info.names {
        if name.is_empty() {
            println!("{{}}");
        } else {
            println!("{name}");
        }
    }
    println!("-- {} placeholders --", info.count);
}
