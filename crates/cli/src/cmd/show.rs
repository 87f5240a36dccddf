use serde_json::json;

use super::load_or_exit;
use crate::ShowArgs;

pub fn run(args: &ShowArgs) {
    let prompt = load_or_exit(&args.file, args.meta);

    if !args.json {
        println!("{}", prompt.body());
        return;
    }

    let output = json!({
        "path": prompt.path().to_string_lossy(),
        "title": prompt.title(),
        "meta": prompt.meta().to_json(),
        "placeholders": prompt.prompt().placeholders(),
        "body": prompt.body(),
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}
