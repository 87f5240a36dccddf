use chrono::Local;
use textprompts_core::{Prompt, PromptMeta, save_prompt};

use super::fail;
use crate::NewArgs;

const DEFAULT_BODY: &str = "Write the prompt here. Use {name} for values filled in at format time.";

pub fn run(args: &NewArgs) {
    if args.file.exists() && !args.force {
        fail(&format!("{} already exists (use --force to overwrite)", args.file.display()));
    }

    let meta = PromptMeta {
        title: args.title.clone(),
        description: args.description.clone(),
        version: args.version.clone(),
        author: args.author.clone(),
        created: Some(Local::now().date_naive()),
        ..PromptMeta::default()
    };
    let body = args.body.as_deref().unwrap_or(DEFAULT_BODY);

    let prompt = match Prompt::new(args.file.clone(), meta, body) {
        Ok(p) => p,
        Err(e) => fail(&e),
    };
    if let Err(e) = save_prompt(&args.file, &prompt) {
        fail(&e);
    }

    println!("OK   textprompts new");
    println!("path: {}", args.file.display());
    let missing = prompt.meta().missing_required();
    if !missing.is_empty() {
        println!("fill in before strict loading: {}", missing.join(", "));
    }
}
