use textprompts_core::config::ResolvedConfig;
use textprompts_core::{LoadOptions, collect_prompt_files, load_prompt};

use super::fail;
use crate::CheckArgs;

pub fn run(rc: &ResolvedConfig, args: &CheckArgs) {
    let mut opts = LoadOptions::from_config(rc);
    opts.recursive |= args.recursive;
    opts.mode = args.meta;
    if let Some(glob) = &args.glob {
        opts.glob = glob.clone();
    }
    if let Some(max) = args.max_files {
        opts.max_files = (max > 0).then_some(max);
    }

    let files = match collect_prompt_files(&args.paths, &opts) {
        Ok(files) => files,
        Err(e) => fail(&e),
    };
    if files.is_empty() {
        println!("(no prompt files found)");
        return;
    }

    let mut failed = 0;
    for file in &files {
        match load_prompt(file, opts.mode) {
            Ok(prompt) => {
                println!(
                    "OK   {} ({} placeholders)",
                    file.display(),
                    prompt.prompt().placeholders().len()
                );
            }
            Err(e) => {
                failed += 1;
                println!("FAIL {}", file.display());
                println!("     [{}] {e}", e.kind());
            }
        }
    }

    println!("-- {} checked, {} failed --", files.len(), failed);
    tracing::debug!(checked = files.len(), failed, "check finished");
    if failed > 0 {
        crate::logging::shutdown();
        std::process::exit(1);
    }
}
