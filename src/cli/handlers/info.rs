//! Information display handlers

use crate::assistant::prompts_for;
use crate::cli::output::export_json;
use crate::cli::output::print_config;
use crate::cli::output::print_prompt_list;
use crate::AppConfig;
use crate::Result;

/// Handle config command
pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);
    Ok(())
}

/// Handle prompts command
pub fn handle_prompts_command(category: Option<&str>, export: Option<&str>) -> Result<()> {
    let list = prompts_for(category);
    print_prompt_list(&list);

    if let Some(path) = export {
        export_json(&list, path)?;
    }
    Ok(())
}
