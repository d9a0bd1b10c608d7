use anyhow::Result;
use node_startup_core::{NodeStartupScriptGenerator, ResolutionRequest};
use std::path::Path;
use tracing::info;

use crate::utils::write_executable_script;

pub fn generate_command(request: &ResolutionRequest, output: &Path, dry_run: bool) -> Result<()> {
    let generated = NodeStartupScriptGenerator::new().generate(request)?;

    if dry_run {
        print!("{}", generated.script);
    } else {
        write_executable_script(output, &generated.script)?;
        info!(
            "Wrote startup script to {} (command source: {})",
            output.display(),
            generated.outcome.source()
        );
    }

    Ok(())
}
