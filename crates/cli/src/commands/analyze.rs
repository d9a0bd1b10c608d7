use anyhow::Result;
use node_startup_core::{NodeStartupScriptGenerator, ResolutionOutcome, ResolutionRequest};
use tracing::debug;

pub fn analyze_command(request: &ResolutionRequest, verbose: bool) -> Result<()> {
    debug!("Analyzing app at {}", request.source_path().display());

    let outcome = NodeStartupScriptGenerator::new().analyze(request)?;

    if verbose {
        println!("{}", outcome.to_json()?);
    } else {
        print_formatted_analysis(request, &outcome);
    }

    Ok(())
}

pub fn print_formatted_analysis(request: &ResolutionRequest, outcome: &ResolutionOutcome) {
    println!("🔍 Analyzing: {}", request.source_path().display());
    println!("📋 Command source: {} ({})", outcome.source(), outcome.strategy);
    if !outcome.resolved.pre_commands.is_empty() {
        println!("🔧 Setup:");
        for statement in &outcome.resolved.pre_commands {
            println!("   {statement}");
        }
    }
    println!("🚀 Command: {}", outcome.command());
}
