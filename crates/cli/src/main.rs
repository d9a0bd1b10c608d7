use clap::Parser;
use node_startup::Runner;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing based on RUST_LOG env var; stdout is reserved for output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::parse();
    if let Err(err) = runner.command.execute() {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<node_startup_core::Error>()
            .map(|e| e.exit_code())
            .unwrap_or(1);
        std::process::exit(code);
    }
}
