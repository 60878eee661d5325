use anyhow::Result;
use tracing_subscriber::EnvFilter;
use vetdesk::commands::Cli;

fn main() -> Result<()> {
    // Structured logs only show up when RUST_LOG asks for them; normal
    // runs keep the console clean for the interactive prompts.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    Cli::menu()
}
