use clap::Parser;

use advocate_directory::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::parse();
    advocate_directory::init_tracing();
    advocate_directory::run(settings).await
}
