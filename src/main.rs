use clap::Parser;
use notilog::app;

fn main() -> anyhow::Result<()> {
    let config = app::Config::parse();
    app::run(config)
}
