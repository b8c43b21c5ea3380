use anyhow::Result;
use retroboy::RunConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = RunConfig::from_args(std::env::args().skip(1))?;
    log::info!(
        "Running '{}' for {} frames",
        config.rom_path.display(),
        config.frames
    );

    retroboy::run(&config)?;
    Ok(())
}
