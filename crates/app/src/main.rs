//! Entry point for Heliscene.
//! Logging + command-line flags, then hands over to the platform loop.

mod config;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::parse_args(std::env::args().skip(1));
    log::info!(
        "Starting Heliscene. Backend: {:?}, show_fps={}, window_size={}x{}, camera={:?}, mode={:?}",
        config.backends,
        config.show_fps,
        config.width,
        config.height,
        config.camera,
        config.render_mode
    );
    log::info!(
        "Keys: arrows fly, 1-5 cameras, w/s wireframe/filled, j/l i/k axonometric angles, Esc quits"
    );

    platform::run(config)?;

    log::info!("Graceful shutdown. Bye!");
    Ok(())
}
