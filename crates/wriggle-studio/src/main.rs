use anyhow::Result;
use winit::dpi::LogicalSize;

use wriggle_engine::device::GpuInit;
use wriggle_engine::logging::{init_logging, LoggingConfig};
use wriggle_engine::window::{Runtime, RuntimeConfig};

mod app;

use app::StudioApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    log::info!("draw with the mouse; +/- adjusts thickness, space clears, escape quits");

    let config = RuntimeConfig {
        title: "wriggle".to_string(),
        initial_size: LogicalSize::new(1024.0, 768.0),
    };

    Runtime::run(config, GpuInit::default(), StudioApp::new())
}
