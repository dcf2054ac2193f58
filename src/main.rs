mod window;

use particle_shift::{Config, ViewerError};
use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> Result<(), ViewerError> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = window::App::new(config)?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
