pub mod config;
pub mod logging;
pub mod signals;

pub use config::load_config;
pub use logging::init_logging;
pub use signals::stop_on_ctrl_c;
