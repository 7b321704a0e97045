use log::{error, info};

use portfolio_fx::{config, mount};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio effects");
    if let Err(e) = mount::start() {
        error!("Page effects disabled: {}", e);
    }
}
