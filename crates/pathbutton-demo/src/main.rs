//! Demo application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting PathButton demo");

    if let Err(e) = pollster::block_on(pathbutton_demo::App::run()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
