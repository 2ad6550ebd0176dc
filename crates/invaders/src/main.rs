use invaders_core::GameConfig;

fn main() {
    env_logger::init();

    let arg = std::env::args().nth(1);
    let scale = match invaders::parse_scale(arg.as_deref()) {
        Ok(scale) => scale,
        Err(e) => {
            eprintln!("{e:#}\nUsage: invaders [scale]");
            std::process::exit(1);
        }
    };

    log::info!("Starting invaders at {}x scale", scale);
    if let Err(e) = invaders::run(&GameConfig::default(), scale) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
