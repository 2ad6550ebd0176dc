use anyhow::{Context, Result};
use invaders_core::{GameConfig, InvadersApp};
use invaders_sdl2::App;
use invaders_sdl2::{SdlContext, SdlInitInfo};

/// Validate `config` and play it in an SDL2 window scaled by `scale`.
pub fn run(config: &GameConfig, scale: u32) -> Result<()> {
    config.validate().context("invalid game configuration")?;

    let app = InvadersApp::new(config).with_scale(scale);
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}

/// Parse the optional window scale argument.
pub fn parse_scale(arg: Option<&str>) -> Result<u32> {
    match arg {
        None => Ok(invaders_core::SCREEN_SCALE),
        Some(raw) => {
            let scale: u32 = raw
                .parse()
                .with_context(|| format!("window scale '{raw}' is not a number"))?;
            anyhow::ensure!(
                (1..=8).contains(&scale),
                "window scale must be 1-8, got {scale}"
            );
            Ok(scale)
        }
    }
}
