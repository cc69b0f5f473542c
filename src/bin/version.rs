use gl_tutorials::{logger, App, AppConfig};
use log::info;

fn main() -> anyhow::Result<()> {
    logger::init();

    let app = App::new(AppConfig::new("OpenGL Version Example"))?;
    let info = app.gl_info();

    info!("OpenGL Vendor: {}", info.vendor);
    info!("OpenGL Renderer: {}", info.renderer);
    info!("OpenGL Version: {}", info.version);
    info!("GLSL Version: {}", info.glsl_version);

    Ok(())
}
