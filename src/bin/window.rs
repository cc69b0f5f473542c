use gl_tutorials::{logger, App, AppConfig, Frame, Scene};
use log::info;

/// Nothing to draw, the window is only cleared.
struct EmptyScene;

impl Scene for EmptyScene {
    fn draw(&mut self, _frame: &Frame) -> gl_tutorials::Result<()> {
        Ok(())
    }
}

impl Drop for EmptyScene {
    fn drop(&mut self) {
        info!("Goodbye Window..");
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let app = App::new(AppConfig::new("Window & App Defaults Example"))?;
    info!("Hello Window!");

    app.run(EmptyScene)
}
