use crate::{input::InputTracker, opengl, time::FpsCounter, time::Stopwatch};
use bitflags::bitflags;
use std::time::Duration;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        const COLOR = gl::COLOR_BUFFER_BIT;
        const DEPTH = gl::DEPTH_BUFFER_BIT;
        const STENCIL = gl::STENCIL_BUFFER_BIT;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub gl_version: (u8, u8),
    pub vsync: bool,
    pub depth_bits: u8,
    pub clear_color: [f32; 4],
    pub clear: ClearFlags,
    pub line_width: f32,
}

impl AppConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: 640,
            height: 480,
            gl_version: (4, 5),
            vsync: true,
            depth_bits: 24,
            clear_color: [0.1, 0.1, 0.1, 1.0],
            clear: ClearFlags::COLOR | ClearFlags::DEPTH,
            line_width: 3.0,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_gl_version(mut self, major: u8, minor: u8) -> Self {
        self.gl_version = (major, minor);
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn with_clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.clear_color = clear_color;
        self
    }
}

/// Per-frame state handed to [`Scene::draw`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f32,
    pub index: u64,
    pub delta: Duration,
}

impl Frame {
    pub fn new(width: u32, height: u32, index: u64, delta: Duration) -> Self {
        // Minimized windows report a zero height.
        let aspect_ratio = if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        };

        Self {
            width,
            height,
            aspect_ratio,
            index,
            delta,
        }
    }
}

pub trait Scene {
    fn draw(&mut self, frame: &Frame) -> crate::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlInfo {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
    pub glsl_version: String,
}

pub struct App {
    event_loop: EventLoop<()>,
    window: Window,
    gl_context: raw_gl_context::GlContext,
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> crate::Result<Self> {
        let event_loop = EventLoop::new();
        let window = WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64))
            .build(&event_loop)?;

        let gl_context = raw_gl_context::GlContext::create(
            &window,
            raw_gl_context::GlConfig {
                version: config.gl_version,
                profile: raw_gl_context::Profile::Core,
                red_bits: 8,
                blue_bits: 8,
                green_bits: 8,
                alpha_bits: 8,
                depth_bits: config.depth_bits,
                stencil_bits: 8,
                samples: None,
                srgb: true,
                double_buffer: true,
                vsync: config.vsync,
            },
        )
        .map_err(|err| crate::Error::Context(format!("{:?}", err)))?;
        gl_context.make_current();
        gl::load_with(|s| gl_context.get_proc_address(s) as *const _);

        let app = Self {
            event_loop,
            window,
            gl_context,
            config,
        };
        app.configure_gl()?;

        Ok(app)
    }

    fn configure_gl(&self) -> crate::Result<()> {
        // Drop anything the context creation left behind.
        unsafe { gl::GetError() };

        info!("OpenGL version string: {}", opengl::get_string(gl::VERSION));

        if opengl::debug::is_debug_context() {
            opengl::debug::install_message_callback();
        } else {
            warn!(
                "OpenGL device does not support a debug context. Error reporting will be impacted."
            );
        }

        let mut line_width_range = [1.0f32; 2];
        unsafe {
            gl::Enable(gl::DEPTH_TEST);
            gl::DepthFunc(gl::LESS);
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);

            gl::GetFloatv(gl::ALIASED_LINE_WIDTH_RANGE, line_width_range.as_mut_ptr());
            let line_width = clamp_line_width(self.config.line_width, line_width_range);
            if line_width != self.config.line_width {
                debug!(
                    "Line width {} outside supported range {:?}, using {}.",
                    self.config.line_width, line_width_range, line_width
                );
            }
            gl::LineWidth(line_width);
        }

        opengl::check_errors()
    }

    pub fn gl_info(&self) -> GlInfo {
        GlInfo {
            vendor: opengl::get_string(gl::VENDOR),
            renderer: opengl::get_string(gl::RENDERER),
            version: opengl::get_string(gl::VERSION),
            glsl_version: opengl::get_string(gl::SHADING_LANGUAGE_VERSION),
        }
    }

    /// Runs the render loop until the window closes or Escape is pressed.
    ///
    /// A failing draw call or pending GL error stops the loop and exits the process with status 1.
    pub fn run<S: Scene + 'static>(self, scene: S) -> ! {
        let Self {
            event_loop,
            window,
            gl_context,
            config,
        } = self;

        let mut scene = Some(scene);
        let mut input = InputTracker::default();
        let mut stopwatch = Stopwatch::start_new();
        let mut fps = FpsCounter::new(Duration::from_secs(1));
        let mut frame_index = 0u64;
        let mut failed = false;

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,

                    WindowEvent::KeyboardInput { input: key, .. } => {
                        if let Some(VirtualKeyCode::Escape) = input.consume_key_event(&key) {
                            if key.state == ElementState::Pressed {
                                *control_flow = ControlFlow::Exit;
                            }
                        }
                    }

                    WindowEvent::ModifiersChanged(modifiers) => input.set_modifiers(modifiers),

                    WindowEvent::MouseInput { state, button, .. } => {
                        input.consume_mouse_button(button, state)
                    }

                    WindowEvent::CursorMoved { position, .. } => input.consume_cursor(position),

                    _ => {}
                },

                Event::MainEventsCleared => {
                    let Some(scene) = scene.as_mut() else {
                        return;
                    };

                    let delta = stopwatch.restart();
                    if let Some(rate) = fps.record(delta) {
                        debug!("{:.1} FPS", rate);
                    }

                    let size = window.inner_size();
                    let frame = Frame::new(size.width, size.height, frame_index, delta);
                    frame_index += 1;

                    let [r, g, b, a] = config.clear_color;
                    unsafe {
                        gl::Viewport(0, 0, size.width as i32, size.height as i32);
                        gl::ClearColor(r, g, b, a);
                        gl::Clear(config.clear.bits());
                    }

                    match scene.draw(&frame).and_then(|_| opengl::check_errors()) {
                        Ok(()) => gl_context.swap_buffers(),
                        Err(err) => {
                            error!("Frame {} failed: {}", frame.index, err);
                            failed = true;
                            *control_flow = ControlFlow::Exit;
                        }
                    }

                    input.maintain();
                }

                Event::LoopDestroyed => {
                    // GL objects must be released while the context is still current.
                    drop(scene.take());
                    opengl::check_errors().ok();
                    info!("Closed `{}` after {} frames.", config.title, frame_index);

                    if failed {
                        std::process::exit(1);
                    }
                }

                _ => {}
            }
        })
    }
}

fn clamp_line_width(requested: f32, [min, max]: [f32; 2]) -> f32 {
    if min > max {
        return requested.max(1.0);
    }

    requested.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_match_the_demo_window() {
        let config = AppConfig::new("demo");

        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.gl_version, (4, 5));
        assert_eq!(config.clear_color, [0.1, 0.1, 0.1, 1.0]);
        assert_eq!(config.clear, ClearFlags::COLOR | ClearFlags::DEPTH);
        assert!(config.vsync);
    }

    #[test]
    fn config_builders_override_defaults() {
        let config = AppConfig::new("demo")
            .with_size(800, 600)
            .with_gl_version(3, 3)
            .with_vsync(false)
            .with_clear_color([0.0, 0.0, 0.0, 1.0]);

        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.gl_version, (3, 3));
        assert!(!config.vsync);
        assert_eq!(config.clear_color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn frame_aspect_ratio_survives_minimized_windows() {
        assert_eq!(Frame::new(640, 480, 0, Duration::ZERO).aspect_ratio, 640.0 / 480.0);
        assert_eq!(Frame::new(640, 0, 0, Duration::ZERO).aspect_ratio, 1.0);
    }

    #[test]
    fn clear_flags_match_gl_bits() {
        assert_eq!(
            (ClearFlags::COLOR | ClearFlags::DEPTH).bits(),
            gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT
        );
    }

    #[test]
    fn line_width_is_clamped_to_driver_range() {
        assert_eq!(clamp_line_width(3.0, [1.0, 10.0]), 3.0);
        assert_eq!(clamp_line_width(3.0, [1.0, 1.0]), 1.0);
        assert_eq!(clamp_line_width(0.5, [1.0, 8.0]), 1.0);
        assert_eq!(clamp_line_width(3.0, [2.0, 1.0]), 3.0);
    }
}
