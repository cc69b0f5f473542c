mod error;

pub mod app;
pub mod input;
pub mod logger;
pub mod opengl;
pub mod render;
pub mod time;

pub use app::{App, AppConfig, Frame, GlInfo, Scene};
pub use error::*;

#[macro_use]
extern crate log;
extern crate gl;
