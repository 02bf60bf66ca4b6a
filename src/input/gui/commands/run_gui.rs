use std::error::Error;
use std::fmt;

use log::info;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::RenderLoop;
use crate::core::data::window_size::{WindowSize, WindowSizeError};
use crate::input::gui::event_pump::WinitEventPump;
use crate::presenters::pixels::canvas::PixelsCanvas;

/// A window or renderer could not be created; the loop never starts.
#[derive(Debug)]
pub enum SetupError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    WindowSize(WindowSizeError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(e) => write!(f, "failed to create event loop: {}", e),
            Self::Window(e) => write!(f, "failed to create window: {}", e),
            Self::Surface(e) => write!(f, "failed to create render surface: {}", e),
            Self::WindowSize(e) => write!(f, "window has no drawable area: {}", e),
        }
    }
}

impl Error for SetupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(e) => Some(e),
            Self::Window(e) => Some(e),
            Self::Surface(e) => Some(e),
            Self::WindowSize(e) => Some(e),
        }
    }
}

/// Opens a window, then runs the interactive render loop until quit.
///
/// Setup failures surface as [`SetupError`] before the loop starts;
/// a clean quit returns `Ok`.
pub struct RunGuiCommand {
    title: String,
    width: u32,
    height: u32,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
        }
    }

    pub fn execute(&self) -> Result<(), SetupError> {
        let event_loop = EventLoop::new().map_err(SetupError::EventLoop)?;

        // Leak the window to get a 'static reference for pixels; it lives
        // for the rest of the process anyway.
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.title.as_str())
                .with_inner_size(LogicalSize::new(f64::from(self.width), f64::from(self.height)))
                .with_resizable(false)
                .build(&event_loop)
                .map_err(SetupError::Window)?,
        ));

        let size = window.inner_size();
        let window_size =
            WindowSize::new(size.width, size.height).map_err(SetupError::WindowSize)?;

        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .map_err(SetupError::Surface)?;

        info!("window ready: {}x{}", size.width, size.height);

        let mut canvas = PixelsCanvas::new(pixels);
        let mut events = WinitEventPump::new(event_loop, window.id(), window_size);
        let mut render_loop = RenderLoop::new(window_size);

        render_loop.run(&mut events, &mut canvas);

        info!("quit received, shutting down");

        Ok(())
    }
}
