mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::controllers::demo::HeadlessDemoController;
pub use crate::controllers::demo::scene::draw_demo_scene;
pub use crate::controllers::interactive::{Canvas, EventSource, RenderLoop, ShapeCanvas};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::data::draw_color::DrawColor;
pub use crate::core::data::frame_buffer::FrameBuffer;
pub use crate::core::data::input_event::InputEvent;
pub use crate::core::data::loop_state::LoopState;
pub use crate::core::data::point::Point;
pub use crate::core::data::rect::Rect;
pub use crate::core::data::window_size::WindowSize;
pub use crate::input::scripted::ScriptedEventSource;
pub use crate::presenters::buffer::canvas::BufferCanvas;
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::{RunGuiCommand, SetupError};
