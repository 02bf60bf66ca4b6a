use std::path::Path;

use log::info;

use crate::controllers::demo::scene::draw_demo_scene;
use crate::controllers::interactive::RenderLoop;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::input_event::InputEvent;
use crate::core::data::point::Point;
use crate::core::data::window_size::WindowSize;
use crate::input::scripted::ScriptedEventSource;
use crate::presenters::buffer::canvas::BufferCanvas;

/// Runs the interactive loop over a scripted pointer session and the
/// shape showcase without a window system, capturing both frames for a
/// file presenter to write out.
pub struct HeadlessDemoController<P: FilePresenterPort> {
    presenter: P,
    pointer_frame: Option<FrameBuffer>,
    scene_frame: Option<FrameBuffer>,
}

impl<P: FilePresenterPort> HeadlessDemoController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            pointer_frame: None,
            scene_frame: None,
        }
    }

    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let window = WindowSize::new(800, 600)?;

        let script = [
            InputEvent::PointerMoved(Point { x: 100, y: 500 }),
            InputEvent::Ignored,
            InputEvent::PointerMoved(Point { x: 650, y: 120 }),
            InputEvent::PointerMoved(Point { x: 400, y: 300 }),
            InputEvent::Quit,
        ];

        info!("replaying {} scripted events", script.len());

        let mut events = ScriptedEventSource::new(script);
        let mut canvas = BufferCanvas::new(window);
        let mut render_loop = RenderLoop::new(window);

        render_loop.run(&mut events, &mut canvas);

        println!("Frames presented: {}", canvas.presented_frames());
        println!("Final draw colour: {:?}", render_loop.draw_color());

        self.pointer_frame = Some(canvas.into_frame());

        let mut scene_canvas = BufferCanvas::new(window);
        draw_demo_scene(&mut scene_canvas, window)?;
        self.scene_frame = Some(scene_canvas.into_frame());

        Ok(())
    }

    pub fn write_pointer_trace(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(frame) = &self.pointer_frame {
            self.presenter.present(frame, filepath)?;
        }

        Ok(())
    }

    pub fn write_shape_scene(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(frame) = &self.scene_frame {
            self.presenter.present(frame, filepath)?;
        }

        Ok(())
    }
}
