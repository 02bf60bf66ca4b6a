use std::io::Write;
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = std::fs::File::create(filepath)?;
        let width = frame.size().width();
        let height = frame.size().height();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", width, height)?;
        writeln!(file, "255")?;

        // The frame stores RGBA; PPM carries RGB, so the alpha byte is dropped.
        let mut body = Vec::with_capacity(width as usize * height as usize * 3);
        for pixel in frame.data().chunks_exact(4) {
            body.extend_from_slice(&pixel[..3]);
        }
        file.write_all(&body)?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::draw_color::DrawColor;
    use crate::core::data::point::Point;
    use crate::core::data::window_size::WindowSize;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("canvas_explorer_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_present_writes_header_and_rgb_payload() {
        let size = WindowSize::new(2, 2).unwrap();
        let mut frame = FrameBuffer::new(size);
        frame
            .set_pixel(Point { x: 1, y: 0 }, DrawColor::rgb(10, 20, 30))
            .unwrap();

        let path = temp_path("header_and_payload.ppm");
        PpmFilePresenter::new().present(&frame, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(bytes.len(), header.len() + 12); // 2 * 2 * 3 bytes of RGB

        let payload = &bytes[header.len()..];
        assert_eq!(&payload[..3], &[0, 0, 0]); // (0,0) stays black
        assert_eq!(&payload[3..6], &[10, 20, 30]); // (1,0)
    }

    #[test]
    fn test_present_to_unwritable_path_fails() {
        let frame = FrameBuffer::new(WindowSize::new(1, 1).unwrap());

        let result =
            PpmFilePresenter::new().present(&frame, "/nonexistent-dir/frame.ppm");

        assert!(result.is_err());
    }
}
