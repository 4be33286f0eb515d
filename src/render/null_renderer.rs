use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer: validates each frame and keeps primitive counts.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_circle_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.line_count();
        self.last_text_count = frame.text_count();
        self.last_circle_count = frame.circle_count();
        Ok(())
    }
}
