use crate::core::Viewport;
use crate::error::ChartResult;

use super::{
    CanvasLayerKind, CirclePrimitive, LayerStack, LinePrimitive, PolygonPrimitive, RectPrimitive,
    TextPrimitive,
};

/// Primitives of one paint layer.
///
/// Backends paint rects, circles, polygons, lines and texts in that order,
/// restricted to `clip` when it is set.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub clip: Option<CirclePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            clip: None,
            rects: Vec::new(),
            circles: Vec::new(),
            polygons: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.circles.is_empty()
            && self.polygons.is_empty()
            && self.lines.is_empty()
            && self.texts.is_empty()
    }

    fn validate(&self) -> ChartResult<()> {
        if let Some(clip) = self.clip {
            clip.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::from_stack(viewport, LayerStack::canonical())
    }

    #[must_use]
    pub fn from_stack(viewport: Viewport, stack: LayerStack) -> Self {
        Self {
            viewport,
            layers: stack
                .layers
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }

    pub fn set_clip(&mut self, kind: CanvasLayerKind, clip: CirclePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.clip = Some(clip);
        }
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.rects.push(rect);
        }
    }

    pub fn push_circle(&mut self, kind: CanvasLayerKind, circle: CirclePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.circles.push(circle);
        }
    }

    pub fn push_polygon(&mut self, kind: CanvasLayerKind, polygon: PolygonPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.polygons.push(polygon);
        }
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.circles.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::RenderFrame;
    use crate::core::Viewport;
    use crate::render::{CanvasLayerKind, Color, LinePrimitive};

    #[test]
    fn pushes_land_in_requested_layer() {
        let mut frame = RenderFrame::new(Viewport::new(100, 100));
        assert!(frame.is_empty());
        frame.push_line(
            CanvasLayerKind::Series,
            LinePrimitive::new(0.0, 0.0, 10.0, 10.0, 1.0, Color::WHITE),
        );
        assert_eq!(frame.line_count(), 1);
        let series = frame.layer(CanvasLayerKind::Series).expect("series layer");
        assert_eq!(series.lines.len(), 1);
        assert!(frame.validate().is_ok());
    }
}
