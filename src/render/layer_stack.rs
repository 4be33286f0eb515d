use serde::{Deserialize, Serialize};

/// Paint layers of one chart frame, listed back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    /// Body and footer backgrounds plus the selection circle.
    Background,
    /// Middle rule, value labels and dashed gridlines.
    Grid,
    /// Extra reference lines and their labels.
    Reference,
    /// Connector segments between adjacent days.
    Series,
    /// Value circles.
    Points,
    DayLabels,
    /// Footer pointer triangle.
    Pointer,
    /// Day labels re-drawn inside the selection circle.
    SelectedDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStack {
    pub layers: Vec<CanvasLayerKind>,
}

impl LayerStack {
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                CanvasLayerKind::Background,
                CanvasLayerKind::Grid,
                CanvasLayerKind::Reference,
                CanvasLayerKind::Series,
                CanvasLayerKind::Points,
                CanvasLayerKind::DayLabels,
                CanvasLayerKind::Pointer,
                CanvasLayerKind::SelectedDay,
            ],
        }
    }
}
