pub mod config;
pub mod handles;

pub use config::CanvasConfig;
pub use handles::{Handles, PointId};

use kurbo::Point;

/// Combined application state
pub struct AppState {
    pub handles: Handles,
    /// Handle under the cursor, if any
    pub hover: Option<PointId>,
    /// Handle currently being dragged, if any
    pub drag: Option<PointId>,
    /// Draw the bisector, tangent rays and full fillet circle
    pub show_construction: bool,
    pub config: CanvasConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            handles: Handles::default(),
            hover: None,
            drag: None,
            show_construction: true,
            config: CanvasConfig::default(),
        }
    }
}

impl AppState {
    /// Route a pointer position: moves the dragged handle, otherwise
    /// refreshes the hover state.
    pub fn pointer_moved(&mut self, pos: Point) {
        if let Some(id) = self.drag {
            self.handles.set(id, pos);
            self.hover = Some(id);
        } else {
            self.hover = self.handles.hit_test(pos, self.config.pick_radius);
        }
    }

    /// Start dragging whatever is under the cursor.
    pub fn begin_drag(&mut self) {
        self.drag = self.hover;
        if let Some(id) = self.drag {
            tracing::debug!("drag start: {}", id.label());
        }
    }

    pub fn end_drag(&mut self) {
        if let Some(id) = self.drag.take() {
            tracing::debug!("drag end: {}", id.label());
        }
    }

    /// Restore the startup layout.
    pub fn reset(&mut self) {
        self.handles = Handles::default();
        self.hover = None;
        self.drag = None;
    }
}
