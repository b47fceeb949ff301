//! Collapsed/expanded state of the sidebar.

/// Sidebar state, driven by the viewport and the toggle button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub collapsed: bool,
    breakpoint_px: f64,
}

impl SidebarState {
    /// Initial state for a viewport `width_px` wide.
    pub fn new(width_px: f64, breakpoint_px: f64) -> Self {
        Self {
            collapsed: width_px < breakpoint_px,
            breakpoint_px,
        }
    }

    /// Narrow viewports force the sidebar closed; widening leaves it alone.
    pub fn on_resize(&mut self, width_px: f64) {
        if width_px < self.breakpoint_px {
            self.collapsed = true;
        }
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }
}
