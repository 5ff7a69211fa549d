//! Sliding highlight geometry for the desktop navigation bar.
//!
//! The indicator is derived state: it can be recomputed from a layout
//! snapshot at any time and is never a source of truth.
use crate::section::Section;

/// Horizontal placement of one navigation control inside its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRect {
    pub section: Section,
    pub offset: f64,
    pub width: f64,
}

/// Measured navigation layout at one instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSnapshot {
    pub container_width: f64,
    pub controls: Vec<ControlRect>,
}

impl LayoutSnapshot {
    /// Snapshot of a container that is not laid out (hidden or detached).
    #[must_use]
    pub const fn unmeasured() -> Self {
        Self {
            container_width: 0.0,
            controls: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndicatorGeometry {
    pub offset: f64,
    pub width: f64,
    pub visible: bool,
}

impl IndicatorGeometry {
    /// Hide the indicator while keeping its last placement.
    #[must_use]
    pub const fn hidden(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }
}

/// Place the indicator under the control for `selected`.
///
/// Returns `None` when nothing is measurable: the container has no width or
/// the active control was not captured.
#[must_use]
pub fn compute_indicator(snapshot: &LayoutSnapshot, selected: Section) -> Option<IndicatorGeometry> {
    if snapshot.container_width <= 0.0 {
        return None;
    }
    snapshot
        .controls
        .iter()
        .find(|control| control.section == selected)
        .map(|control| IndicatorGeometry {
            offset: control.offset,
            width: control.width,
            visible: true,
        })
}
