//! Map-display seam: view creation, markers, and panning.
//!
//! The map widget itself is an external collaborator; the controller only
//! speaks this trait. Popup and pan parameters mirror the values the widget
//! expects rather than interpreting them.

use crate::geo::Coordinates;

/// Zoom level used when no configuration overrides it.
pub const DEFAULT_ZOOM: u8 = 13;

/// Options for a marker popup.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    /// Popup text, e.g. an icon glyph followed by the workout description.
    pub text: String,
    /// Optional CSS class stem for per-kind styling.
    pub class_name: Option<String>,
    /// Maximum popup width in pixels.
    pub max_width: u32,
    /// Minimum popup width in pixels.
    pub min_width: u32,
    /// Close this popup when another one opens.
    pub auto_close: bool,
    /// Close this popup when the map is clicked.
    pub close_on_click: bool,
}

impl MarkerPopup {
    /// Popup with the widget defaults used throughout: 100-250 px wide,
    /// stays open across other popups and map clicks.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class_name: None,
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
        }
    }

    /// Attach a CSS class to the popup.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// Options for re-centering the view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOptions {
    /// Animate the transition instead of jumping.
    pub animate: bool,
    /// Duration of the animated pan in seconds.
    pub pan_duration_secs: f32,
}

impl PanOptions {
    /// The one-second animated pan used when jumping to a workout.
    pub fn animated() -> Self {
        Self {
            animate: true,
            pan_duration_secs: 1.0,
        }
    }
}

/// Trait for map display implementations.
pub trait MapDisplay {
    /// Create the map view centered on `center` at `zoom`.
    fn create_view(&mut self, center: Coordinates, zoom: u8);

    /// Drop a marker with a popup at `coords`.
    fn add_marker(&mut self, coords: Coordinates, popup: MarkerPopup);

    /// Re-center an existing view.
    fn set_view(&mut self, center: Coordinates, zoom: u8, options: PanOptions);
}
