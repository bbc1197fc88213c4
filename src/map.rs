//! Zoom control for the embedded map component.
//!
//! The map element itself is an external collaborator; this owns only the
//! clamped zoom level that gets written back to the element's `zoom`
//! attribute.

/// Widest level the map component accepts.
const MIN_ZOOM: u8 = 3;

/// Closest level the map component accepts.
const MAX_ZOOM: u8 = 20;

/// Level used when the element carries no usable `zoom` attribute.
const DEFAULT_ZOOM: u8 = 16;

/// Clamped zoom stepping for the embedded map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomControl {
    level: u8,
}

impl Default for ZoomControl {
    fn default() -> Self {
        Self {
            level: DEFAULT_ZOOM,
        }
    }
}

impl ZoomControl {
    /// Start from the element's `zoom` attribute value, falling back to the
    /// default when absent or unparsable.
    pub fn from_attribute(attr: Option<&str>) -> Self {
        let level = attr
            .and_then(|v| v.trim().parse::<u8>().ok())
            .map(|v| v.clamp(MIN_ZOOM, MAX_ZOOM))
            .unwrap_or(DEFAULT_ZOOM);
        Self { level }
    }

    /// Step closer, up to the component maximum. Returns the new level.
    pub fn zoom_in(&mut self) -> u8 {
        self.level = (self.level + 1).min(MAX_ZOOM);
        self.level
    }

    /// Step out, down to the component minimum. Returns the new level.
    pub fn zoom_out(&mut self) -> u8 {
        self.level = self.level.saturating_sub(1).max(MIN_ZOOM);
        self.level
    }

    /// Current level, as written to the element attribute.
    pub fn level(&self) -> u8 {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sixteen() {
        assert_eq!(ZoomControl::default().level(), 16);
        assert_eq!(ZoomControl::from_attribute(None).level(), 16);
        assert_eq!(ZoomControl::from_attribute(Some("not a number")).level(), 16);
    }

    #[test]
    fn parses_attribute_value() {
        assert_eq!(ZoomControl::from_attribute(Some("12")).level(), 12);
        assert_eq!(ZoomControl::from_attribute(Some(" 8 ")).level(), 8);
    }

    #[test]
    fn attribute_value_is_clamped() {
        assert_eq!(ZoomControl::from_attribute(Some("99")).level(), 20);
        assert_eq!(ZoomControl::from_attribute(Some("1")).level(), 3);
    }

    #[test]
    fn zoom_in_stops_at_max() {
        let mut zoom = ZoomControl::from_attribute(Some("19"));
        assert_eq!(zoom.zoom_in(), 20);
        assert_eq!(zoom.zoom_in(), 20);
    }

    #[test]
    fn zoom_out_stops_at_min() {
        let mut zoom = ZoomControl::from_attribute(Some("4"));
        assert_eq!(zoom.zoom_out(), 3);
        assert_eq!(zoom.zoom_out(), 3);
    }
}
