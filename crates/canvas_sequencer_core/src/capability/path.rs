//! Path-building recording surface.
//!
//! Path recordings expose no properties.

use crate::capability::capability_table;

capability_table! {
    /// Methods a path recording exposes.
    pub enum PathMethod in PATH_METHODS {
        Rect => "rect",
    }
}

/// Returns the recordable path method names.
pub fn supported_methods() -> &'static [&'static str] {
    PATH_METHODS
}

/// Returns the recordable path property names (none).
pub fn supported_properties() -> &'static [&'static str] {
    &[]
}

#[cfg(test)]
mod tests {
    use super::{supported_methods, supported_properties, PathMethod};

    #[test]
    fn exposes_rect_only() {
        assert_eq!(supported_methods(), &["rect"]);
        assert!(supported_properties().is_empty());
        assert_eq!(PathMethod::parse("rect"), Some(PathMethod::Rect));
        assert_eq!(PathMethod::parse("moveTo"), None);
    }
}
