//! Drawing-context recording surface.

use crate::capability::capability_table;
use crate::model::atom::AtomKind;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

capability_table! {
    /// Methods a canvas recording exposes.
    pub enum CanvasMethod in CANVAS_METHODS {
        AddHitRegion => "addHitRegion",
        Arc => "arc",
        ArcTo => "arcTo",
        BeginPath => "beginPath",
        BezierCurveTo => "bezierCurveTo",
        ClearHitRegions => "clearHitRegions",
        ClearRect => "clearRect",
        Clip => "clip",
        ClosePath => "closePath",
        DrawFocusIfNeeded => "drawFocusIfNeeded",
        DrawImage => "drawImage",
        Ellipse => "ellipse",
        Fill => "fill",
        FillRect => "fillRect",
        FillText => "fillText",
        LineTo => "lineTo",
        MoveTo => "moveTo",
        PutImageData => "putImageData",
        QuadraticCurveTo => "quadraticCurveTo",
        Rect => "rect",
        RemoveHitRegion => "removeHitRegion",
        ResetTransform => "resetTransform",
        Restore => "restore",
        Rotate => "rotate",
        Save => "save",
        Scale => "scale",
        ScrollPathIntoView => "scrollPathIntoView",
        SetLineDash => "setLineDash",
        SetTransform => "setTransform",
        Stroke => "stroke",
        StrokeRect => "strokeRect",
        StrokeText => "strokeText",
        Transform => "transform",
        Translate => "translate",
    }
}

capability_table! {
    /// Write-only fields a canvas recording exposes.
    pub enum CanvasProperty in CANVAS_PROPERTIES {
        Direction => "direction",
        FillStyle => "fillStyle",
        Filter => "filter",
        Font => "font",
        GlobalAlpha => "globalAlpha",
        GlobalCompositeOperation => "globalCompositeOperation",
        ImageSmoothingEnabled => "imageSmoothingEnabled",
        ImageSmoothingQuality => "imageSmoothingQuality",
        LineCap => "lineCap",
        LineDashOffset => "lineDashOffset",
        LineJoin => "lineJoin",
        LineWidth => "lineWidth",
        MiterLimit => "miterLimit",
        ShadowBlur => "shadowBlur",
        ShadowColor => "shadowColor",
        ShadowOffsetX => "shadowOffsetX",
        ShadowOffsetY => "shadowOffsetY",
        StrokeStyle => "strokeStyle",
        TextAlign => "textAlign",
        TextBaseline => "textBaseline",
    }
}

/// A canvas recording entry point, tagged by the atom kind it appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanvasInstruction {
    Method(CanvasMethod),
    Property(CanvasProperty),
}

impl CanvasInstruction {
    /// Looks up a wire name in the canvas table.
    pub fn lookup(name: &str) -> Option<Self> {
        CANVAS_INSTRUCTIONS.get(name).copied()
    }

    pub fn kind(self) -> AtomKind {
        match self {
            Self::Method(_) => AtomKind::Method,
            Self::Property(_) => AtomKind::Property,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Method(method) => method.as_str(),
            Self::Property(property) => property.as_str(),
        }
    }
}

static CANVAS_INSTRUCTIONS: Lazy<BTreeMap<&'static str, CanvasInstruction>> = Lazy::new(|| {
    let methods = CanvasMethod::ALL
        .iter()
        .map(|&method| (method.as_str(), CanvasInstruction::Method(method)));
    let properties = CanvasProperty::ALL
        .iter()
        .map(|&property| (property.as_str(), CanvasInstruction::Property(property)));
    methods.chain(properties).collect()
});

/// Returns the recordable canvas method names.
pub fn supported_methods() -> &'static [&'static str] {
    CANVAS_METHODS
}

/// Returns the recordable canvas property names.
pub fn supported_properties() -> &'static [&'static str] {
    CANVAS_PROPERTIES
}

#[cfg(test)]
mod tests {
    use super::{
        supported_methods, supported_properties, CanvasInstruction, CanvasMethod, CanvasProperty,
    };
    use crate::model::atom::AtomKind;

    #[test]
    fn tables_have_expected_sizes() {
        assert_eq!(supported_methods().len(), 34);
        assert_eq!(supported_properties().len(), 20);
        assert_eq!(CanvasMethod::ALL.len(), supported_methods().len());
        assert_eq!(CanvasProperty::ALL.len(), supported_properties().len());
    }

    #[test]
    fn wire_names_roundtrip_through_parse() {
        for method in CanvasMethod::ALL {
            assert_eq!(CanvasMethod::parse(method.as_str()), Some(*method));
        }
        for property in CanvasProperty::ALL {
            assert_eq!(CanvasProperty::parse(property.as_str()), Some(*property));
        }
        assert_eq!(CanvasMethod::parse("FillRect"), None);
    }

    #[test]
    fn lookup_tags_instruction_kind() {
        let fill_rect = CanvasInstruction::lookup("fillRect").expect("fillRect is recordable");
        assert_eq!(fill_rect, CanvasInstruction::Method(CanvasMethod::FillRect));
        assert_eq!(fill_rect.kind(), AtomKind::Method);

        let font = CanvasInstruction::lookup("font").expect("font is recordable");
        assert_eq!(font.kind(), AtomKind::Property);
        assert_eq!(font.as_str(), "font");

        assert_eq!(CanvasInstruction::lookup("getImageData"), None);
    }
}
