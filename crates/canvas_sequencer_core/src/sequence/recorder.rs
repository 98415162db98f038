//! Recording entry points generated from the capability tables.
//!
//! Every typed method (`fill_rect`, `set_line_width`, ...) funnels into one
//! private push owned by the implementing sequence. The dynamic `record` and
//! `get` entry points look names up in the same static tables.

use crate::capability::canvas::{CanvasInstruction, CanvasMethod, CanvasProperty};
use crate::capability::path::PathMethod;
use crate::error::{SequenceError, SequenceResult};
use crate::model::argument::{Argument, AtomArgument};
use crate::model::atom::{Atom, CanvasAtom, PathAtom};
use serde_json::Value;

pub(crate) mod sealed {
    use crate::model::atom::{CanvasAtom, PathAtom};

    pub trait CanvasSink {
        fn push_atom(&mut self, atom: CanvasAtom);
    }

    pub trait PathSink {
        fn push_atom(&mut self, atom: PathAtom);
    }
}

macro_rules! canvas_methods {
    ($($fn_name:ident => $method:ident,)*) => {
        $(
            #[doc = concat!("Records a [`CanvasMethod::", stringify!($method), "`] call.")]
            fn $fn_name(&mut self, arguments: Vec<Argument>) {
                self.call(CanvasMethod::$method, arguments);
            }
        )*
    };
}

macro_rules! canvas_setters {
    ($($fn_name:ident => $property:ident,)*) => {
        $(
            #[doc = concat!("Records an assignment to [`CanvasProperty::", stringify!($property), "`].")]
            fn $fn_name(&mut self, value: impl Into<Value>) {
                self.assign(CanvasProperty::$property, value);
            }
        )*
    };
}

/// Recording surface of the drawing flavor.
///
/// Recording calls have no return value: the real result only exists when
/// the sequence is replayed on a live context. Properties are write-only.
pub trait CanvasRecorder: sealed::CanvasSink {
    /// Appends a method atom.
    fn call(&mut self, method: CanvasMethod, arguments: Vec<Argument>) {
        let atom: CanvasAtom = Atom::method(method.as_str(), arguments);
        self.push_atom(atom);
    }

    /// Appends a property atom.
    fn assign(&mut self, property: CanvasProperty, value: impl Into<Value>) {
        let atom: CanvasAtom = Atom::property(property.as_str(), value.into());
        self.push_atom(atom);
    }

    /// Appends the atom matching a wire name from the canvas table.
    ///
    /// For properties the first argument is the assigned value.
    ///
    /// # Errors
    /// - `UnknownInstruction` when `name` is not in the canvas table.
    /// - `MissingPropertyValue` when a property receives no argument.
    fn record(&mut self, name: &str, arguments: Vec<Argument>) -> SequenceResult<()> {
        let instruction =
            CanvasInstruction::lookup(name).ok_or_else(|| SequenceError::UnknownInstruction {
                surface: "canvas",
                instruction: name.to_string(),
            })?;
        let atom = Atom::from_parts(instruction.kind(), instruction.as_str(), arguments)?;
        self.push_atom(atom);
        Ok(())
    }

    /// Reads a property through the recording surface. Always fails.
    ///
    /// # Errors
    /// - `WriteOnlyProperty` for every canvas property.
    /// - `UnknownInstruction` for any other name.
    fn get(&self, name: &str) -> SequenceResult<Value> {
        match CanvasInstruction::lookup(name) {
            Some(CanvasInstruction::Property(property)) => Err(
                SequenceError::WriteOnlyProperty(property.as_str().to_string()),
            ),
            _ => Err(SequenceError::UnknownInstruction {
                surface: "canvas property",
                instruction: name.to_string(),
            }),
        }
    }

    canvas_methods! {
        add_hit_region => AddHitRegion,
        arc => Arc,
        arc_to => ArcTo,
        begin_path => BeginPath,
        bezier_curve_to => BezierCurveTo,
        clear_hit_regions => ClearHitRegions,
        clear_rect => ClearRect,
        clip => Clip,
        close_path => ClosePath,
        draw_focus_if_needed => DrawFocusIfNeeded,
        draw_image => DrawImage,
        ellipse => Ellipse,
        fill => Fill,
        fill_rect => FillRect,
        fill_text => FillText,
        line_to => LineTo,
        move_to => MoveTo,
        put_image_data => PutImageData,
        quadratic_curve_to => QuadraticCurveTo,
        rect => Rect,
        remove_hit_region => RemoveHitRegion,
        reset_transform => ResetTransform,
        restore => Restore,
        rotate => Rotate,
        save => Save,
        scale => Scale,
        scroll_path_into_view => ScrollPathIntoView,
        set_line_dash => SetLineDash,
        set_transform => SetTransform,
        stroke => Stroke,
        stroke_rect => StrokeRect,
        stroke_text => StrokeText,
        transform => Transform,
        translate => Translate,
    }

    canvas_setters! {
        set_direction => Direction,
        set_fill_style => FillStyle,
        set_filter => Filter,
        set_font => Font,
        set_global_alpha => GlobalAlpha,
        set_global_composite_operation => GlobalCompositeOperation,
        set_image_smoothing_enabled => ImageSmoothingEnabled,
        set_image_smoothing_quality => ImageSmoothingQuality,
        set_line_cap => LineCap,
        set_line_dash_offset => LineDashOffset,
        set_line_join => LineJoin,
        set_line_width => LineWidth,
        set_miter_limit => MiterLimit,
        set_shadow_blur => ShadowBlur,
        set_shadow_color => ShadowColor,
        set_shadow_offset_x => ShadowOffsetX,
        set_shadow_offset_y => ShadowOffsetY,
        set_stroke_style => StrokeStyle,
        set_text_align => TextAlign,
        set_text_baseline => TextBaseline,
    }
}

/// Recording surface of the path-only flavor.
///
/// Path recordings hold plain values only; an embedded path passed here is
/// stored in its serialized form.
pub trait PathRecorder: sealed::PathSink {
    /// Appends a method atom.
    fn call(&mut self, method: PathMethod, arguments: Vec<Argument>) {
        let arguments = arguments.into_iter().map(AtomArgument::into_value).collect();
        let atom: PathAtom = Atom::method(method.as_str(), arguments);
        self.push_atom(atom);
    }

    /// Appends the atom matching a wire name from the path table.
    ///
    /// # Errors
    /// - `UnknownInstruction` when `name` is not in the path table.
    fn record(&mut self, name: &str, arguments: Vec<Argument>) -> SequenceResult<()> {
        let method = PathMethod::parse(name).ok_or_else(|| SequenceError::UnknownInstruction {
            surface: "path",
            instruction: name.to_string(),
        })?;
        self.call(method, arguments);
        Ok(())
    }

    /// Reads a property through the recording surface. Always fails; path
    /// recordings expose no properties.
    fn get(&self, name: &str) -> SequenceResult<Value> {
        Err(SequenceError::UnknownInstruction {
            surface: "path property",
            instruction: name.to_string(),
        })
    }

    /// Records a [`PathMethod::Rect`] call.
    fn rect(&mut self, arguments: Vec<Argument>) {
        self.call(PathMethod::Rect, arguments);
    }
}
