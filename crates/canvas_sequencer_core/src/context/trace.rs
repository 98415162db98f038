//! In-memory context that records every interaction it receives.
//!
//! `TraceContext` stands in for a real rendering surface: replaying a
//! recording against it yields the exact ordered list of calls and
//! assignments, with embedded paths captured as nested event lists. It does
//! not emulate drawing state; `save`/`restore` are recorded like any call.

use crate::context::{CanvasContext, Operand, PathContext};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// One interaction observed by a trace context.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextEvent {
    Call {
        method: String,
        arguments: Vec<TraceArgument>,
    },
    Set {
        property: String,
        value: Value,
    },
}

impl ContextEvent {
    /// Method or property name of the event.
    pub fn name(&self) -> &str {
        match self {
            Self::Call { method, .. } => method,
            Self::Set { property, .. } => property,
        }
    }
}

/// An argument as received by a trace context.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceArgument {
    Value(Value),
    /// A constructed path, shown as the events replayed onto it.
    Path(Vec<ContextEvent>),
}

impl TraceArgument {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Path(_) => None,
        }
    }

    pub fn as_path(&self) -> Option<&[ContextEvent]> {
        match self {
            Self::Value(_) => None,
            Self::Path(events) => Some(events.as_slice()),
        }
    }
}

/// Faults a trace context raises, shaped like a script runtime's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("context.{0} is not a function")]
    NotAFunction(String),
}

/// Recording canvas context.
#[derive(Debug, Clone, Default)]
pub struct TraceContext {
    events: Vec<ContextEvent>,
    fields: BTreeMap<String, Value>,
    missing: BTreeSet<String>,
    paths_created: usize,
}

impl TraceContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context on which the given methods are absent.
    ///
    /// Calling one of them (on the context or on a path it created) fails
    /// with [`TraceError::NotAFunction`].
    pub fn without_methods<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            missing: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every observed interaction, in order.
    pub fn events(&self) -> &[ContextEvent] {
        &self.events
    }

    /// Names of every observed interaction, in order.
    pub fn event_names(&self) -> Vec<&str> {
        self.events.iter().map(ContextEvent::name).collect()
    }

    /// Last value assigned to a field.
    pub fn field(&self, property: &str) -> Option<&Value> {
        self.fields.get(property)
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls(method).len()
    }

    /// Argument lists of every call to `method`, in order.
    pub fn calls(&self, method: &str) -> Vec<&[TraceArgument]> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ContextEvent::Call {
                    method: name,
                    arguments,
                } if name == method => Some(arguments.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn last_call(&self, method: &str) -> Option<&[TraceArgument]> {
        self.calls(method).pop()
    }

    /// Plain values of the last call to `method`.
    ///
    /// Returns `None` when the method was never called or received a path.
    pub fn last_call_values(&self, method: &str) -> Option<Vec<Value>> {
        self.last_call(method)?
            .iter()
            .map(|argument| argument.as_value().cloned())
            .collect()
    }

    /// Number of path objects handed out by `create_path`.
    pub fn paths_created(&self) -> usize {
        self.paths_created
    }

    /// Forgets every observed interaction and field value.
    pub fn clear(&mut self) {
        self.events.clear();
        self.fields.clear();
        self.paths_created = 0;
    }
}

impl CanvasContext for TraceContext {
    type Error = TraceError;
    type Path = TracePath;

    fn create_path(&mut self) -> Result<Self::Path, Self::Error> {
        self.paths_created += 1;
        Ok(TracePath {
            events: Vec::new(),
            missing: self.missing.clone(),
        })
    }

    fn call(
        &mut self,
        method: &str,
        arguments: Vec<Operand<'_, Self::Path>>,
    ) -> Result<(), Self::Error> {
        if self.missing.contains(method) {
            return Err(TraceError::NotAFunction(method.to_string()));
        }
        let arguments = arguments
            .into_iter()
            .map(|operand| match operand {
                Operand::Value(value) => TraceArgument::Value(value.clone()),
                Operand::Path(path) => TraceArgument::Path(path.events),
            })
            .collect();
        self.events.push(ContextEvent::Call {
            method: method.to_string(),
            arguments,
        });
        Ok(())
    }

    fn set(&mut self, property: &str, value: &Value) -> Result<(), Self::Error> {
        self.fields.insert(property.to_string(), value.clone());
        self.events.push(ContextEvent::Set {
            property: property.to_string(),
            value: value.clone(),
        });
        Ok(())
    }
}

/// Recording path object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TracePath {
    events: Vec<ContextEvent>,
    missing: BTreeSet<String>,
}

impl TracePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ContextEvent] {
        &self.events
    }
}

impl PathContext for TracePath {
    type Error = TraceError;

    fn call(&mut self, method: &str, arguments: &[Value]) -> Result<(), Self::Error> {
        if self.missing.contains(method) {
            return Err(TraceError::NotAFunction(method.to_string()));
        }
        self.events.push(ContextEvent::Call {
            method: method.to_string(),
            arguments: arguments.iter().cloned().map(TraceArgument::Value).collect(),
        });
        Ok(())
    }

    fn set(&mut self, property: &str, value: &Value) -> Result<(), Self::Error> {
        self.events.push(ContextEvent::Set {
            property: property.to_string(),
            value: value.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ContextEvent, TraceArgument, TraceContext, TraceError};
    use crate::context::{CanvasContext, Operand, PathContext};
    use serde_json::json;

    #[test]
    fn records_calls_and_fields_in_order() {
        let mut ctx = TraceContext::new();
        let x = json!(4);
        ctx.call("moveTo", vec![Operand::Value(&x), Operand::Value(&x)])
            .expect("call");
        ctx.set("lineWidth", &json!(3)).expect("set");

        assert_eq!(ctx.event_names(), vec!["moveTo", "lineWidth"]);
        assert_eq!(ctx.field("lineWidth"), Some(&json!(3)));
        assert_eq!(ctx.last_call_values("moveTo"), Some(vec![json!(4), json!(4)]));
    }

    #[test]
    fn captures_paths_as_nested_events() {
        let mut ctx = TraceContext::new();
        let mut path = ctx.create_path().expect("path");
        path.call("rect", &[json!(1), json!(2), json!(3), json!(4)])
            .expect("rect");
        ctx.call("fill", vec![Operand::Path(path)]).expect("fill");

        let arguments = ctx.last_call("fill").expect("fill recorded");
        let events = arguments[0].as_path().expect("path argument");
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], ContextEvent::Call { method, .. } if method == "rect"));
        assert_eq!(ctx.paths_created(), 1);
        assert_eq!(ctx.last_call_values("fill"), None);
    }

    #[test]
    fn missing_methods_fault_like_script_runtime() {
        let mut ctx = TraceContext::without_methods(["clip"]);
        let err = ctx.call("clip", Vec::new()).expect_err("clip is absent");
        assert_eq!(err, TraceError::NotAFunction("clip".to_string()));
        assert_eq!(err.to_string(), "context.clip is not a function");
        assert!(ctx.events().is_empty());

        let mut path = ctx.create_path().expect("path");
        assert!(path.call("clip", &[]).is_err());
    }

    #[test]
    fn save_and_restore_default_to_named_calls() {
        let mut ctx = TraceContext::new();
        ctx.save().expect("save");
        ctx.restore().expect("restore");
        assert_eq!(ctx.event_names(), vec!["save", "restore"]);
        assert_eq!(ctx.last_call("save"), Some(&[] as &[TraceArgument]));
    }
}
