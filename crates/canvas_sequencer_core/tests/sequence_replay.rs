use canvas_sequencer_core::{
    args, CanvasRecorder, CanvasSequence, ContextEvent, PathRecorder, PathSequence, TraceArgument,
    TraceContext, TraceError,
};
use serde_json::json;

#[test]
fn replay_is_bracketed_by_one_save_and_restore() {
    let mut seq = CanvasSequence::new();
    seq.save(args![]);
    seq.fill_rect(args![0, 0, 10, 10]);
    seq.restore(args![]);

    let mut ctx = TraceContext::new();
    seq.execute(&mut ctx).expect("execute");
    assert_eq!(
        ctx.event_names(),
        vec!["save", "save", "fillRect", "restore", "restore"]
    );
}

#[test]
fn replaying_twice_repeats_every_interaction() {
    let mut seq = CanvasSequence::new();
    seq.line_to(args![1, 2]);

    let mut ctx = TraceContext::new();
    seq.execute(&mut ctx).expect("first replay");
    seq.execute(&mut ctx).expect("second replay");
    assert_eq!(ctx.call_count("lineTo"), 2);
    assert_eq!(ctx.call_count("save"), 2);
}

#[test]
fn embedded_path_is_rehydrated_into_constructed_path() {
    let mut path = PathSequence::new();
    path.rect(args![10, 20, 30, 40]);

    let mut seq = CanvasSequence::new();
    seq.set_fill_style("red");
    seq.fill(args![path]);

    let revived = CanvasSequence::from_json_str(&seq.to_json_string().expect("serialize"))
        .expect("revive");

    let mut ctx = TraceContext::new();
    revived.execute(&mut ctx).expect("execute");

    let arguments = ctx.last_call("fill").expect("fill called");
    assert_eq!(arguments.len(), 1);
    let events = arguments[0].as_path().expect("path object, not the marker");
    assert_eq!(
        events,
        &[ContextEvent::Call {
            method: "rect".to_string(),
            arguments: vec![
                TraceArgument::Value(json!(10)),
                TraceArgument::Value(json!(20)),
                TraceArgument::Value(json!(30)),
                TraceArgument::Value(json!(40)),
            ],
        }]
    );
}

#[test]
fn nested_path_keeps_trailing_arguments() {
    let mut seq = CanvasSequence::new();
    seq.record(
        "clip",
        vec![json!({ "isPath": true, "sequence": [] }).into(), "nonzero".into()],
    )
    .expect("record clip");

    let mut ctx = TraceContext::new();
    seq.execute(&mut ctx).expect("execute");

    let arguments = ctx.last_call("clip").expect("clip called");
    assert_eq!(arguments[0].as_path(), Some(&[] as &[ContextEvent]));
    assert_eq!(arguments[1].as_value(), Some(&json!("nonzero")));
}

#[test]
fn zero_argument_methods_execute() {
    let mut seq = CanvasSequence::new();
    seq.begin_path(args![]);
    seq.close_path(args![]);

    let mut ctx = TraceContext::new();
    seq.execute(&mut ctx).expect("execute");
    assert_eq!(ctx.last_call_values("beginPath"), Some(vec![]));
    assert_eq!(ctx.last_call_values("closePath"), Some(vec![]));
}

#[test]
fn downstream_fault_propagates_unchanged() {
    let mut seq = CanvasSequence::new();
    seq.move_to(args![1, 1]);
    seq.arc(args![0, 0, 5, 0, 6.28]);
    seq.line_to(args![2, 2]);

    let mut ctx = TraceContext::without_methods(["arc"]);
    let err = seq.execute(&mut ctx).expect_err("arc is missing");
    assert_eq!(err, TraceError::NotAFunction("arc".to_string()));
    assert_eq!(ctx.event_names(), vec!["save", "moveTo"]);
}

#[test]
fn fault_inside_embedded_path_propagates() {
    let mut path = PathSequence::new();
    path.rect(args![0, 0, 1, 1]);
    let mut seq = CanvasSequence::new();
    seq.fill(args![path]);

    let mut ctx = TraceContext::without_methods(["rect"]);
    let err = seq.execute(&mut ctx).expect_err("path rect is missing");
    assert_eq!(err, TraceError::NotAFunction("rect".to_string()));
    assert_eq!(ctx.call_count("fill"), 0);
}

#[test]
fn reading_properties_through_recorder_fails() {
    let mut seq = CanvasSequence::new();
    seq.set_line_width(4);

    let err = seq.get("lineWidth").expect_err("recordings are write-only");
    assert_eq!(
        err.to_string(),
        "invalid canvas sequencer interaction, cannot get lineWidth"
    );
}
