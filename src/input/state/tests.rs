use super::*;
use crate::draw::{Canvas, Snapshot, BLACK, RED, WHITE};
use crate::input::events::{ControlChange, InputEvent};
use crate::input::tool::Tool;

fn create_test_controller() -> Controller {
    Controller::with_defaults(
        Tool::Brush,
        BLACK, // stroke color
        5.0,   // brush width
        false, // fill_enabled
        WHITE, // background color
        15.0,  // arrow head length
        30.0,  // arrow head angle
    )
}

fn create_test_canvas() -> Canvas {
    Canvas::new(64, 64, WHITE).unwrap()
}

fn apply(controller: &mut Controller, canvas: &mut Canvas, events: &[InputEvent]) {
    for event in events {
        controller.handle_event(canvas, event.clone()).unwrap();
    }
}

fn pixels(canvas: &mut Canvas) -> Snapshot {
    canvas.snapshot().unwrap()
}

#[test]
fn pointer_move_without_gesture_is_a_no_op() {
    let mut controller = create_test_controller();
    let mut canvas = create_test_canvas();
    let blank = pixels(&mut canvas);

    apply(
        &mut controller,
        &mut canvas,
        &[
            InputEvent::PointerMove { x: 10.0, y: 10.0 },
            InputEvent::PointerMove { x: 50.0, y: 50.0 },
        ],
    );

    assert!(!controller.is_drawing());
    assert_eq!(pixels(&mut canvas), blank);
}

#[test]
fn click_without_movement_leaves_freehand_buffer_unchanged() {
    let mut controller = create_test_controller();
    let mut canvas = create_test_canvas();
    let blank = pixels(&mut canvas);

    apply(
        &mut controller,
        &mut canvas,
        &[
            InputEvent::PointerDown { x: 20.0, y: 20.0 },
            InputEvent::PointerUp,
        ],
    );

    assert!(!controller.is_drawing());
    assert_eq!(pixels(&mut canvas), blank);
}

#[test]
fn click_without_movement_returns_to_idle_for_every_tool() {
    for tool in [
        Tool::Brush,
        Tool::Eraser,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Ellipse,
        Tool::Triangle,
        Tool::Line,
        Tool::Arrow,
    ] {
        let mut controller = create_test_controller();
        let mut canvas = create_test_canvas();
        controller.select_tool(tool);

        apply(
            &mut controller,
            &mut canvas,
            &[
                InputEvent::PointerDown { x: 20.0, y: 20.0 },
                InputEvent::PointerUp,
            ],
        );

        assert!(!controller.is_drawing(), "{tool:?} stuck in Drawing");
    }
}

#[test]
fn brush_strokes_accumulate_and_survive_gesture_end() {
    let mut controller = create_test_controller();
    let mut canvas = create_test_canvas();
    let blank = pixels(&mut canvas);

    apply(
        &mut controller,
        &mut canvas,
        &[
            InputEvent::PointerDown { x: 10.0, y: 10.0 },
            InputEvent::PointerMove { x: 30.0, y: 30.0 },
        ],
    );
    let after_first = pixels(&mut canvas);
    assert_ne!(after_first, blank);

    apply(
        &mut controller,
        &mut canvas,
        &[InputEvent::PointerMove { x: 50.0, y: 10.0 }],
    );
    let after_second = pixels(&mut canvas);
    assert_ne!(after_second, after_first);

    // Ending the gesture commits nothing further and undoes nothing
    apply(&mut controller, &mut canvas, &[InputEvent::PointerUp]);
    assert_eq!(pixels(&mut canvas), after_second);
}

#[test]
fn eraser_paints_in_the_background_color() {
    let mut controller = create_test_controller();
    let mut canvas = create_test_canvas();
    let blank = pixels(&mut canvas);

    // Draw a brush stroke, then erase over it with a wider eraser
    apply(
        &mut controller,
        &mut canvas,
        &[
            InputEvent::PointerDown { x: 10.0, y: 32.0 },
            InputEvent::PointerMove { x: 54.0, y: 32.0 },
            InputEvent::PointerUp,
        ],
    );
    assert_ne!(pixels(&mut canvas), blank);

    controller.select_tool(Tool::Eraser);
    controller.set_brush_width(20.0);
    apply(
        &mut controller,
        &mut canvas,
        &[
            InputEvent::PointerDown { x: 10.0, y: 32.0 },
            InputEvent::PointerMove { x: 54.0, y: 32.0 },
            InputEvent::PointerUp,
        ],
    );

    // Eraser covered the stroke entirely, restoring a uniform background
    assert_eq!(pixels(&mut canvas), blank);
}

#[test]
fn shape_preview_is_idempotent_per_position() {
    let mut controller = create_test_controller();
    let mut canvas = create_test_canvas();
    controller.select_tool(Tool::Rectangle);

    apply(
        &mut controller,
        &mut canvas,
        &[
            InputEvent::PointerDown { x: 10.0, y: 10.0 },
            InputEvent::PointerMove { x: 40.0, y: 40.0 },
        ],
    );
    let first = pixels(&mut canvas);

    apply(
        &mut controller,
        &mut canvas,
        &[InputEvent::PointerMove { x: 40.0, y: 40.0 }],
    );
    assert_eq!(pixels(&mut canvas), first);
}

#[test]
fn shape_preview_replaces_itself_rather_than_accumulating() {
    let mut controller = create_test_controller();
    let mut canvas = create_test_canvas();
    controller.select_tool(Tool::Circle);

    apply(
        &mut controller,
        &mut canvas,
        &[
            InputEvent::PointerDown { x: 32.0, y: 32.0 },
            InputEvent::PointerMove { x: 40.0, y: 32.0 },
        ],
    );
    let small_circle = pixels(&mut canvas);

    // Grow the preview, then shrink back: the large frame must leave no trace
    apply(
        &mut controller,
        &mut canvas,
        &[
            InputEvent::PointerMove { x: 60.0, y: 32.0 },
            InputEvent::PointerMove { x: 40.0, y: 32.0 },
        ],
    );
    assert_eq!(pixels(&mut canvas), small_circle);
}

#[test]
fn each_shape_tool_draws_on_move() {
    for tool in [
        Tool::Rectangle,
        Tool::Circle,
        Tool::Ellipse,
        Tool::Triangle,
        Tool::Line,
        Tool::Arrow,
    ] {
        let mut controller = create_test_controller();
        let mut canvas = create_test_canvas();
        let blank = pixels(&mut canvas);
        controller.select_tool(tool);

        apply(
            &mut controller,
            &mut canvas,
            &[
                InputEvent::PointerDown { x: 15.0, y: 15.0 },
                InputEvent::PointerMove { x: 45.0, y: 40.0 },
                InputEvent::PointerUp,
            ],
        );

        assert_ne!(pixels(&mut canvas), blank, "{tool:?} drew nothing");
    }
}

#[test]
fn filled_shapes_differ_from_outlined_shapes() {
    let drag = [
        InputEvent::PointerDown { x: 10.0, y: 10.0 },
        InputEvent::PointerMove { x: 50.0, y: 50.0 },
        InputEvent::PointerUp,
    ];

    let mut outlined = create_test_controller();
    let mut outlined_canvas = create_test_canvas();
    outlined.select_tool(Tool::Rectangle);
    apply(&mut outlined, &mut outlined_canvas, &drag);

    let mut filled = create_test_controller();
    let mut filled_canvas = create_test_canvas();
    filled.select_tool(Tool::Rectangle);
    filled.set_fill_enabled(true);
    apply(&mut filled, &mut filled_canvas, &drag);

    assert_ne!(
        pixels(&mut outlined_canvas),
        pixels(&mut filled_canvas)
    );
}

#[test]
fn pointer_leave_ends_the_gesture() {
    let mut controller = create_test_controller();
    let mut canvas = create_test_canvas();

    apply(
        &mut controller,
        &mut canvas,
        &[
            InputEvent::PointerDown { x: 10.0, y: 10.0 },
            InputEvent::PointerMove { x: 20.0, y: 20.0 },
            InputEvent::PointerLeave,
        ],
    );
    assert!(!controller.is_drawing());

    // Moves after the leave are no-ops
    let settled = pixels(&mut canvas);
    apply(
        &mut controller,
        &mut canvas,
        &[InputEvent::PointerMove { x: 60.0, y: 60.0 }],
    );
    assert_eq!(pixels(&mut canvas), settled);
}

#[test]
fn pointer_down_during_gesture_keeps_the_original_anchor() {
    let events_with_spurious_down = [
        InputEvent::PointerDown { x: 10.0, y: 10.0 },
        InputEvent::PointerMove { x: 20.0, y: 20.0 },
        InputEvent::PointerDown { x: 50.0, y: 50.0 },
        InputEvent::PointerMove { x: 40.0, y: 40.0 },
        InputEvent::PointerUp,
    ];
    let clean_events = [
        InputEvent::PointerDown { x: 10.0, y: 10.0 },
        InputEvent::PointerMove { x: 40.0, y: 40.0 },
        InputEvent::PointerUp,
    ];

    let mut spurious = create_test_controller();
    let mut spurious_canvas = create_test_canvas();
    spurious.select_tool(Tool::Line);
    apply(&mut spurious, &mut spurious_canvas, &events_with_spurious_down);

    let mut clean = create_test_controller();
    let mut clean_canvas = create_test_canvas();
    clean.select_tool(Tool::Line);
    apply(&mut clean, &mut clean_canvas, &clean_events);

    assert_eq!(pixels(&mut spurious_canvas), pixels(&mut clean_canvas));
}

#[test]
fn background_change_overwrites_prior_drawing() {
    let mut controller = create_test_controller();
    let mut canvas = create_test_canvas();

    apply(
        &mut controller,
        &mut canvas,
        &[
            InputEvent::PointerDown { x: 10.0, y: 10.0 },
            InputEvent::PointerMove { x: 50.0, y: 50.0 },
            InputEvent::PointerUp,
        ],
    );

    controller.set_background_color(&mut canvas, RED).unwrap();

    let mut reference = Canvas::new(64, 64, RED).unwrap();
    assert_eq!(pixels(&mut canvas), pixels(&mut reference));
}

#[test]
fn background_change_then_clear_yields_uniform_new_background() {
    let mut controller = create_test_controller();
    let mut canvas = create_test_canvas();

    controller.set_background_color(&mut canvas, RED).unwrap();
    apply(
        &mut controller,
        &mut canvas,
        &[
            InputEvent::PointerDown { x: 10.0, y: 10.0 },
            InputEvent::PointerMove { x: 50.0, y: 50.0 },
            InputEvent::PointerUp,
        ],
    );
    controller.clear(&mut canvas).unwrap();

    let mut reference = Canvas::new(64, 64, RED).unwrap();
    assert_eq!(pixels(&mut canvas), pixels(&mut reference));
}

#[test]
fn control_events_update_style_state() {
    let mut controller = create_test_controller();
    let mut canvas = create_test_canvas();

    apply(
        &mut controller,
        &mut canvas,
        &[
            InputEvent::Control {
                change: ControlChange::Tool { tool: Tool::Arrow },
            },
            InputEvent::Control {
                change: ControlChange::BrushWidth { width: 12.0 },
            },
            InputEvent::Control {
                change: ControlChange::StrokeColor {
                    color: crate::config::ColorSpec::Name("#ff0000".into()),
                },
            },
            InputEvent::Control {
                change: ControlChange::FillEnabled { enabled: true },
            },
        ],
    );

    assert_eq!(controller.tool, Tool::Arrow);
    assert_eq!(controller.brush_width, 12.0);
    assert_eq!(controller.stroke_color, RED);
    assert!(controller.fill_enabled);
}

#[test]
fn save_control_sets_a_pending_export_exactly_once() {
    let mut controller = create_test_controller();
    let mut canvas = create_test_canvas();

    assert!(!controller.take_pending_export());

    apply(
        &mut controller,
        &mut canvas,
        &[InputEvent::Control {
            change: ControlChange::Save,
        }],
    );
    assert!(controller.take_pending_export());
    assert!(!controller.take_pending_export());
}

#[test]
fn eraser_follows_background_color_changes() {
    let mut controller = create_test_controller();
    let mut canvas = create_test_canvas();

    // Background becomes red; the eraser must now paint red
    controller.set_background_color(&mut canvas, RED).unwrap();
    controller.select_tool(Tool::Eraser);
    controller.set_brush_width(20.0);

    apply(
        &mut controller,
        &mut canvas,
        &[
            InputEvent::PointerDown { x: 10.0, y: 32.0 },
            InputEvent::PointerMove { x: 54.0, y: 32.0 },
            InputEvent::PointerUp,
        ],
    );

    // Erasing over a uniform red buffer changes nothing visible
    let mut reference = Canvas::new(64, 64, RED).unwrap();
    assert_eq!(pixels(&mut canvas), pixels(&mut reference));
}
