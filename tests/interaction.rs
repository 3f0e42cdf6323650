use egui::{Color32, Key, Pos2, pos2};
use sticker_sketchpad::state::InteractionState;
use sticker_sketchpad::{
    Command, DrawCall, Effect, InputEvent, PlacedSticker, RecordingSurface, Rotation, Sketchpad,
    Tool, ToolSelection,
};

// =============================================================
// Helpers
// =============================================================

fn down(sketchpad: &mut Sketchpad, x: f32, y: f32) -> Vec<Effect> {
    sketchpad.handle_input(InputEvent::PointerDown { position: pos2(x, y) })
}

fn drag(sketchpad: &mut Sketchpad, x: f32, y: f32) -> Vec<Effect> {
    sketchpad.handle_input(InputEvent::PointerMove { position: pos2(x, y) })
}

fn up(sketchpad: &mut Sketchpad, x: f32, y: f32) -> Vec<Effect> {
    sketchpad.handle_input(InputEvent::PointerUp { position: pos2(x, y) })
}

fn press_r(sketchpad: &mut Sketchpad) -> Vec<Effect> {
    sketchpad.handle_input(InputEvent::KeyPressed { key: Key::R })
}

fn draw_line(sketchpad: &mut Sketchpad, points: &[Pos2]) {
    let (first, rest) = points.split_first().unwrap();
    down(sketchpad, first.x, first.y);
    for point in rest {
        drag(sketchpad, point.x, point.y);
    }
    let last = points.last().unwrap();
    up(sketchpad, last.x, last.y);
}

fn redraws(effects: &[Effect]) -> usize {
    effects.iter().filter(|effect| **effect == Effect::Redraw).count()
}

fn frame(sketchpad: &Sketchpad) -> Vec<DrawCall> {
    let mut surface = RecordingSurface::new();
    sketchpad.render(&mut surface);
    surface.calls().to_vec()
}

// =============================================================
// Marker
// =============================================================

#[test]
fn test_thin_marker_drag_commits_one_stroke() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.execute(Command::SelectTool(ToolSelection::ThinMarker));

    draw_line(
        &mut sketchpad,
        &[pos2(0.0, 0.0), pos2(5.0, 5.0), pos2(10.0, 2.0)],
    );

    let drawables = sketchpad.drawables();
    assert_eq!(drawables.len(), 1);
    let stroke = drawables[0].as_stroke().unwrap();
    assert_eq!(stroke.points(), &[pos2(0.0, 0.0), pos2(5.0, 5.0), pos2(10.0, 2.0)]);
    assert_eq!(stroke.thickness(), 2.0);
    assert!(sketchpad.history().redo_stack().is_empty());
    assert!(sketchpad.state().is_idle());
}

#[test]
fn test_stroke_is_committed_on_pointer_down() {
    let mut sketchpad = Sketchpad::default();
    let effects = down(&mut sketchpad, 3.0, 4.0);

    assert_eq!(redraws(&effects), 1);
    assert_eq!(sketchpad.state(), &InteractionState::Drawing);
    assert_eq!(sketchpad.drawables().len(), 1);

    // A click without a drag is still undoable
    up(&mut sketchpad, 3.0, 4.0);
    assert_eq!(sketchpad.execute(Command::Undo), vec![Effect::Redraw]);
    assert!(sketchpad.drawables().is_empty());
}

#[test]
fn test_thick_marker_uses_thick_value_and_color() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.execute(Command::SelectTool(ToolSelection::ThickMarker));
    sketchpad.execute(Command::SetColor(Color32::RED));

    draw_line(&mut sketchpad, &[pos2(1.0, 1.0), pos2(2.0, 2.0)]);

    let stroke = sketchpad.drawables()[0].as_stroke().unwrap();
    assert_eq!(stroke.thickness(), 8.0);
    assert_eq!(stroke.color(), Color32::RED);
}

#[test]
fn test_leaving_surface_ends_stroke_and_keeps_points() {
    let mut sketchpad = Sketchpad::default();
    down(&mut sketchpad, 0.0, 0.0);
    drag(&mut sketchpad, 4.0, 4.0);

    let effects = sketchpad.handle_input(InputEvent::PointerLeave);
    assert_eq!(redraws(&effects), 1);
    assert!(sketchpad.state().is_idle());
    assert!(sketchpad.preview().is_active());

    // Moving again only moves the preview
    drag(&mut sketchpad, 9.0, 9.0);
    let stroke = sketchpad.drawables()[0].as_stroke().unwrap();
    assert_eq!(stroke.points(), &[pos2(0.0, 0.0), pos2(4.0, 4.0)]);
}

#[test]
fn test_commit_after_undo_clears_redo() {
    let mut sketchpad = Sketchpad::default();
    draw_line(&mut sketchpad, &[pos2(0.0, 0.0), pos2(1.0, 1.0)]); // A
    draw_line(&mut sketchpad, &[pos2(2.0, 2.0), pos2(3.0, 3.0)]); // B
    sketchpad.execute(Command::Undo);
    assert_eq!(sketchpad.history().redo_stack().len(), 1);

    draw_line(&mut sketchpad, &[pos2(4.0, 4.0), pos2(5.0, 5.0)]); // C

    let starts: Vec<Pos2> = sketchpad
        .drawables()
        .iter()
        .map(|drawable| drawable.as_stroke().unwrap().points()[0])
        .collect();
    assert_eq!(starts, vec![pos2(0.0, 0.0), pos2(4.0, 4.0)]);
    assert!(sketchpad.history().redo_stack().is_empty());
}

#[test]
fn test_undo_while_drawing_ends_drag_first() {
    let mut sketchpad = Sketchpad::default();
    down(&mut sketchpad, 0.0, 0.0);
    drag(&mut sketchpad, 1.0, 1.0);

    assert_eq!(sketchpad.execute(Command::Undo), vec![Effect::Redraw]);
    assert!(sketchpad.state().is_idle());
    assert!(sketchpad.drawables().is_empty());

    drag(&mut sketchpad, 2.0, 2.0);
    assert!(sketchpad.drawables().is_empty());
}

// =============================================================
// History commands
// =============================================================

#[test]
fn test_each_history_mutation_redraws_once() {
    let mut sketchpad = Sketchpad::default();
    draw_line(&mut sketchpad, &[pos2(0.0, 0.0), pos2(1.0, 1.0)]);

    assert_eq!(redraws(&sketchpad.execute(Command::Undo)), 1);
    assert_eq!(redraws(&sketchpad.execute(Command::Redo)), 1);
    assert_eq!(redraws(&sketchpad.execute(Command::Clear)), 1);
}

#[test]
fn test_undo_and_redo_noops_do_not_redraw() {
    let mut sketchpad = Sketchpad::default();
    let before = sketchpad.history().clone();

    assert!(sketchpad.execute(Command::Undo).is_empty());
    assert!(sketchpad.execute(Command::Redo).is_empty());
    assert_eq!(sketchpad.history(), &before);
}

#[test]
fn test_clear_empties_scene_and_redo() {
    let mut sketchpad = Sketchpad::default();
    draw_line(&mut sketchpad, &[pos2(0.0, 0.0), pos2(1.0, 1.0)]);
    draw_line(&mut sketchpad, &[pos2(2.0, 2.0), pos2(3.0, 3.0)]);
    sketchpad.execute(Command::Undo);

    sketchpad.execute(Command::Clear);
    assert!(sketchpad.drawables().is_empty());
    assert!(!sketchpad.history().can_redo());
}

// =============================================================
// Stickers
// =============================================================

#[test]
fn test_place_rotated_sticker_then_undo_and_redo() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.execute(Command::SelectTool(ToolSelection::Sticker(2)));

    down(&mut sketchpad, 40.0, 40.0);
    assert!(matches!(sketchpad.state(), InteractionState::PlacingSticker { .. }));
    drag(&mut sketchpad, 50.0, 50.0);
    press_r(&mut sketchpad);
    up(&mut sketchpad, 50.0, 50.0);

    let expected = PlacedSticker::new("🎉", pos2(50.0, 50.0), Rotation::new(90.0));
    assert_eq!(sketchpad.drawables().len(), 1);
    assert_eq!(sketchpad.drawables()[0].as_sticker(), Some(&expected));

    sketchpad.execute(Command::Undo);
    assert!(sketchpad.drawables().is_empty());
    assert_eq!(sketchpad.history().redo_stack().len(), 1);
    assert_eq!(sketchpad.history().redo_stack()[0].as_sticker(), Some(&expected));

    sketchpad.execute(Command::Redo);
    assert_eq!(sketchpad.drawables()[0].as_sticker(), Some(&expected));
}

#[test]
fn test_sticker_is_not_committed_until_release() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.execute(Command::SelectTool(ToolSelection::Sticker(0)));

    down(&mut sketchpad, 10.0, 10.0);
    drag(&mut sketchpad, 20.0, 20.0);
    assert!(sketchpad.drawables().is_empty());

    // The live sticker is drawn at the pointer
    let calls = frame(&sketchpad);
    assert!(calls.contains(&DrawCall::Glyph {
        text: "😀".to_owned(),
        center: pos2(20.0, 20.0),
        rotation_degrees: 0.0,
    }));
}

#[test]
fn test_sticker_placement_falls_back_to_last_marker() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.execute(Command::SelectTool(ToolSelection::ThickMarker));
    sketchpad.execute(Command::SelectTool(ToolSelection::Sticker(1)));
    assert_eq!(sketchpad.tool(), &Tool::Sticker { glyph: "🥳".to_owned() });

    down(&mut sketchpad, 5.0, 5.0);
    let effects = up(&mut sketchpad, 5.0, 5.0);

    let marker = Tool::Marker { thickness: 8.0 };
    assert!(effects.contains(&Effect::ToolChanged(marker.clone())));
    assert_eq!(redraws(&effects), 1);
    assert_eq!(sketchpad.tool(), &marker);

    // The next press draws instead of placing
    down(&mut sketchpad, 6.0, 6.0);
    assert_eq!(sketchpad.state(), &InteractionState::Drawing);
}

#[test]
fn test_rotation_wraps_after_four_turns() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.execute(Command::SelectTool(ToolSelection::Sticker(0)));
    down(&mut sketchpad, 0.0, 0.0);

    for expected in [90.0, 180.0, 270.0, 0.0] {
        assert_eq!(redraws(&press_r(&mut sketchpad)), 1);
        let live = sketchpad.state().live_sticker().unwrap();
        assert_eq!(live.rotation().degrees(), expected);
    }
}

#[test]
fn test_rotate_key_ignored_with_marker() {
    let mut sketchpad = Sketchpad::default();
    assert!(press_r(&mut sketchpad).is_empty());

    down(&mut sketchpad, 0.0, 0.0);
    assert!(press_r(&mut sketchpad).is_empty());

    assert!(
        sketchpad
            .handle_input(InputEvent::KeyPressed { key: Key::Q })
            .is_empty()
    );
}

#[test]
fn test_leaving_surface_cancels_sticker_placement() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.execute(Command::SelectTool(ToolSelection::Sticker(0)));
    down(&mut sketchpad, 0.0, 0.0);

    sketchpad.handle_input(InputEvent::PointerLeave);
    assert!(sketchpad.state().is_idle());
    assert!(sketchpad.drawables().is_empty());
    assert!(sketchpad.tool().is_sticker());
}

#[test]
fn test_cancelled_placement_keeps_rotation_in_preview() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.execute(Command::SelectTool(ToolSelection::Sticker(0)));
    down(&mut sketchpad, 10.0, 10.0);
    press_r(&mut sketchpad);
    sketchpad.handle_input(InputEvent::PointerLeave);
    drag(&mut sketchpad, 20.0, 20.0);

    assert_eq!(sketchpad.sticker_rotation().degrees(), 90.0);
    let preview_rotation = frame(&sketchpad).into_iter().find_map(|call| match call {
        DrawCall::Glyph {
            rotation_degrees, ..
        } => Some(rotation_degrees),
        _ => None,
    });
    assert_eq!(preview_rotation, Some(sketchpad.sticker_rotation().degrees()));

    // The next placement uses the same rotation the preview showed
    down(&mut sketchpad, 20.0, 20.0);
    up(&mut sketchpad, 20.0, 20.0);
    let placed = sketchpad.drawables()[0].as_sticker().unwrap();
    assert_eq!(placed.rotation().degrees(), 90.0);
}

#[test]
fn test_selecting_tool_resets_rotation_and_preview() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.execute(Command::SelectTool(ToolSelection::Sticker(0)));
    press_r(&mut sketchpad);
    assert_eq!(sketchpad.sticker_rotation().degrees(), 90.0);

    let effects = sketchpad.execute(Command::SelectTool(ToolSelection::Sticker(1)));
    assert_eq!(
        effects,
        vec![
            Effect::ToolChanged(Tool::Sticker { glyph: "🥳".to_owned() }),
            Effect::Redraw
        ]
    );
    assert_eq!(sketchpad.sticker_rotation().degrees(), 0.0);
}

#[test]
fn test_selecting_tool_mid_stroke_keeps_stroke() {
    let mut sketchpad = Sketchpad::default();
    down(&mut sketchpad, 0.0, 0.0);
    drag(&mut sketchpad, 1.0, 1.0);

    sketchpad.execute(Command::SelectTool(ToolSelection::ThickMarker));
    assert!(sketchpad.state().is_idle());
    drag(&mut sketchpad, 2.0, 2.0);

    let stroke = sketchpad.drawables()[0].as_stroke().unwrap();
    assert_eq!(stroke.points().len(), 2);
}

#[test]
fn test_unknown_sticker_index_is_ignored() {
    let mut sketchpad = Sketchpad::default();
    assert!(
        sketchpad
            .execute(Command::SelectTool(ToolSelection::Sticker(42)))
            .is_empty()
    );
    assert_eq!(sketchpad.tool(), &Tool::Marker { thickness: 2.0 });
}

#[test]
fn test_custom_sticker_registers_and_arms() {
    let mut sketchpad = Sketchpad::default();

    assert!(
        sketchpad
            .execute(Command::AddCustomSticker("   ".to_owned()))
            .is_empty()
    );
    assert_eq!(sketchpad.palette().stickers.len(), 3);

    let effects = sketchpad.execute(Command::AddCustomSticker(" 🌵 ".to_owned()));
    assert_eq!(redraws(&effects), 1);
    assert_eq!(sketchpad.palette().stickers.len(), 4);
    assert_eq!(sketchpad.tool(), &Tool::Sticker { glyph: "🌵".to_owned() });

    // Same glyph twice is rejected
    assert!(
        sketchpad
            .execute(Command::AddCustomSticker("🌵".to_owned()))
            .is_empty()
    );
}

// =============================================================
// Redraw pipeline
// =============================================================

#[test]
fn test_redraw_is_idempotent() {
    let mut sketchpad = Sketchpad::default();
    draw_line(&mut sketchpad, &[pos2(0.0, 0.0), pos2(5.0, 5.0)]);
    sketchpad.execute(Command::SelectTool(ToolSelection::Sticker(0)));
    drag(&mut sketchpad, 30.0, 30.0);

    assert_eq!(frame(&sketchpad), frame(&sketchpad));

    down(&mut sketchpad, 30.0, 30.0);
    assert_eq!(frame(&sketchpad), frame(&sketchpad));
}

#[test]
fn test_render_order_clear_elements_then_preview() {
    let mut sketchpad = Sketchpad::default();
    draw_line(&mut sketchpad, &[pos2(0.0, 0.0), pos2(5.0, 5.0)]);
    sketchpad.execute(Command::SelectTool(ToolSelection::Sticker(0)));
    down(&mut sketchpad, 8.0, 8.0);
    up(&mut sketchpad, 8.0, 8.0);
    drag(&mut sketchpad, 12.0, 12.0);

    let calls = frame(&sketchpad);
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0], DrawCall::Clear(sketchpad.canvas_rect()));
    assert!(matches!(calls[1], DrawCall::Polyline { .. }));
    assert!(matches!(&calls[2], DrawCall::Glyph { text, .. } if text == "😀"));
    assert!(matches!(calls[3], DrawCall::Circle { center, .. } if center == pos2(12.0, 12.0)));
}

#[test]
fn test_preview_hidden_while_drawing() {
    let mut sketchpad = Sketchpad::default();
    drag(&mut sketchpad, 1.0, 1.0);
    assert!(
        frame(&sketchpad)
            .iter()
            .any(|call| matches!(call, DrawCall::Circle { .. }))
    );

    down(&mut sketchpad, 1.0, 1.0);
    drag(&mut sketchpad, 2.0, 2.0);
    assert!(
        !frame(&sketchpad)
            .iter()
            .any(|call| matches!(call, DrawCall::Circle { .. }))
    );

    up(&mut sketchpad, 2.0, 2.0);
    assert!(sketchpad.preview().is_visible());
}
