//! Board Workflow Integration Tests

use crate::helpers::{
    RecordingRenderer, RenderEvent, ScriptedInput, TestBoardBuilder, assert_item_count, item,
};
use visionboard::error::BoardError;
use visionboard::{ItemContent, ItemHeight, ItemId, Point, VisionBoard};

#[test]
fn test_new_board_workflow() {
    let board = VisionBoard::default();
    assert!(board.store().is_empty());
    assert_eq!(board.viewport().scale(), 1.0);
    assert_eq!(board.store().next_id(), 1);
    assert_eq!(board.selected(), None);
}

#[test]
fn test_add_text_via_prompt() {
    let mut board = VisionBoard::default();
    let mut input = ScriptedInput::new().answer("Buy <milk> & eggs");
    let mut renderer = RecordingRenderer::new();

    let id = board.add_text_item(&mut input, &mut renderer).unwrap();

    let added = item(&board, id);
    assert_eq!(added.text_html(), Some("Buy &lt;milk&gt; &amp; eggs"));
    assert_eq!(added.width, 200.0);
    assert_eq!(added.height, ItemHeight::Auto);
    // Centered in the default view
    assert_eq!(added.position, Point::new(-100.0, -50.0));
    assert_eq!(input.asked, vec!["Enter your text:".to_string()]);
    assert_eq!(renderer.events, vec![RenderEvent::Draw(id)]);
}

#[test]
fn test_add_text_cancelled() {
    let mut board = VisionBoard::default();
    let mut renderer = RecordingRenderer::new();

    assert_eq!(board.add_text_item(&mut ScriptedInput::new().cancel(), &mut renderer), None);
    assert_eq!(board.add_text_item(&mut ScriptedInput::new().answer(""), &mut renderer), None);
    assert_item_count(&board, 0);
    assert!(renderer.events.is_empty());
}

#[test]
fn test_add_link_normalizes_url() {
    let mut board = VisionBoard::default();
    let mut input = ScriptedInput::new().answer("example.com").answer("");
    let mut renderer = RecordingRenderer::new();

    let id = board.add_link_item(&mut input, &mut renderer).unwrap();

    let link = item(&board, id);
    assert_eq!(
        link.content,
        ItemContent::Link {
            url: "https://example.com".into(),
            title: "example.com".into(),
        }
    );
    assert_eq!(link.position, Point::new(-100.0, -25.0));
}

#[test]
fn test_add_link_keeps_title_and_scheme() {
    let mut board = VisionBoard::default();
    let mut renderer = RecordingRenderer::new();

    let id = board.add_link_item_with("http://old.example", Some("Old site"), &mut renderer);

    assert_eq!(
        item(&board, id).content,
        ItemContent::Link {
            url: "http://old.example".into(),
            title: "Old site".into(),
        }
    );
}

#[test]
fn test_add_link_cancelled_url() {
    let mut board = VisionBoard::default();
    let mut input = ScriptedInput::new().cancel();
    let mut renderer = RecordingRenderer::new();

    assert_eq!(board.add_link_item(&mut input, &mut renderer), None);
    // Title is never asked for
    assert_eq!(input.asked.len(), 1);
}

#[test]
fn test_new_items_centered_in_current_view() {
    let mut board = TestBoardBuilder::new().with_scale(2.0).build();
    let mut renderer = RecordingRenderer::new();

    let id = board.add_text_item_with("x", &mut renderer);

    // Window 1280x800 at scale 2 with zero pan: center is world (320, 200)
    assert_eq!(item(&board, id).position, Point::new(220.0, 150.0));
}

#[test]
fn test_clear_then_add_restarts_ids() {
    let mut board = VisionBoard::default();
    let mut renderer = RecordingRenderer::new();
    board.add_text_item_with("a", &mut renderer);
    board.add_text_item_with("b", &mut renderer);

    let mut input = ScriptedInput::new().confirm(true);
    assert!(board.clear_board(&mut input, &mut renderer));
    assert_item_count(&board, 0);
    assert_eq!(renderer.last(), Some(&RenderEvent::Clear));

    let id = board.add_text_item_with("x", &mut renderer);
    assert_eq!(id, ItemId(1));
}

#[test]
fn test_clear_declined_keeps_board() {
    let mut board = TestBoardBuilder::new()
        .with_text_item("a", (0.0, 0.0))
        .build();
    let mut input = ScriptedInput::new().confirm(false);
    let mut renderer = RecordingRenderer::new();

    assert!(!board.clear_board(&mut input, &mut renderer));
    assert_item_count(&board, 1);
    assert!(renderer.events.is_empty());
}

#[test]
fn test_duplicate_then_edit_is_independent() {
    let mut board = TestBoardBuilder::new()
        .with_text_item("source", (40.0, 60.0))
        .build();
    let mut renderer = RecordingRenderer::new();

    let copy = board.duplicate_item(ItemId(1), &mut renderer).unwrap();
    board.edit_text(copy, "edited").unwrap();

    assert!(copy > ItemId(1));
    assert_eq!(item(&board, copy).position, Point::new(60.0, 80.0));
    assert_eq!(item(&board, copy).text_html(), Some("edited"));
    assert_eq!(item(&board, ItemId(1)).text_html(), Some("source"));
}

#[test]
fn test_duplicate_missing_item_fails() {
    let mut board = VisionBoard::default();
    let mut renderer = RecordingRenderer::new();

    let err = board.duplicate_item(ItemId(3), &mut renderer).unwrap_err();
    assert!(matches!(err, BoardError::NotFound(ItemId(3))));
    assert!(renderer.events.is_empty());
}

#[test]
fn test_delete_missing_item_is_noop() {
    let mut board = TestBoardBuilder::new()
        .with_text_item("a", (0.0, 0.0))
        .build();
    let mut renderer = RecordingRenderer::new();

    assert!(!board.delete_item(ItemId(2), &mut renderer));
    assert_item_count(&board, 1);
    assert!(renderer.events.is_empty());
}

#[test]
fn test_edit_text_strips_affordances() {
    let mut board = TestBoardBuilder::new()
        .with_text_item("a", (0.0, 0.0))
        .build();

    board
        .edit_text(
            ItemId(1),
            "New <i>text</i><button class=\"delete-button\">×</button><div class=\"resize-handle\"></div>",
        )
        .unwrap();

    assert_eq!(item(&board, ItemId(1)).text_html(), Some("New <i>text</i>"));
}

#[test]
fn test_reset_view() {
    let mut board = VisionBoard::default();
    let mut renderer = RecordingRenderer::new();
    board.handle_wheel(Point::new(10.0, 10.0), -1.0, &mut renderer);

    board.reset_view(&mut renderer);

    assert_eq!(board.viewport().scale(), 1.0);
    assert_eq!(board.viewport().pan(), Point::new(640.0, 400.0));
}

#[test]
fn test_window_resize_changes_placement() {
    let mut board = VisionBoard::default();
    let mut renderer = RecordingRenderer::new();
    // Pan stays (640, 400); the visible center moves
    board.set_window_size(1480.0, 1000.0);

    let id = board.add_text_item_with("x", &mut renderer);
    assert_eq!(item(&board, id).position, Point::new(0.0, 50.0));
}
