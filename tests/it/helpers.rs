//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestBoardBuilder` - Builder pattern for creating sessions with items
//! - `RecordingRenderer`, `ScriptedInput`, `MemoryClipboard`,
//!   `MemoryFileChannel` - in-memory host collaborators
//! - PNG fixture builders

#![allow(dead_code)]

use image::{ImageFormat, Rgba, RgbaImage};
use std::collections::{HashMap, VecDeque};
use std::io::Cursor;
use visionboard::host::{ClipboardSource, FileChannel, InputProvider, Renderer};
use visionboard::settings::Settings;
use visionboard::viewport::Viewport;
use visionboard::{ImagePayload, Item, ItemContent, ItemHeight, ItemId, Point, VisionBoard};

// ============================================================================
// TestBoardBuilder - Builder pattern for creating test sessions
// ============================================================================

/// Builder for sessions with a known transform and items.
///
/// Items get ids 1, 2, 3... in the order they are added.
///
/// # Example
/// ```ignore
/// let board = TestBoardBuilder::new()
///     .with_scale(2.0)
///     .with_text_item("Hello", (0.0, 0.0))
///     .with_image_item((300.0, 0.0), (200.0, 150.0))
///     .build();
/// ```
pub struct TestBoardBuilder {
    settings: Settings,
    scale: f64,
    pan: (f64, f64),
    items: Vec<(Point, f64, ItemHeight, ItemContent)>,
}

impl Default for TestBoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBoardBuilder {
    /// Scale 1 and zero pan, so screen and world coordinates coincide.
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            scale: 1.0,
            pan: (0.0, 0.0),
            items: Vec::new(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_pan(mut self, x: f64, y: f64) -> Self {
        self.pan = (x, y);
        self
    }

    /// Add a 200-wide auto-height text item.
    pub fn with_text_item(mut self, html: impl Into<String>, pos: (f64, f64)) -> Self {
        self.items.push((
            Point::new(pos.0, pos.1),
            200.0,
            ItemHeight::Auto,
            ItemContent::Text { html: html.into() },
        ));
        self
    }

    /// Add an image item with a tiny placeholder payload.
    pub fn with_image_item(mut self, pos: (f64, f64), size: (f64, f64)) -> Self {
        self.items.push((
            Point::new(pos.0, pos.1),
            size.0,
            ItemHeight::Fixed(size.1),
            ItemContent::Image(ImagePayload {
                data_uri: "data:image/jpeg;base64,/9g=".to_string(),
                persisted: true,
            }),
        ));
        self
    }

    pub fn with_link_item(mut self, url: &str, title: &str, pos: (f64, f64)) -> Self {
        self.items.push((
            Point::new(pos.0, pos.1),
            200.0,
            ItemHeight::Auto,
            ItemContent::Link {
                url: url.to_string(),
                title: title.to_string(),
            },
        ));
        self
    }

    pub fn build(self) -> VisionBoard {
        let mut board = VisionBoard::new(self.settings);
        board
            .viewport_mut()
            .set_transform(self.scale, Point::new(self.pan.0, self.pan.1));

        let store = board.store_mut();
        for (position, width, height, content) in self.items {
            let id = store.allocate_id();
            store.add(Item {
                id,
                position,
                width,
                height,
                content,
            });
        }
        board
    }
}

/// Look up an item that must exist.
pub fn item(board: &VisionBoard, id: ItemId) -> &Item {
    board
        .store()
        .find_by_id(id)
        .unwrap_or_else(|_| panic!("item {id} missing"))
}

pub fn assert_item_count(board: &VisionBoard, expected: usize) {
    assert_eq!(
        board.store().len(),
        expected,
        "expected {} items, found {}",
        expected,
        board.store().len()
    );
}

pub fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Host doubles
// ============================================================================

/// One call made on the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Draw(ItemId),
    Update(ItemId),
    Remove(ItemId),
    Raise(ItemId),
    Clear,
    Transform { scale: f64, pan: Point },
}

/// Renderer that records every call.
#[derive(Default)]
pub struct RecordingRenderer {
    pub events: Vec<RenderEvent>,
    /// Markup returned by `live_text_html`, as if the user edited in place
    pub live_text: HashMap<ItemId, String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&RenderEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    pub fn last(&self) -> Option<&RenderEvent> {
        self.events.last()
    }
}

impl Renderer for RecordingRenderer {
    fn draw_item(&mut self, item: &Item) {
        self.events.push(RenderEvent::Draw(item.id));
    }

    fn update_item(&mut self, item: &Item) {
        self.events.push(RenderEvent::Update(item.id));
    }

    fn remove_item(&mut self, id: ItemId) {
        self.events.push(RenderEvent::Remove(id));
    }

    fn raise_item(&mut self, id: ItemId) {
        self.events.push(RenderEvent::Raise(id));
    }

    fn clear(&mut self) {
        self.events.push(RenderEvent::Clear);
    }

    fn apply_transform(&mut self, viewport: &Viewport) {
        self.events.push(RenderEvent::Transform {
            scale: viewport.scale(),
            pan: viewport.pan(),
        });
    }

    fn live_text_html(&self, id: ItemId) -> Option<String> {
        self.live_text.get(&id).cloned()
    }
}

/// Input provider answering from queues. Exhausted queues cancel / decline.
#[derive(Default)]
pub struct ScriptedInput {
    prompts: VecDeque<Option<String>>,
    confirms: VecDeque<bool>,
    pub asked: Vec<String>,
    pub notifications: Vec<String>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, text: &str) -> Self {
        self.prompts.push_back(Some(text.to_string()));
        self
    }

    pub fn cancel(mut self) -> Self {
        self.prompts.push_back(None);
        self
    }

    pub fn confirm(mut self, yes: bool) -> Self {
        self.confirms.push_back(yes);
        self
    }
}

impl InputProvider for ScriptedInput {
    fn prompt_text(&mut self, message: &str) -> Option<String> {
        self.asked.push(message.to_string());
        self.prompts.pop_front().flatten()
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.confirms.pop_front().unwrap_or(false)
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

/// Clipboard holding fixed payloads in offer order.
#[derive(Default)]
pub struct MemoryClipboard {
    payloads: Vec<(String, Vec<u8>)>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, mime: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.payloads.push((mime.to_string(), bytes.into()));
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.with("text/plain", text.as_bytes())
    }
}

impl ClipboardSource for MemoryClipboard {
    fn mime_types(&self) -> Vec<String> {
        self.payloads.iter().map(|(mime, _)| mime.clone()).collect()
    }

    fn read(&self, mime: &str) -> Option<Vec<u8>> {
        self.payloads
            .iter()
            .find(|(m, _)| m == mime)
            .map(|(_, bytes)| bytes.clone())
    }
}

/// File channel backed by memory.
#[derive(Default)]
pub struct MemoryFileChannel {
    pub saved: Vec<(String, Vec<u8>)>,
    pub to_open: Option<Vec<u8>>,
    pub fail_saves: bool,
}

impl MemoryFileChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last saved file, if any
    pub fn last_saved(&self) -> Option<&(String, Vec<u8>)> {
        self.saved.last()
    }

    /// Last saved file as JSON
    pub fn last_json(&self) -> serde_json::Value {
        let (_, bytes) = self.last_saved().expect("nothing saved");
        serde_json::from_slice(bytes).expect("saved file is not JSON")
    }
}

impl FileChannel for MemoryFileChannel {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> anyhow::Result<()> {
        if self.fail_saves {
            anyhow::bail!("disk full");
        }
        self.saved.push((filename.to_string(), bytes.to_vec()));
        Ok(())
    }

    fn open(&mut self) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self.to_open.take())
    }
}

// ============================================================================
// Image fixtures
// ============================================================================

/// Opaque PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 90, 255]));
    encode_png(img)
}

/// PNG with a transparent half, to exercise alpha flattening.
pub fn png_with_alpha(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([10, 200, 10, 255])
        }
    });
    encode_png(img)
}

fn encode_png(img: RgbaImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("png encode");
    out.into_inner()
}
