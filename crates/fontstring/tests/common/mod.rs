//! Shared fixtures for the scenario tests: a scripted font host with a
//! small fixed-metric font table that records every paint operation.

use std::collections::HashMap;

use fontstring::prelude::*;

/// A fake font with fixed cell metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeFont {
    pub name: &'static str,
    pub xsize: f64,
    pub ysize: f64,
}

/// One recorded paint operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    /// A string painted at the cursor, with the font and colours in force.
    Text {
        text: Vec<u8>,
        font: &'static str,
        x: f64,
        y: f64,
        bg: i32,
        fg: i32,
    },
    /// An underline bar.
    Underline { rect: Rect, fg: i32 },
}

impl PaintOp {
    pub fn text(text: &[u8], font: &'static str, x: f64, y: f64, bg: i32, fg: i32) -> Self {
        PaintOp::Text {
            text: text.to_vec(),
            font,
            x,
            y,
            bg,
            fg,
        }
    }

    pub fn underline(x0: f64, y0: f64, x1: f64, y1: f64, fg: i32) -> Self {
        PaintOp::Underline {
            rect: Rect::new(x0, y0, x1, y1),
            fg,
        }
    }
}

/// Scripted host: three fixed fonts, every paint call recorded.
pub struct FakeHost {
    fonts: HashMap<u8, FakeFont>,
    pub paint_ops: Vec<PaintOp>,
}

impl FakeHost {
    pub fn new() -> Self {
        let fonts = HashMap::from([
            (
                1,
                FakeFont {
                    name: "Homerton",
                    xsize: 8.0,
                    ysize: 16.0,
                },
            ),
            (
                2,
                FakeFont {
                    name: "Trinity",
                    xsize: 32.0,
                    ysize: 32.0,
                },
            ),
            (
                3,
                FakeFont {
                    name: "Corpus",
                    xsize: 8.0,
                    ysize: 8.0,
                },
            ),
        ]);
        FakeHost {
            fonts,
            paint_ops: Vec::new(),
        }
    }
}

impl FontHost for FakeHost {
    type Font = FakeFont;

    fn font_lookup(&self, handle: u8) -> RenderResult<FakeFont> {
        self.fonts
            .get(&handle)
            .cloned()
            .ok_or(RenderError::InvalidFontHandle(handle))
    }

    fn font_bounds(&self, context: &FontContext<FakeFont>, string: Option<&[u8]>) -> TextMetrics {
        let font = match &context.font {
            Some(font) => font,
            None => return TextMetrics::ZERO,
        };
        match string {
            None => TextMetrics::new(0.0, 0.0, font.xsize, font.ysize, font.xsize, 0.0),
            Some(s) => {
                let width = s.len() as f64 * font.xsize;
                TextMetrics::new(0.0, 0.0, width, font.ysize, width, 0.0)
            }
        }
    }

    fn font_paint(&mut self, context: &FontContext<FakeFont>, string: &[u8]) {
        let font = context.font.as_ref().map_or("<none>", |f| f.name);
        self.paint_ops.push(PaintOp::Text {
            text: string.to_vec(),
            font,
            x: context.x,
            y: context.y,
            bg: context.bg,
            fg: context.fg,
        });
    }

    fn draw_underline(&mut self, context: &FontContext<FakeFont>, rect: Rect) {
        self.paint_ops.push(PaintOp::Underline {
            rect,
            fg: context.fg,
        });
    }
}

/// A context with font 1 selected and white-on-black colours, plus the
/// host that serves it.
pub fn context_with_font_1() -> (FakeHost, FontContext<FakeFont>) {
    let host = FakeHost::new();
    let mut context = FontContext::new();
    context.select_font(&host, 1).unwrap();
    context.select_colour(&host, &ColourSelection::gcol(0, 7));
    (host, context)
}

/// Parse a byte string with the default length cap.
pub fn parse(bytes: &[u8]) -> ControlSequence {
    let mut parser = ControlParser::new();
    parser.parse(bytes, None);
    parser.take_sequence()
}

/// The accumulated bounds as a rect, panicking when empty.
pub fn bounds_rect(context: &FontContext<FakeFont>) -> Rect {
    context.bounds.rect().expect("bounds should not be empty")
}
