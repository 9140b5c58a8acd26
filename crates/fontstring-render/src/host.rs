//! Host hooks consumed by the render context.

use fontstring_core::{Rect, TextMetrics};

use crate::context::FontContext;
use crate::error::RenderResult;

/// The services a managing system supplies to the render engine.
///
/// The core never rasterises glyphs, measures fonts or maps colours
/// itself; every such operation goes through these hooks, which receive
/// the current context so they can consult the active font, colours and
/// transform. The font table and colour converters are treated as
/// read-only; the paint hooks are an append-only sink.
pub trait FontHost {
    /// Host-side font object resolved from a handle.
    ///
    /// Cloned into every context snapshot during the wrap search, so keep
    /// it cheap (an id, a small struct, or a shared handle).
    type Font: Clone;

    /// Resolve a font handle, performing any validation.
    fn font_lookup(&self, handle: u8) -> RenderResult<Self::Font>;

    /// Metrics for a string under the current context, in millipoints.
    ///
    /// `None` asks for the font cell metrics instead of a string's.
    fn font_bounds(&self, context: &FontContext<Self::Font>, string: Option<&[u8]>)
        -> TextMetrics;

    /// Paint a string at the context's cursor.
    fn font_paint(&mut self, context: &FontContext<Self::Font>, string: &[u8]);

    /// Draw an underline bar.
    fn draw_underline(&mut self, context: &FontContext<Self::Font>, rect: Rect);

    /// Convert a palette index to a packed RGB value
    /// (`0x00BBGGRR << 8 | 0x10`).
    ///
    /// The default assumes one bit each of red, green and blue in the
    /// lowest three palette bits.
    fn gcol_to_rgb(&self, gcol: i32) -> u32 {
        let mut rgb = 0x10u32;
        if gcol & 1 != 0 {
            rgb |= 0xff << 8;
        }
        if gcol & 2 != 0 {
            rgb |= 0xff << 16;
        }
        if gcol & 4 != 0 {
            rgb |= 0xff << 24;
        }
        rgb
    }

    /// Convert a packed RGB value to a palette index; inverse of the
    /// default [`gcol_to_rgb`](FontHost::gcol_to_rgb).
    fn rgb_to_gcol(&self, rgb: u32) -> i32 {
        ((rgb >> 15) & 1 | (rgb >> 22) & 2 | (rgb >> 29) & 4) as i32
    }
}
