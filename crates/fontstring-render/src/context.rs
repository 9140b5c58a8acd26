//! The render context state machine.

use fontstring_core::{Bounds, Transform};

use crate::error::RenderResult;
use crate::host::FontHost;

/// Layout limit value meaning "effectively infinite".
pub const UNLIMITED: f64 = 0x7FFF_FFFF as f64;

/// Limit a value to the given range.
pub fn saturate(value: i32, min: i32, max: i32) -> i32 {
    value.clamp(min, max)
}

/// A subset of colour parameters for
/// [`select_colour`](FontContext::select_colour).
///
/// Absent fields leave the corresponding state untouched. When both
/// palette and RGB fields are present, the palette side is processed
/// first; the RGB values win and the palette side is re-derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColourSelection {
    /// Palette background index.
    pub bg: Option<i32>,
    /// Palette foreground index (seeds the foreground base; the offset is
    /// applied on top).
    pub fg: Option<i32>,
    /// Foreground offset above the base (anti-aliasing colour range).
    pub fgoffset: Option<i32>,
    /// Packed RGB background.
    pub bgpal: Option<u32>,
    /// Packed RGB foreground.
    pub fgpal: Option<u32>,
}

impl ColourSelection {
    /// Select palette background and foreground.
    pub fn gcol(bg: i32, fg: i32) -> Self {
        ColourSelection {
            bg: Some(bg),
            fg: Some(fg),
            ..ColourSelection::default()
        }
    }

    /// Select RGB background and foreground.
    pub fn rgb(bgpal: u32, fgpal: u32) -> Self {
        ColourSelection {
            bgpal: Some(bgpal),
            fgpal: Some(fgpal),
            ..ColourSelection::default()
        }
    }

    /// Set the foreground offset.
    pub fn with_offset(mut self, fgoffset: i32) -> Self {
        self.fgoffset = Some(fgoffset);
        self
    }
}

/// Rendering state between font string operations.
///
/// Holds the active font, the dual colour state (palette-indexed and
/// packed RGB, kept coherent through every update), underline metrics,
/// the render transform, the cursor, layout limits and the accumulated
/// bounds. All fields are flat values, so [`Clone`] produces the O(1)
/// independent snapshot the wrap search relies on.
///
/// `F` is the host's font object ([`FontHost::Font`]).
#[derive(Debug, Clone, PartialEq)]
pub struct FontContext<F> {
    /// Maximum palette index; palette values saturate into `[0, maxcol]`.
    pub maxcol: i32,

    /// Palette background index.
    pub bg: i32,
    /// Palette foreground index, always `saturate(fgbase + fgoffset)`.
    pub fg: i32,
    /// Foreground base index.
    pub fgbase: i32,
    /// Foreground offset, re-derived as `fg - fgbase` after saturation.
    pub fgoffset: i32,

    /// Packed RGB foreground.
    pub fgpal: u32,
    /// Packed RGB background.
    pub bgpal: u32,

    /// Handle of the active font.
    pub font_handle: u8,
    /// Host font object for the active handle, once one was selected.
    pub font: Option<F>,

    /// Underline position relative to the baseline, in millipoints.
    pub underline_pos: f64,
    /// Underline thickness in millipoints; zero disables underlining.
    pub underline_thickness: f64,

    /// Render transform; replaced wholesale by matrix records.
    pub transform: Transform,

    /// Cursor position.
    pub x: f64,
    pub y: f64,

    /// Layout limits used by the wrap search.
    pub limit_x: f64,
    pub limit_y: f64,

    /// Bounds accumulated by apply/paint operations.
    pub bounds: Bounds,
}

impl<F> Default for FontContext<F> {
    fn default() -> Self {
        FontContext {
            maxcol: 7,
            bg: 0,
            fg: 0,
            fgbase: 0,
            fgoffset: 0,
            fgpal: 0x0000_0010,
            bgpal: 0x0000_0010,
            font_handle: 0,
            font: None,
            underline_pos: 0.0,
            underline_thickness: 0.0,
            transform: Transform::IDENTITY,
            x: 0.0,
            y: 0.0,
            limit_x: UNLIMITED,
            limit_y: UNLIMITED,
            bounds: Bounds::empty(),
        }
    }
}

impl<F> FontContext<F> {
    pub fn new() -> Self {
        FontContext::default()
    }

    /// Reset the accumulated bounds to empty.
    pub fn clear_bounds(&mut self) {
        self.bounds = Bounds::empty();
    }

    /// Reset the render transform to the identity.
    pub fn clear_transform(&mut self) {
        self.transform = Transform::IDENTITY;
    }

    /// Disable underlining.
    pub fn clear_underline(&mut self) {
        self.underline_pos = 0.0;
        self.underline_thickness = 0.0;
    }

    /// Select a font by handle.
    ///
    /// The handle is resolved through [`FontHost::font_lookup`]; an
    /// invalid handle propagates the host's error and leaves the context
    /// unchanged.
    pub fn select_font<H>(&mut self, host: &H, handle: u8) -> RenderResult<()>
    where
        H: FontHost<Font = F>,
    {
        self.font = Some(host.font_lookup(handle)?);
        self.font_handle = handle;
        Ok(())
    }

    /// Select colours for rendering.
    ///
    /// Any subset of parameters may be given. Palette parameters are
    /// applied first and re-establish the palette invariant (saturation,
    /// base/offset coherence, RGB recomputed from the palette); RGB
    /// parameters are applied second and re-derive the palette side from
    /// the new RGB values.
    pub fn select_colour<H>(&mut self, host: &H, selection: &ColourSelection)
    where
        H: FontHost<Font = F>,
    {
        let mut palette_changed = false;
        if let Some(fg) = selection.fg {
            self.fgbase = fg;
            palette_changed = true;
        }
        if let Some(bg) = selection.bg {
            self.bg = bg;
            palette_changed = true;
        }
        if let Some(fgoffset) = selection.fgoffset {
            self.fgoffset = fgoffset;
            palette_changed = true;
        }
        if palette_changed {
            self.fg = self.fgbase + self.fgoffset;
            self.gcol_updated(host);
        }

        let mut rgb_changed = false;
        if let Some(fgpal) = selection.fgpal {
            self.fgpal = fgpal;
            rgb_changed = true;
        }
        if let Some(bgpal) = selection.bgpal {
            self.bgpal = bgpal;
            rgb_changed = true;
        }
        if rgb_changed {
            self.rgb_updated(host);
        }
    }

    /// Palette values changed: saturate, restore base/offset coherence
    /// and recompute the RGB side.
    fn gcol_updated<H>(&mut self, host: &H)
    where
        H: FontHost<Font = F>,
    {
        self.bg = saturate(self.bg, 0, self.maxcol);
        self.fg = saturate(self.fg, 0, self.maxcol);
        self.fgbase = saturate(self.fg - self.fgoffset, 0, self.maxcol);
        self.fgoffset = self.fg - self.fgbase;

        self.fgpal = host.gcol_to_rgb(self.fg);
        self.bgpal = host.gcol_to_rgb(self.bg);
    }

    /// RGB values changed: re-derive the palette side, then run the
    /// palette update to set everything right.
    fn rgb_updated<H>(&mut self, host: &H)
    where
        H: FontHost<Font = F>,
    {
        self.bg = host.rgb_to_gcol(self.bgpal);
        self.fg = host.rgb_to_gcol(self.fgpal);
        self.fgbase = self.fg - self.fgoffset;
        self.gcol_updated(host);
    }
}
