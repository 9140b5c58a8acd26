//! Record application, painting, and the wrap/split measuring engine.

use fontstring_core::{Rect, Spacing, TextMetrics};
use fontstring_parser::{Control, ControlKind, ControlSequence, Split};

use crate::context::{ColourSelection, FontContext, UNLIMITED};
use crate::error::RenderResult;
use crate::host::FontHost;

/// Options for [`FontContext::size`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeOptions {
    /// Extra word/character spacing to inject while measuring.
    pub spacing: Option<Spacing>,
    /// Layout limits `(x, y)`; `None` means effectively unlimited.
    pub limits: Option<(f64, f64)>,
    /// Split mode for the wrap search.
    pub split: Option<Split>,
}

impl SizeOptions {
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn with_limits(mut self, x: f64, y: f64) -> Self {
        self.limits = Some((x, y));
        self
    }

    pub fn with_split(mut self, split: Split) -> Self {
        self.split = Some(split);
        self
    }
}

/// Result of a [`FontContext::size`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeOutcome {
    /// Source byte index just past the last record (or split point) that
    /// fit within the limits.
    pub index: usize,
    /// Number of split events passed: characters when no split mode is
    /// set, otherwise matching split records.
    pub splits: usize,
}

impl<F: Clone> FontContext<F> {
    /// The size tuple a record contributes under the current context:
    /// ink bounding box plus cursor advance.
    ///
    /// Text metrics come from the host and have the render transform
    /// applied; plain and synthetic moves advance without ink; every other
    /// record is zero-sized.
    pub fn control_metrics<H>(&self, host: &H, control: &Control) -> TextMetrics
    where
        H: FontHost<Font = F>,
    {
        match &control.kind {
            ControlKind::Text(text) => host
                .font_bounds(self, Some(text))
                .transformed(&self.transform),
            ControlKind::Move { dx, dy }
            | ControlKind::MoveChar { dx, dy }
            | ControlKind::MoveSpace { dx, dy } => {
                TextMetrics::advance(f64::from(*dx), f64::from(*dy))
            }
            _ => TextMetrics::ZERO,
        }
    }

    /// Apply a record to the context: perform its state change, union its
    /// ink box (at the cursor) into the bounds, and advance the cursor.
    pub fn apply_control<H>(&mut self, host: &H, control: &Control) -> RenderResult<TextMetrics>
    where
        H: FontHost<Font = F>,
    {
        match &control.kind {
            ControlKind::Gcol { fg, bg, offset } => {
                self.select_colour(
                    host,
                    &ColourSelection {
                        fg: fg.map(i32::from),
                        bg: bg.map(i32::from),
                        fgoffset: offset.map(i32::from),
                        ..ColourSelection::default()
                    },
                );
            }
            ControlKind::Rgb { fg, bg, offset } => {
                self.select_colour(
                    host,
                    &ColourSelection {
                        fgpal: *fg,
                        bgpal: *bg,
                        fgoffset: offset.map(i32::from),
                        ..ColourSelection::default()
                    },
                );
            }
            ControlKind::Underline { pos, thickness } => {
                // Wire units are 1/256ths of the font cell height.
                let cell = host.font_bounds(self, None);
                let multiplier = cell.y1 / 256.0;
                self.underline_pos = f64::from(*pos) * multiplier;
                self.underline_thickness = f64::from(*thickness) * multiplier;
            }
            ControlKind::Font { handle } => self.select_font(host, *handle)?,
            // The matrix replaces the transform; there is no stack.
            ControlKind::Matrix(matrix) => self.transform = *matrix,
            ControlKind::Text(_)
            | ControlKind::Move { .. }
            | ControlKind::MoveChar { .. }
            | ControlKind::MoveSpace { .. }
            | ControlKind::Comment(_) => {}
        }

        let metrics = self.control_metrics(host, control);
        self.advance(metrics);
        Ok(metrics)
    }

    /// Union a record's ink box into the bounds and step the cursor.
    fn advance(&mut self, metrics: TextMetrics) {
        self.bounds += Rect::new(
            self.x + metrics.x0,
            self.y + metrics.y0,
            self.x + metrics.x1,
            self.y + metrics.y1,
        );
        self.x += metrics.dx;
        self.y += metrics.dy;
    }

    /// Draw the underline bar across the next `advance_dx` millipoints of
    /// cursor travel, when underlining is enabled.
    ///
    /// The bar is axis-aligned even under a sheared or rotated transform.
    fn underline_gap<H>(&mut self, host: &mut H, advance_dx: f64)
    where
        H: FontHost<Font = F>,
    {
        if self.underline_thickness == 0.0 {
            return;
        }
        let rect = Rect::new(
            self.x,
            self.y + self.underline_pos - self.underline_thickness,
            self.x + advance_dx,
            self.y + self.underline_pos,
        );
        host.draw_underline(self, rect);
        self.bounds += rect;
    }

    /// Paint a record: like [`apply_control`](Self::apply_control), but
    /// text renders its underline then its glyphs, and the synthetic
    /// spacing moves carry the underline across their gap.
    pub fn paint_control<H>(&mut self, host: &mut H, control: &Control) -> RenderResult<()>
    where
        H: FontHost<Font = F>,
    {
        match &control.kind {
            ControlKind::Text(text) => {
                let metrics = self.control_metrics(host, control);
                self.underline_gap(host, metrics.dx);
                host.font_paint(self, text);
                self.advance(metrics);
                Ok(())
            }
            ControlKind::MoveChar { .. } | ControlKind::MoveSpace { .. } => {
                let metrics = self.control_metrics(host, control);
                self.underline_gap(host, metrics.dx);
                self.advance(metrics);
                Ok(())
            }
            _ => self.apply_control(host, control).map(|_| ()),
        }
    }

    /// Paint a sequence, clearing bounds and underline first.
    pub fn paint<H>(
        &mut self,
        host: &mut H,
        sequence: &ControlSequence,
        spacing: Option<Spacing>,
    ) -> RenderResult<()>
    where
        H: FontHost<Font = F>,
    {
        self.clear_bounds();
        self.clear_underline();

        for control in sequence.apply_spacing(spacing, None) {
            log::trace!("painting {control}");
            self.paint_control(host, &control)?;
        }
        Ok(())
    }

    /// Measure a sequence, wrapping at the given limits.
    ///
    /// The cursor is rebased to the origin and bounds and underline are
    /// cleared before the walk. Each expanded record is applied in turn;
    /// when the cursor passes a limit the context backtracks: to the last
    /// accepted split point when a split byte is set, otherwise to just
    /// before the offending record, re-scanning an overlong text record
    /// character by character to find the exact overflow point.
    ///
    /// Returns the source index where measuring stopped and the number of
    /// split events passed; the context is left at the reported position,
    /// so a caller can resume from there for the next line.
    pub fn size<H>(
        &mut self,
        host: &H,
        sequence: &ControlSequence,
        options: &SizeOptions,
    ) -> RenderResult<SizeOutcome>
    where
        H: FontHost<Font = F>,
    {
        self.size_continued(host, sequence, options, false)
    }

    fn size_continued<H>(
        &mut self,
        host: &H,
        sequence: &ControlSequence,
        options: &SizeOptions,
        continued: bool,
    ) -> RenderResult<SizeOutcome>
    where
        H: FontHost<Font = F>,
    {
        if !continued {
            self.x = 0.0;
            self.y = 0.0;
            self.clear_bounds();
            self.clear_underline();

            let (limit_x, limit_y) = options.limits.unwrap_or((UNLIMITED, UNLIMITED));
            self.limit_x = limit_x;
            self.limit_y = limit_y;
        }

        let mut last_context = self.clone();
        let mut last_split_point = self.clone();
        let mut last_split_index = 0usize;
        let mut last_index = 0usize;
        let mut last_splits_seen = 0usize;

        for control in sequence.apply_spacing(options.spacing, options.split) {
            last_context.clone_from(self);
            log::trace!("applying {control}");
            self.apply_control(host, &control)?;

            let mut splits_seen = 0usize;
            let mut text_len = 0usize;
            if let ControlKind::Text(text) = &control.kind {
                text_len = text.len();
                match options.split {
                    None => splits_seen = text.len(),
                    Some(split) if split.matches(text) => splits_seen = 1,
                    Some(_) => {}
                }
            }

            if self.beyond_limits() {
                log::trace!("limit exceeded after {control}");
                if let Some(Split::At(_)) = options.split {
                    // Cheap wrap: rewind to the last accepted split point.
                    self.clone_from(&last_split_point);
                    return Ok(SizeOutcome {
                        index: last_split_index,
                        splits: last_splits_seen,
                    });
                }
                if text_len > 1 {
                    // Re-scan the offending record character by character
                    // to find exactly where the limit was crossed.
                    let mut sub = ControlSequence::new();
                    sub.push(control.clone());
                    let rescan = SizeOptions {
                        spacing: None,
                        limits: None,
                        split: Some(Split::Every),
                    };
                    let outcome = last_context.size_continued(host, &sub, &rescan, true)?;
                    last_index = outcome.index;
                    last_splits_seen += outcome.splits;
                }
                self.clone_from(&last_context);
                return Ok(SizeOutcome {
                    index: last_index,
                    splits: last_splits_seen,
                });
            }

            if splits_seen > 0 && options.split.is_some() {
                last_split_point.clone_from(self);
                last_split_index = control.span.end;
            }
            last_index = control.span.end;
            last_splits_seen += splits_seen;
        }

        Ok(SizeOutcome {
            index: last_index,
            splits: last_splits_seen,
        })
    }

    fn beyond_limits(&self) -> bool {
        self.x > self.limit_x || self.y > self.limit_y
    }
}
