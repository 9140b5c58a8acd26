//! End-to-end painting scenarios against the scripted host: spacing
//! expansion, font changes, moves, transforms and underlines.

mod common;

use common::{bounds_rect, context_with_font_1, parse, PaintOp};
use fontstring::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn paint_plain_string() {
    let (mut host, mut context) = context_with_font_1();
    let sequence = parse(b"plain string");

    context.paint(&mut host, &sequence, None).unwrap();

    assert_eq!(context.x, 96.0);
    assert_eq!(context.y, 0.0);
    assert_eq!(
        host.paint_ops,
        vec![PaintOp::text(b"plain string", "Homerton", 0.0, 0.0, 0, 7)]
    );
}

#[test]
fn paint_with_word_spacing() {
    let (mut host, mut context) = context_with_font_1();
    let sequence = parse(b"plain string");

    context
        .paint(&mut host, &sequence, Some(Spacing::words(2, 0)))
        .unwrap();

    assert_eq!(context.x, 98.0);
    assert_eq!(
        host.paint_ops,
        vec![
            PaintOp::text(b"plain ", "Homerton", 0.0, 0.0, 0, 7),
            PaintOp::text(b"string", "Homerton", 50.0, 0.0, 0, 7),
        ]
    );
}

#[test]
fn paint_with_char_spacing() {
    let (mut host, mut context) = context_with_font_1();
    let sequence = parse(b"plain string");

    context
        .paint(&mut host, &sequence, Some(Spacing::chars(2, 0)))
        .unwrap();

    assert_eq!(context.x, 96.0 + 24.0);
    assert_eq!(context.y, 0.0);
    let expected: Vec<PaintOp> = b"plain string"
        .iter()
        .enumerate()
        .map(|(i, &byte)| PaintOp::text(&[byte], "Homerton", i as f64 * 10.0, 0.0, 0, 7))
        .collect();
    assert_eq!(host.paint_ops, expected);
}

#[test]
fn paint_with_word_and_char_spacing() {
    let (mut host, mut context) = context_with_font_1();
    let sequence = parse(b"plain string");

    context
        .paint(
            &mut host,
            &sequence,
            Some(Spacing::words(5, 0).with_chars(2, 0)),
        )
        .unwrap();

    assert_eq!(context.x, 96.0 + 5.0 + 24.0);
    // Characters step by 10; everything after the space is pushed a
    // further 5 along by the word offset.
    let xs: Vec<f64> = host
        .paint_ops
        .iter()
        .map(|op| match op {
            PaintOp::Text { x, .. } => *x,
            PaintOp::Underline { .. } => panic!("no underline expected"),
        })
        .collect();
    assert_eq!(
        xs,
        vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 65.0, 75.0, 85.0, 95.0, 105.0, 115.0]
    );
}

#[test]
fn paint_changes_font_mid_string() {
    let (mut host, mut context) = context_with_font_1();
    let sequence = parse(b"one\x1a\x02two");

    context.paint(&mut host, &sequence, None).unwrap();

    assert_eq!(context.x, 24.0 + 96.0);
    assert_eq!(
        host.paint_ops,
        vec![
            PaintOp::text(b"one", "Homerton", 0.0, 0.0, 0, 7),
            PaintOp::text(b"two", "Trinity", 24.0, 0.0, 0, 7),
        ]
    );
}

#[test]
fn paint_moves_cursor_between_strings() {
    let (mut host, mut context) = context_with_font_1();
    let sequence = parse(b"Move\x09\x80\x02\x00X\x0b\x00\x03\x00Y");

    context.paint(&mut host, &sequence, None).unwrap();

    assert_eq!(
        host.paint_ops,
        vec![
            PaintOp::text(b"Move", "Homerton", 0.0, 0.0, 0, 7),
            PaintOp::text(b"X", "Homerton", 32.0 + 640.0, 0.0, 0, 7),
            PaintOp::text(b"Y", "Homerton", 32.0 + 640.0 + 8.0, 768.0, 0, 7),
        ]
    );
    assert_eq!(context.x, 32.0 + 640.0 + 8.0 + 8.0);
    assert_eq!(context.y, 768.0);
    assert_eq!(bounds_rect(&context), Rect::new(0.0, 0.0, 688.0, 784.0));
}

#[test]
fn paint_with_italic_matrix() {
    let (mut host, mut context) = context_with_font_1();
    // 25% shear in the 2x2 block (16.16 fixed point)
    let sequence =
        parse(b"\x1b   \x00\x00\x01\x00\x00\x00\x00\x00\x00\x40\x00\x00\x00\x00\x01\x00Font");

    context.paint(&mut host, &sequence, None).unwrap();

    assert_eq!(
        host.paint_ops,
        vec![PaintOp::text(b"Font", "Homerton", 0.0, 0.0, 0, 7)]
    );
    // The shear widens the ink box but not the advance.
    assert_eq!(context.x, 32.0);
    assert_eq!(context.y, 0.0);
    assert_eq!(bounds_rect(&context), Rect::new(0.0, 0.0, 36.0, 16.0));
}

#[test]
fn paint_with_double_width_matrix() {
    let (mut host, mut context) = context_with_font_1();
    let sequence =
        parse(b"\x1b   \x00\x00\x02\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x01\x00Font");

    context.paint(&mut host, &sequence, None).unwrap();

    assert_eq!(
        host.paint_ops,
        vec![PaintOp::text(b"Font", "Homerton", 0.0, 0.0, 0, 7)]
    );
    assert_eq!(context.x, 64.0);
    assert_eq!(bounds_rect(&context), Rect::new(0.0, 0.0, 64.0, 16.0));
}

#[test]
fn paint_underlined_run() {
    let (mut host, mut context) = context_with_font_1();
    // pos -16/256ths, thickness 32/256ths of the 16-unit cell:
    // underline_pos -1, thickness 2
    let sequence = parse(b"\x19\xf0\x20underlined\x19\x00\x00off");

    context.paint(&mut host, &sequence, None).unwrap();

    assert_eq!(
        host.paint_ops,
        vec![
            PaintOp::underline(0.0, -3.0, 80.0, -1.0, 7),
            PaintOp::text(b"underlined", "Homerton", 0.0, 0.0, 0, 7),
            PaintOp::text(b"off", "Homerton", 80.0, 0.0, 0, 7),
        ]
    );
    assert_eq!(context.x, 104.0);
    assert_eq!(bounds_rect(&context), Rect::new(0.0, -3.0, 104.0, 16.0));
}

#[test]
fn paint_underline_spans_word_spacing_gap() {
    let (mut host, mut context) = context_with_font_1();
    let sequence = parse(b"\x19\xf0\x20underlined and\x19\x00\x00off");

    context
        .paint(&mut host, &sequence, Some(Spacing::words(5, 0)))
        .unwrap();

    assert_eq!(
        host.paint_ops,
        vec![
            PaintOp::underline(0.0, -3.0, 88.0, -1.0, 7),
            PaintOp::text(b"underlined ", "Homerton", 0.0, 0.0, 0, 7),
            // The word-spacing gap keeps the underline going...
            PaintOp::underline(88.0, -3.0, 93.0, -1.0, 7),
            // ...and "and" continues it from the far side of the gap.
            PaintOp::underline(93.0, -3.0, 117.0, -1.0, 7),
            PaintOp::text(b"and", "Homerton", 93.0, 0.0, 0, 7),
            PaintOp::text(b"off", "Homerton", 117.0, 0.0, 0, 7),
        ]
    );
    assert_eq!(context.x, 117.0 + 24.0);
    assert_eq!(bounds_rect(&context), Rect::new(0.0, -3.0, 141.0, 16.0));
}

#[test]
fn paint_comment_is_invisible() {
    let (mut host, mut context) = context_with_font_1();
    let sequence = parse(b"ab\x15hidden\x01cd");

    context.paint(&mut host, &sequence, None).unwrap();

    assert_eq!(
        host.paint_ops,
        vec![
            PaintOp::text(b"ab", "Homerton", 0.0, 0.0, 0, 7),
            PaintOp::text(b"cd", "Homerton", 16.0, 0.0, 0, 7),
        ]
    );
}

#[test]
fn paint_gcol_changes_colours() {
    let (mut host, mut context) = context_with_font_1();
    // bg=1, fg=2, offset=0 via the pair opcode
    let sequence = parse(b"\x12\x01\x02\x00tinted");

    context.paint(&mut host, &sequence, None).unwrap();

    assert_eq!(
        host.paint_ops,
        vec![PaintOp::text(b"tinted", "Homerton", 0.0, 0.0, 1, 2)]
    );
}

#[test]
fn paint_invalid_font_handle_is_an_error() {
    let (mut host, mut context) = context_with_font_1();
    let sequence = parse(b"ok\x1a\x63bad");

    let err = context.paint(&mut host, &sequence, None).unwrap_err();
    assert!(matches!(err, RenderError::InvalidFontHandle(99)));
    // Everything before the bad handle still painted.
    assert_eq!(
        host.paint_ops,
        vec![PaintOp::text(b"ok", "Homerton", 0.0, 0.0, 0, 7)]
    );
}
