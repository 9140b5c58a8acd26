//! End-to-end sizing scenarios: plain measurement, split counting, wrap
//! limits and the character-wise re-scan.

mod common;

use common::{bounds_rect, context_with_font_1, parse};
use fontstring::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn size_plain_string() {
    let (host, mut context) = context_with_font_1();
    let sequence = parse(b"plain string");

    let outcome = context
        .size(&host, &sequence, &SizeOptions::default())
        .unwrap();

    assert_eq!(outcome, SizeOutcome { index: 12, splits: 12 });
    assert_eq!(context.x, 96.0);
    assert_eq!(context.y, 0.0);
    assert_eq!(bounds_rect(&context), Rect::new(0.0, 0.0, 96.0, 16.0));
}

#[test]
fn size_with_word_spacing_and_split() {
    let (host, mut context) = context_with_font_1();
    let sequence = parse(b"plain string");

    let outcome = context
        .size(
            &host,
            &sequence,
            &SizeOptions::default()
                .with_spacing(Spacing::words(5, 0))
                .with_split(Split::At(b' ')),
        )
        .unwrap();

    assert_eq!(outcome, SizeOutcome { index: 12, splits: 1 });
    assert_eq!(context.x, 101.0);
    assert_eq!(bounds_rect(&context), Rect::new(0.0, 0.0, 101.0, 16.0));
}

#[test]
fn size_counts_split_records() {
    let (host, mut context) = context_with_font_1();
    let sequence = parse(b"plain string");

    let outcome = context
        .size(
            &host,
            &sequence,
            &SizeOptions::default().with_split(Split::At(b' ')),
        )
        .unwrap();

    assert_eq!(outcome, SizeOutcome { index: 12, splits: 1 });
    assert_eq!(context.x, 96.0);
    assert_eq!(bounds_rect(&context), Rect::new(0.0, 0.0, 96.0, 16.0));
}

#[test]
fn size_wraps_at_split_point() {
    let (host, mut context) = context_with_font_1();
    let sequence = parse(b"words. lots of words.");

    let outcome = context
        .size(
            &host,
            &sequence,
            &SizeOptions::default()
                .with_limits(64.0, 0.0)
                .with_split(Split::At(b' ')),
        )
        .unwrap();

    // "words. " fits; "lots" would overrun, so the context rewinds to the
    // split point after the space.
    assert_eq!(outcome, SizeOutcome { index: 7, splits: 1 });
    assert_eq!(context.x, 56.0);
    assert_eq!(context.y, 0.0);
    assert_eq!(bounds_rect(&context), Rect::new(0.0, 0.0, 56.0, 16.0));
}

#[test]
fn size_without_split_rescans_by_character() {
    let (host, mut context) = context_with_font_1();
    let sequence = parse(b"words. lots of words.");

    let outcome = context
        .size(
            &host,
            &sequence,
            &SizeOptions::default().with_limits(64.0, 0.0),
        )
        .unwrap();

    // Exactly eight characters fit in 64 millipoints.
    assert_eq!(outcome, SizeOutcome { index: 8, splits: 8 });
    assert_eq!(context.x, 64.0);
    assert_eq!(bounds_rect(&context), Rect::new(0.0, 0.0, 64.0, 16.0));
}

#[test]
fn size_with_font_change() {
    let (host, mut context) = context_with_font_1();
    let sequence = parse(b"one\x1a\x02two");

    let outcome = context
        .size(&host, &sequence, &SizeOptions::default())
        .unwrap();

    assert_eq!(outcome, SizeOutcome { index: 8, splits: 6 });
    assert_eq!(context.x, 24.0 + 96.0);
    assert_eq!(bounds_rect(&context), Rect::new(0.0, 0.0, 120.0, 32.0));
}

#[test]
fn size_is_idempotent() {
    let (host, mut context) = context_with_font_1();
    let sequence = parse(b"words. lots of words.");
    let options = SizeOptions::default()
        .with_limits(64.0, 0.0)
        .with_split(Split::At(b' '));

    let first = context.size(&host, &sequence, &options).unwrap();
    let first_bounds = context.bounds;
    let second = context.size(&host, &sequence, &options).unwrap();

    assert_eq!(first, second);
    assert_eq!(context.bounds, first_bounds);
}

#[test]
fn size_first_word_too_wide_returns_split_origin() {
    let (host, mut context) = context_with_font_1();
    let sequence = parse(b"enormous word");

    let outcome = context
        .size(
            &host,
            &sequence,
            &SizeOptions::default()
                .with_limits(32.0, 0.0)
                .with_split(Split::At(b' ')),
        )
        .unwrap();

    // No split point was ever passed, so nothing fits.
    assert_eq!(outcome, SizeOutcome { index: 0, splits: 0 });
    assert_eq!(context.x, 0.0);
}

#[test]
fn size_y_limit_stops_vertical_overflow() {
    let (host, mut context) = context_with_font_1();
    // Move down 100 between the words.
    let sequence = parse(b"ab\x0b\x64\x00\x00cd");

    let outcome = context
        .size(
            &host,
            &sequence,
            &SizeOptions::default().with_limits(1000.0, 50.0),
        )
        .unwrap();

    // The y move itself crosses the limit; measuring stops after "ab".
    assert_eq!(outcome, SizeOutcome { index: 2, splits: 2 });
    assert_eq!(context.x, 16.0);
    assert_eq!(context.y, 0.0);
}

#[test]
fn size_resumes_after_wrap() {
    let (host, mut context) = context_with_font_1();
    let sequence = parse(b"words. lots of words.");
    let options = SizeOptions::default()
        .with_limits(64.0, 0.0)
        .with_split(Split::At(b' '));

    let first = context.size(&host, &sequence, &options).unwrap();
    assert_eq!(first.index, 7);

    // Measure the remainder as the next line: "lots of " fits exactly.
    let rest = parse(&b"words. lots of words."[first.index..]);
    let second = context.size(&host, &rest, &options).unwrap();
    assert_eq!(second, SizeOutcome { index: 8, splits: 2 });
    assert_eq!(context.x, 64.0);
}
