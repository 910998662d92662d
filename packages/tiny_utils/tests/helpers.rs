//! Exercises the public surface of the crate the way a caller would, through the crate root.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tiny_utils::text::{CaptureOptions, Console, PrintMode, Sink};
use tiny_utils::{
    ErrorKind, Tag, TagFilter, check_non_null, circular, not_implemented, pick_one,
    pick_one_optional, randomly, require, require_state, timing,
};

#[test]
fn require_formats_message_lazily() {
    let error = require!(false, "{}.{}", "X", 42).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    assert_eq!(error.message(), Some("X.42"));
    assert_eq!(error.to_string(), "invalid argument: X.42");

    let mut formatted = false;
    require!(true, "{}", {
        formatted = true;
        "never"
    })
    .unwrap();

    assert!(!formatted);
}

#[test]
fn each_assertion_has_its_own_kind() {
    assert_eq!(
        require_state!(false).unwrap_err().kind(),
        ErrorKind::InvalidState
    );
    let unfinished: Result<(), _> = not_implemented!();
    assert_eq!(unfinished.unwrap_err().kind(), ErrorKind::NotImplemented);
    assert_eq!(
        check_non_null(None::<u8>).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(check_non_null(Some(7)).unwrap(), 7);
}

#[test]
fn circular_repeats_in_order() {
    let items = ["A", "B", "C"];

    let taken: Vec<_> = circular(items).take(7).collect();

    assert_eq!(taken, ["A", "B", "C", "A", "B", "C", "A"]);
}

#[test]
fn randomly_only_yields_given_items() {
    let items = [1, 2, 3];

    let taken: Vec<_> = randomly(items, StdRng::seed_from_u64(7)).take(100).collect();

    assert_eq!(taken.len(), 100);
    assert!(taken.iter().all(|n| items.contains(n)));
}

#[test]
fn picking_from_empty() {
    let mut rng = StdRng::seed_from_u64(7);

    assert_eq!(pick_one_optional(Vec::<u8>::new(), &mut rng), None);
    assert_eq!(
        pick_one(Vec::<u8>::new(), &mut rng).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(pick_one([9], &mut rng).unwrap(), 9);
}

#[test]
fn tags_filter_tests() {
    let filter = TagFilter::new().include(Tag::Fast);

    assert!(filter.accepts([Tag::Fast, Tag::Async]));
    assert!(!filter.accepts([Tag::NoTimeout]));
}

#[test]
fn text_is_reexported() {
    let console = Console::builder().out(Sink::from_writer(std::io::sink())).build();

    let captured = console
        .capture(CaptureOptions::new(), || {
            PrintMode::Thread.println_to(&console, "hi")
        })
        .unwrap();

    captured.value().as_ref().unwrap();
    assert!(captured.text().ends_with(": hi\n"));
}

#[test]
fn timing_is_reexported() {
    let timed = timing::measure(|| 42);

    assert_eq!(*timed.value(), 42);
    assert!(timed.elapsed_seconds() >= 0.0);
}
