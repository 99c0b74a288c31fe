//! Clearing the warning set, isolated in its own test binary.

use kata_common::warning::{clear_warnings, has_warned, warn_once};

#[test]
fn test_clear_warnings_forgets_everything() {
    warn_once("clear", "one");
    warn_once("clear", "two");
    assert!(has_warned("clear", "one"));

    clear_warnings();

    assert!(!has_warned("clear", "one"));
    assert!(!has_warned("clear", "two"));

    warn_once("clear", "one");
    assert!(has_warned("clear", "one"));
}
