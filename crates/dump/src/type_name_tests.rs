// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rstest::rstest;

struct Local;

#[rstest]
#[case("alloc::vec::Vec<alloc::string::String>", "Vec<String>")]
#[case("i32", "i32")]
#[case("&str", "&str")]
#[case(
    "std::collections::hash::map::HashMap<alloc::string::String, core::option::Option<u8>>",
    "HashMap<String, Option<u8>>"
)]
#[case("fn(i32) -> alloc::rc::Rc<my_crate::Node>", "fn(i32) -> Rc<Node>")]
#[case("[u8; 4]", "[u8; 4]")]
fn test_shorten(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(shorten(raw), expected);
}

#[test]
fn test_type_name_of_local_type() {
    assert_eq!(type_name_of::<Local>(), "Local");
    assert_eq!(type_name_of::<Vec<Local>>(), "Vec<Local>");
}
