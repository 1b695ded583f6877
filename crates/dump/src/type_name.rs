// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Short, path-free type names.

use regex::Regex;
use std::sync::LazyLock;

/// Module path prefixes such as `alloc::vec::` or `my_crate::model::`.
static PATH_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(?:[A-Za-z_][A-Za-z0-9_]*::)+").ok());

/// Name of `T` with module paths stripped, e.g. `Vec<String>`.
pub fn type_name_of<T: ?Sized>() -> String {
    shorten(std::any::type_name::<T>())
}

pub(crate) fn shorten(name: &str) -> String {
    match PATH_PREFIX.as_ref() {
        Some(re) => re.replace_all(name, "").into_owned(),
        None => name.to_string(),
    }
}

#[cfg(test)]
#[path = "type_name_tests.rs"]
mod tests;
