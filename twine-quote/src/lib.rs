// This file is part of twine, an embeddable command-oriented scripting
// language interpreter.
// Copyright (C) 2026 The Twine Authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Quoting for the list-to-string serialization rule.
//!
//! A list renders by joining the string form of each element with single
//! spaces. An element that would be misread as more than one word when
//! split on whitespace (because it is empty or contains a space, tab,
//! newline, or vertical tab) is wrapped in braces instead. No other
//! quoting is performed at this layer: backslash escaping is a concern of
//! the parser, not of list serialization.
//!
//! ```
//! # use twine_quote::quote;
//! assert_eq!(quote("foo"), "foo");
//! assert_eq!(quote(""), "{}");
//! assert_eq!(quote("a b"), "{a b}");
//! ```

/// Returns `s` unchanged if it needs no quoting to survive a round trip
/// through list parsing, or `s` wrapped in braces otherwise.
#[must_use]
pub fn quote(s: &str) -> String {
    if needs_quoting(s) {
        let mut out = String::with_capacity(s.len() + 2);
        out.push('{');
        out.push_str(s);
        out.push('}');
        out
    } else {
        s.to_owned()
    }
}

/// Joins the string forms of `elems` into one list-serialized string.
#[must_use]
pub fn join<I, S>(elems: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    elems
        .into_iter()
        .map(|e| quote(e.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn needs_quoting(s: &str) -> bool {
    s.is_empty() || s.chars().any(is_list_space)
}

fn is_list_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_word_is_untouched() {
        assert_eq!(quote("hello"), "hello");
    }

    #[test]
    fn empty_string_is_braced() {
        assert_eq!(quote(""), "{}");
    }

    #[test]
    fn internal_space_is_braced() {
        assert_eq!(quote("a b"), "{a b}");
        assert_eq!(quote("a\tb"), "{a\tb}");
        assert_eq!(quote("a\nb"), "{a\nb}");
        assert_eq!(quote("a\x0bb"), "{a\x0bb}");
    }

    #[test]
    fn join_renders_a_list() {
        assert_eq!(join(["a", "b c", ""]), "a {b c} {}");
    }

    #[test]
    fn join_of_empty_is_empty_string() {
        assert_eq!(join(Vec::<&str>::new()), "");
    }
}
