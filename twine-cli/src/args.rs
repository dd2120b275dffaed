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

//! Hand-rolled command-line argument parsing.
//!
//! The front end only has one operand slot, so this is a far smaller
//! instance of the pattern the corpus's own shell front end uses for its own
//! (much larger) option grammar: walk `std::env::args()` once, no
//! argument-parsing crate.

use thiserror::Error;

/// Where the front end should read a script from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Source {
    /// No operand: read-eval-print stdin one line at a time.
    Stdin,
    /// One operand: evaluate the named file in a single call.
    File(String),
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("too many operands (expected at most one script file)")]
    TooManyOperands,
}

/// Parses the process's arguments (excluding argv\[0\]) into a [`Source`].
pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Source, Error> {
    let mut args = args.into_iter();
    let Some(path) = args.next() else {
        return Ok(Source::Stdin);
    };
    if args.next().is_some() {
        return Err(Error::TooManyOperands);
    }
    Ok(Source::File(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_operands_means_stdin() {
        assert_eq!(parse(Vec::<String>::new()).unwrap(), Source::Stdin);
    }

    #[test]
    fn one_operand_means_a_file() {
        assert_eq!(
            parse(["script.tw".to_owned()]).unwrap(),
            Source::File("script.tw".to_owned())
        );
    }

    #[test]
    fn extra_operands_are_rejected() {
        assert_eq!(
            parse(["a".to_owned(), "b".to_owned()]).unwrap_err(),
            Error::TooManyOperands
        );
    }
}
