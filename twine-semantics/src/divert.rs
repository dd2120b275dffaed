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

//! The non-local outcomes a command can produce besides a plain value.
//!
//! Mirrors the OK/ERR/RETURN/BREAK/CONTINUE status codes: a successful,
//! non-diverting command maps to `ControlFlow::Continue(value)`, while
//! RETURN/BREAK/CONTINUE map to `ControlFlow::Break(Divert)`. ERR maps to
//! the `Result`'s `Err` side, one level up, so the two orthogonal axes
//! (failure vs. control transfer) don't collapse into one status enum.

use std::ops::ControlFlow;
use twine_value::Value;

#[derive(Clone, Debug, PartialEq)]
pub enum Divert {
    /// `return [value]` inside a procedure body.
    Return(Value),
    /// Consumed by a looping command; uncaught at the top level.
    Break,
    /// Consumed by a looping command; uncaught at the top level.
    Continue,
}

impl Divert {
    /// The status name used in the synthetic "uncaught error" message.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Divert::Return(_) => "RETURN",
            Divert::Break => "BREAK",
            Divert::Continue => "CONTINUE",
        }
    }
}

/// The result of evaluating one command or token on success: either a plain
/// value, or a diversion that must be handled (or propagated) by the caller.
pub type Flow = ControlFlow<Divert, Value>;
