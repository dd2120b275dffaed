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

//! The **`return`** built-in: sets the RETURN diversion.
//!
//! Caught only by the procedure call wrapper ([`twine_semantics::Proc`]),
//! which rewrites it to a plain OK result on the way out.

use std::ops::ControlFlow;
use twine_semantics::{Command, Divert, EvalError, Flow, Interp};
use twine_value::Value;

pub struct ReturnCmd;

impl Command for ReturnCmd {
    fn call(&self, _interp: &mut Interp, args: &[Value]) -> twine_semantics::Result<Flow> {
        match args {
            [] => Ok(ControlFlow::Break(Divert::Return(Value::empty()))),
            [v] => Ok(ControlFlow::Break(Divert::Return(v.clone()))),
            _ => Err(EvalError::WrongArgs),
        }
    }
}
