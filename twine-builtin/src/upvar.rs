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

//! The **`upvar`** built-in: creates an upward variable link.
//!
//! `upvar level their_name my_name` links `my_name` in the current frame to
//! `their_name` in the frame `level` steps up the chain.

use std::ops::ControlFlow;
use twine_semantics::{Command, EvalError, Flow, Interp};
use twine_value::Value;

pub struct Upvar;

impl Command for Upvar {
    fn call(&self, interp: &mut Interp, args: &[Value]) -> twine_semantics::Result<Flow> {
        let [level, their_name, my_name] = args else {
            return Err(EvalError::WrongArgs);
        };
        let level: usize = level
            .as_int()?
            .try_into()
            .map_err(|_| EvalError::WrongArgs)?;
        interp.link_var(level, their_name.as_string(), my_name.as_string())?;
        Ok(ControlFlow::Continue(Value::empty()))
    }
}
