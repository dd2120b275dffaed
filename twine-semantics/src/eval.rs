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

//! Command dispatch, word substitution, and `{*}` argument expansion.

use crate::divert::{Divert, Flow};
use crate::error::{EvalError, Result};
use crate::interp::Interp;
use std::ops::ControlFlow;
use twine_syntax::syntax::{Command as SynCommand, QuotedPart, Token};
use twine_value::Value;

impl Interp {
    /// Evaluates a command list in order, stopping at the first error or
    /// diversion. The final `Continue` carries the last command's result.
    pub fn eval_commands(&mut self, commands: &[SynCommand]) -> Result<Flow> {
        let mut last = Value::empty();
        for cmd in commands {
            match self.eval_command(cmd)? {
                ControlFlow::Continue(v) => last = v,
                flow @ ControlFlow::Break(_) => return Ok(flow),
            }
        }
        Ok(ControlFlow::Continue(last))
    }

    pub fn eval_command(&mut self, cmd: &SynCommand) -> Result<Flow> {
        if cmd.is_empty() {
            return Ok(ControlFlow::Continue(Value::empty()));
        }
        let args = match self.eval_args(&cmd.words)? {
            ControlFlow::Continue(args) => args,
            ControlFlow::Break(d) => return Ok(ControlFlow::Break(d)),
        };
        let name = args[0].as_string().to_owned();
        if let Some(command) = self.lookup_cmd(&name) {
            return command.call(self, &args[1..]);
        }
        if let Some(unknown) = self.lookup_cmd("unknown") {
            return unknown.call(self, &args);
        }
        Err(EvalError::CommandNotFound(name))
    }

    /// Evaluates each word left to right, splicing `{*}`-marked results into
    /// the output vector. The vector's length isn't known up front since an
    /// expansion may yield any number of elements.
    fn eval_args(&mut self, words: &[Token]) -> Result<ControlFlow<Divert, Vec<Value>>> {
        let mut out = Vec::with_capacity(words.len());
        for word in words {
            match self.eval_token(word)? {
                ControlFlow::Continue(v) => {
                    if word.is_expand() {
                        out.extend(v.as_list()?);
                    } else {
                        out.push(v);
                    }
                }
                ControlFlow::Break(d) => return Ok(ControlFlow::Break(d)),
            }
        }
        Ok(ControlFlow::Continue(out))
    }

    /// Evaluates a single token to a value, or propagates a diversion that
    /// arose from a nested sub-command.
    pub(crate) fn eval_token(&mut self, token: &Token) -> Result<Flow> {
        match token {
            Token::Literal(s) | Token::Block(s) => Ok(ControlFlow::Continue(Value::from_string(s.as_str()))),
            Token::Quoted(parts) => self.eval_quoted(parts),
            Token::VarRef(vr) => Ok(ControlFlow::Continue(self.get_var(vr)?)),
            Token::SubCommand(cmd) => self.eval_command(cmd),
            Token::Expand(inner) => self.eval_token(inner),
        }
    }

    fn eval_quoted(&mut self, parts: &[QuotedPart]) -> Result<Flow> {
        let mut out = String::new();
        for part in parts {
            match part {
                QuotedPart::Raw(s) => out.push_str(s),
                QuotedPart::VarRef(vr) => out.push_str(self.get_var(vr)?.as_string()),
                QuotedPart::SubCommand(cmd) => match self.eval_command(cmd)? {
                    ControlFlow::Continue(v) => out.push_str(v.as_string()),
                    ControlFlow::Break(d) => return Ok(ControlFlow::Break(d)),
                },
            }
        }
        Ok(ControlFlow::Continue(Value::from_string(out)))
    }
}
