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

//! User-defined procedures: signature parsing and the call sequence that
//! binds arguments, runs the body, and always pops its frame.

use crate::divert::{Divert, Flow};
use crate::error::{EvalError, Result};
use crate::interp::{Command, Interp};
use std::ops::ControlFlow;
use std::rc::Rc;
use twine_syntax::syntax::Command as SynCommand;
use twine_value::Value;

/// One element of a procedure's argument signature.
enum ParamSpec {
    /// A required or defaulted positional parameter.
    Positional { name: String, default: Option<Value> },
    /// The variadic tail, only valid as the final spec, named `args`.
    Variadic,
}

impl ParamSpec {
    /// `is_final` gates the `args` variadic-tail interpretation: the name
    /// only means "capture the rest" in the last position of the signature.
    fn parse(spec: &Value, is_final: bool) -> Result<Self> {
        let elems = spec.as_list()?;
        match elems.as_slice() {
            [name] if is_final && name.as_string() == "args" => Ok(ParamSpec::Variadic),
            [name] => Ok(ParamSpec::Positional {
                name: name.as_string().to_owned(),
                default: None,
            }),
            [name, default] => Ok(ParamSpec::Positional {
                name: name.as_string().to_owned(),
                default: Some(default.clone()),
            }),
            _ => Err(EvalError::ArgCountMismatch),
        }
    }
}

/// A procedure registered by the `proc` built-in: a parsed signature plus a
/// body parsed once at definition time, per the "parse-once" design note.
pub struct Proc {
    params: Vec<ParamSpec>,
    body: Rc<[SynCommand]>,
}

impl Proc {
    /// Parses `args_spec` (itself a list value) and `body` (parsed eagerly,
    /// so a malformed body fails at definition time rather than on call).
    pub fn new(args_spec: &Value, body: &Value) -> Result<Self> {
        let spec_elems = args_spec.as_list()?;
        let last = spec_elems.len().saturating_sub(1);
        let params = spec_elems
            .iter()
            .enumerate()
            .map(|(i, spec)| ParamSpec::parse(spec, i == last))
            .collect::<Result<Vec<_>>>()?;
        let body = body.as_commands()?;
        Ok(Proc { params, body })
    }

    fn bind_args(&self, interp: &mut Interp, args: &[Value]) -> Result<()> {
        let mut remaining = args;
        for (i, param) in self.params.iter().enumerate() {
            match param {
                ParamSpec::Variadic => {
                    debug_assert_eq!(i, self.params.len() - 1, "args must be the final spec");
                    interp.set_var_raw("args", Value::from_list(remaining.iter().cloned()))?;
                    remaining = &[];
                }
                ParamSpec::Positional { name, default } => {
                    let value = match remaining.split_first() {
                        Some((head, tail)) => {
                            remaining = tail;
                            head.clone()
                        }
                        None => default
                            .clone()
                            .ok_or(EvalError::ArgCountMismatch)?,
                    };
                    interp.set_var_raw(name, value)?;
                }
            }
        }
        if !remaining.is_empty() {
            return Err(EvalError::ArgCountMismatch);
        }
        Ok(())
    }
}

impl Command for Proc {
    fn call(&self, interp: &mut Interp, args: &[Value]) -> Result<Flow> {
        interp.env_mut().push_frame();
        let result = self
            .bind_args(interp, args)
            .and_then(|()| interp.eval_commands(&self.body));
        interp
            .env_mut()
            .pop_frame()
            .expect("a frame pushed above is still on the chain");
        match result? {
            ControlFlow::Break(Divert::Return(v)) => Ok(ControlFlow::Continue(v)),
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twine_syntax::parser::parse_commands;

    /// Stand-in for the `return` built-in (which lives in a crate that
    /// depends on this one): sets the RETURN diversion with its one operand,
    /// or the empty value if called with none.
    struct TestReturn;

    impl Command for TestReturn {
        fn call(&self, _interp: &mut Interp, args: &[Value]) -> Result<Flow> {
            let v = args.first().cloned().unwrap_or_else(Value::empty);
            Ok(ControlFlow::Break(Divert::Return(v)))
        }
    }

    fn interp_with_return() -> Interp {
        let mut interp = Interp::new();
        interp.set_cmd("return", Some(Rc::new(TestReturn)));
        interp
    }

    fn value_list(strs: &[&str]) -> Value {
        Value::from_list(strs.iter().map(|s| Value::from_string(*s)))
    }

    #[test]
    fn binds_positional_and_variadic_args() {
        let body: Rc<[SynCommand]> = parse_commands("return $args").unwrap().into();
        let proc = Proc {
            params: vec![
                ParamSpec::Positional {
                    name: "a".into(),
                    default: None,
                },
                ParamSpec::Variadic,
            ],
            body,
        };
        let mut interp = interp_with_return();
        let result = proc
            .call(
                &mut interp,
                &[
                    Value::from_string("1"),
                    Value::from_string("2"),
                    Value::from_string("3"),
                ],
            )
            .unwrap();
        assert_eq!(result, ControlFlow::Continue(value_list(&["2", "3"])));
    }

    #[test]
    fn missing_required_arg_is_a_mismatch() {
        let body: Rc<[SynCommand]> = parse_commands("return ok").unwrap().into();
        let proc = Proc {
            params: vec![ParamSpec::Positional {
                name: "a".into(),
                default: None,
            }],
            body,
        };
        let mut interp = interp_with_return();
        assert!(matches!(
            proc.call(&mut interp, &[]),
            Err(EvalError::ArgCountMismatch)
        ));
    }

    #[test]
    fn default_is_used_when_arg_omitted() {
        let body: Rc<[SynCommand]> = parse_commands("return $a").unwrap().into();
        let proc = Proc {
            params: vec![ParamSpec::Positional {
                name: "a".into(),
                default: Some(Value::from_string("fallback")),
            }],
            body,
        };
        let mut interp = interp_with_return();
        let result = proc.call(&mut interp, &[]).unwrap();
        assert_eq!(
            result,
            ControlFlow::Continue(Value::from_string("fallback"))
        );
    }

    #[test]
    fn frame_is_popped_after_the_call() {
        let body: Rc<[SynCommand]> = parse_commands("return ok").unwrap().into();
        let proc = Proc {
            params: vec![ParamSpec::Positional {
                name: "a".into(),
                default: None,
            }],
            body,
        };
        let mut interp = interp_with_return();
        proc.call(&mut interp, &[Value::from_string("1")]).unwrap();
        assert!(interp.get_var_raw("a").is_err());
    }
}
