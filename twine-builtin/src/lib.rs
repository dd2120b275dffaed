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

//! The minimal built-in command set pre-registered by [`new_interp`]: `set`,
//! `proc`, `return`, `upvar`, `list`, `error`. Each is a thin adapter that
//! parses its already-evaluated argument vector and calls straight into the
//! environment/value/procedure APIs; none of them introduce new core
//! concepts.
//!
//! `unknown` is deliberately not registered here: a missing command is a
//! plain `command not found` error unless a host registers its own
//! fallback.

pub mod error_cmd;
pub mod list;
pub mod proc_cmd;
pub mod return_cmd;
pub mod set;
pub mod upvar;

use std::rc::Rc;
use twine_semantics::Interp;

/// Constructs an interpreter with a fresh global frame and the built-in set
/// above pre-registered, matching the host-facing `new_interp()` contract.
#[must_use]
pub fn new_interp() -> Interp {
    let mut interp = Interp::new();
    interp.set_cmd("set", Some(Rc::new(set::Set)));
    interp.set_cmd("proc", Some(Rc::new(proc_cmd::ProcCmd)));
    interp.set_cmd("return", Some(Rc::new(return_cmd::ReturnCmd)));
    interp.set_cmd("upvar", Some(Rc::new(upvar::Upvar)));
    interp.set_cmd("list", Some(Rc::new(list::List)));
    interp.set_cmd("error", Some(Rc::new(error_cmd::ErrorCmd)));
    interp
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn set_then_get() {
        let mut interp = new_interp();
        let (v, err) = interp.eval_string("set x 5; set x");
        assert_eq!(err.is_none(), true);
        assert_eq!(v.as_string(), "5");
    }

    #[test]
    fn proc_call_with_return_and_positional_binding() {
        let mut interp = new_interp();
        let (v, err) = interp.eval_string(
            "proc add {a b} { return [set _sum [list $a $b]] }; add 3 4",
        );
        assert!(err.is_none());
        assert_eq!(v.as_string(), "3 4");
    }

    #[test]
    fn variadic_args_tail() {
        let mut interp = new_interp();
        let (v, err) = interp.eval_string("proc sum {args} { return $args }; sum 1 2 3 4");
        assert!(err.is_none());
        assert_eq!(v.as_string(), "1 2 3 4");
    }

    #[test]
    fn expand_splices_a_list_into_arguments() {
        let mut interp = new_interp();
        let (v, err) = interp.eval_string("set L {a b c}; list {*}$L d");
        assert!(err.is_none());
        assert_eq!(v.as_string(), "a b c d");
        assert_eq!(v.as_list().unwrap().len(), 4);
    }

    #[test]
    fn quoted_string_interpolates_variables() {
        let mut interp = new_interp();
        let (v, err) = interp.eval_string(r#"set s "hello $name""#);
        assert!(err.is_some());
        assert!(v.as_string().is_empty());

        interp.clear_error();
        let (_, err) = interp.eval_string("set name world");
        assert!(err.is_none());
        let (v, err) = interp.eval_string(r#"set s "hello $name""#);
        assert!(err.is_none());
        assert_eq!(v.as_string(), "hello world");
    }

    #[test]
    fn upvar_links_a_caller_frame_variable() {
        let mut interp = new_interp();
        let (v, err) = interp.eval_string(
            "proc outer {} { set v 1; inner }; \
             proc inner {} { upvar 1 v w; set w 42; return $w }; \
             outer",
        );
        assert!(err.is_none());
        assert_eq!(v.as_string(), "42");
        assert!(interp.get_var_raw("v").is_err());
    }

    #[test]
    fn missing_command_is_an_error() {
        let mut interp = new_interp();
        let (_, err) = interp.eval_string("nosuchcommand");
        assert_matches!(err, Some(twine_semantics::EvalError::CommandNotFound(name)) if name == "nosuchcommand");
    }

    #[test]
    fn error_builtin_fails_with_its_message() {
        let mut interp = new_interp();
        let (_, err) = interp.eval_string("error boom");
        assert_matches!(err, Some(twine_semantics::EvalError::User(msg)) if msg == "boom");
    }
}
