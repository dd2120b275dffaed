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

//! The polymorphic value object.
//!
//! A [`Value`] carries one canonical textual form plus up to five cached
//! alternate views (integer, list, parsed command list, parsed variable
//! reference, and an opaque slot for whatever expression tree a host-plugged
//! expression evaluator wants to cache). Once a view is computed it is
//! cached for the object's lifetime; values are logically immutable from the
//! caller's perspective, so mutation always creates a new `Value`.
//!
//! Cheap to clone: a `Value` is a reference-counted handle, so passing one
//! around an argument vector never deep-copies its cached views.

pub mod error;

pub use error::ValueError;

use std::any::Any;
use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;
use twine_syntax::syntax::{Command, VarRef};

/// A single logical value with lazily populated, memoizing cached views.
#[derive(Clone)]
pub struct Value(Rc<Inner>);

struct Inner {
    string: OnceCell<String>,
    int: OnceCell<i64>,
    list: OnceCell<Vec<Value>>,
    commands: OnceCell<Rc<[Command]>>,
    var_ref: OnceCell<Rc<VarRef>>,
    expr: OnceCell<Rc<dyn Any>>,
}

impl Inner {
    fn empty() -> Self {
        Inner {
            string: OnceCell::new(),
            int: OnceCell::new(),
            list: OnceCell::new(),
            commands: OnceCell::new(),
            var_ref: OnceCell::new(),
            expr: OnceCell::new(),
        }
    }
}

thread_local! {
    static SMALL_INTS: Vec<Value> = (0..256).map(Value::from_int_uncached).collect();
}

impl Value {
    /// Builds a value whose canonical string view is `s`.
    #[must_use]
    pub fn from_string(s: impl Into<String>) -> Self {
        let inner = Inner::empty();
        let _ = inner.string.set(s.into());
        Value(Rc::new(inner))
    }

    /// Builds a value whose canonical view is the integer `n`.
    ///
    /// Values for `n` in `[0, 256)` are interned: repeated calls with the
    /// same small `n` return the same underlying instance.
    #[must_use]
    pub fn from_int(n: i64) -> Self {
        if (0..256).contains(&n) {
            SMALL_INTS.with(|table| table[n as usize].clone())
        } else {
            Self::from_int_uncached(n)
        }
    }

    fn from_int_uncached(n: i64) -> Self {
        let inner = Inner::empty();
        let _ = inner.int.set(n);
        Value(Rc::new(inner))
    }

    /// Builds a value whose canonical view is the list `elems`.
    #[must_use]
    pub fn from_list(elems: impl IntoIterator<Item = Value>) -> Self {
        let inner = Inner::empty();
        let _ = inner.list.set(elems.into_iter().collect());
        Value(Rc::new(inner))
    }

    /// `true`/`false` are aliases for the interned `1`/`0` values.
    #[must_use]
    pub fn from_bool(b: bool) -> Self {
        Self::from_int(i64::from(b))
    }

    /// Returns the empty-string value (the result of an empty command).
    #[must_use]
    pub fn empty() -> Self {
        Self::from_string("")
    }

    /// Whether `a` and `b` are the exact same interned/shared instance.
    #[must_use]
    pub fn ptr_eq(a: &Value, b: &Value) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// The canonical string view, computing and caching it from whichever
    /// other view is populated if necessary.
    ///
    /// Every `Value` is guaranteed to have at least one populated view by
    /// construction, so this never fails.
    #[must_use]
    pub fn as_string(&self) -> &str {
        self.0.string.get_or_init(|| {
            if let Some(&n) = self.0.int.get() {
                n.to_string()
            } else if let Some(elems) = self.0.list.get() {
                let rendered: Vec<&str> = elems.iter().map(Value::as_string).collect();
                twine_quote::join(rendered)
            } else {
                unreachable!("malformed value: no canonical view populated")
            }
        })
    }

    /// Parses the string view as a base-10 integer, caching the result.
    pub fn as_int(&self) -> Result<i64, ValueError> {
        if let Some(&n) = self.0.int.get() {
            return Ok(n);
        }
        let s = self.as_string();
        let n: i64 = s
            .parse()
            .map_err(|_| ValueError::NotAnInteger(s.to_string()))?;
        let _ = self.0.int.set(n);
        Ok(n)
    }

    /// Parses the string view as a list, caching the resulting elements.
    pub fn as_list(&self) -> Result<Vec<Value>, ValueError> {
        if let Some(elems) = self.0.list.get() {
            return Ok(elems.clone());
        }
        let elems = twine_syntax::parser::parse_list_str(self.as_string())?
            .into_iter()
            .map(Value::from_string)
            .collect::<Vec<_>>();
        let _ = self.0.list.set(elems.clone());
        Ok(elems)
    }

    /// Parses the string view as a command list, caching the result.
    pub fn as_commands(&self) -> Result<Rc<[Command]>, ValueError> {
        if let Some(cmds) = self.0.commands.get() {
            return Ok(Rc::clone(cmds));
        }
        let cmds: Rc<[Command]> = twine_syntax::parser::parse_commands(self.as_string())?.into();
        let _ = self.0.commands.set(Rc::clone(&cmds));
        Ok(cmds)
    }

    /// Parses the string view as a variable reference, caching the result.
    pub fn as_var_ref(&self) -> Result<Rc<VarRef>, ValueError> {
        if let Some(vr) = self.0.var_ref.get() {
            return Ok(Rc::clone(vr));
        }
        let vr = Rc::new(twine_syntax::parser::var_ref_from_brace_body(
            self.as_string(),
        )?);
        let _ = self.0.var_ref.set(Rc::clone(&vr));
        Ok(vr)
    }

    /// `true` iff numeric and non-zero; otherwise the literal strings
    /// `false` and `no` are false and every other string is true.
    #[must_use]
    pub fn as_bool(&self) -> bool {
        if let Ok(n) = self.as_int() {
            return n != 0;
        }
        !matches!(self.as_string(), "false" | "no")
    }

    /// Generic hook for an externally supplied expression parser: caches
    /// whatever `parse` returns against this value's string view, keyed by
    /// `T`'s type so unrelated expression dialects don't collide.
    ///
    /// The core has no expression language of its own; this exists purely
    /// so a host-provided one can reuse this value's memoization instead of
    /// re-parsing on every evaluation.
    pub fn as_expr<T, E>(&self, parse: impl FnOnce(&str) -> Result<T, E>) -> Result<Rc<T>, E>
    where
        T: 'static,
    {
        if let Some(cached) = self.0.expr.get() {
            if let Ok(downcast) = Rc::clone(cached).downcast::<T>() {
                return Ok(downcast);
            }
        }
        let parsed = Rc::new(parse(self.as_string())?);
        let _ = self.0.expr.set(Rc::clone(&parsed) as Rc<dyn Any>);
        Ok(parsed)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({:?})", self.as_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.as_string() == other.as_string()
    }
}

impl Eq for Value {}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::from_string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::from_string(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::from_int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::from_bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn small_ints_are_interned() {
        assert!(Value::ptr_eq(&Value::from_int(5), &Value::from_int(5)));
        assert!(Value::ptr_eq(&Value::from_int(0), &Value::from_int(0)));
        assert!(Value::ptr_eq(&Value::from_int(255), &Value::from_int(255)));
    }

    #[test]
    fn large_ints_are_not_interned() {
        assert!(!Value::ptr_eq(
            &Value::from_int(1000),
            &Value::from_int(1000)
        ));
    }

    #[test]
    fn bool_aliases_are_the_interned_ints() {
        assert!(Value::ptr_eq(&Value::from_bool(true), &Value::from_int(1)));
        assert!(Value::ptr_eq(
            &Value::from_bool(false),
            &Value::from_int(0)
        ));
    }

    #[test]
    fn string_round_trip() {
        let v = Value::from_string("hello");
        assert_eq!(Value::from_string(v.as_string()).as_string(), v.as_string());
    }

    #[test]
    fn int_renders_base_10() {
        assert_eq!(Value::from_int(42).as_string(), "42");
        assert_eq!(Value::from_int(-7).as_string(), "-7");
    }

    #[test]
    fn as_int_parses_string_view() {
        assert_eq!(Value::from_string("42").as_int().unwrap(), 42);
    }

    #[test]
    fn as_int_error_message() {
        assert_matches!(
            Value::from_string("abc").as_int(),
            Err(ValueError::NotAnInteger(s)) if s == "abc"
        );
    }

    #[test]
    fn list_renders_with_brace_quoting() {
        let v = Value::from_list([Value::from_string("a"), Value::from_string("b c")]);
        assert_eq!(v.as_string(), "a {b c}");
    }

    #[test]
    fn list_round_trip_pointwise() {
        let xs = ["a", "b c", ""];
        let v = Value::from_list(xs.iter().map(|s| Value::from_string(*s)));
        let elems = v.as_list().unwrap();
        let rendered: Vec<&str> = elems.iter().map(Value::as_string).collect();
        assert_eq!(rendered, xs);
    }

    #[test]
    fn as_list_parses_string_view() {
        let v = Value::from_string("a {b c} d");
        let elems = v.as_list().unwrap();
        let rendered: Vec<&str> = elems.iter().map(Value::as_string).collect();
        assert_eq!(rendered, vec!["a", "b c", "d"]);
    }

    #[test]
    fn as_bool_numeric() {
        assert!(Value::from_int(1).as_bool());
        assert!(!Value::from_int(0).as_bool());
        assert!(Value::from_int(-3).as_bool());
    }

    #[test]
    fn as_bool_string_forms() {
        assert!(!Value::from_string("false").as_bool());
        assert!(!Value::from_string("no").as_bool());
        assert!(Value::from_string("yes").as_bool());
        assert!(Value::from_string("anything").as_bool());
    }

    #[test]
    fn as_var_ref_parses_global_and_index() {
        let vr = Value::from_string("::arr(1)").as_var_ref().unwrap();
        assert!(vr.is_global);
        assert_eq!(vr.name, "arr");
        assert!(vr.index.is_some());
    }

    #[test]
    fn as_commands_parses_string_view() {
        let cmds = Value::from_string("set a 1; set b 2").as_commands().unwrap();
        assert_eq!(cmds.len(), 2);
    }

    #[test]
    fn as_expr_caches_by_type() {
        let v = Value::from_string("1 + 1");
        let parsed: Rc<i64> = v
            .as_expr(|s| Ok::<i64, ()>(s.len() as i64))
            .unwrap();
        assert_eq!(*parsed, 5);
        let cached: Rc<i64> = v.as_expr::<i64, ()>(|_| unreachable!("must hit cache")).unwrap();
        assert!(Rc::ptr_eq(&parsed, &cached));
    }

    #[test]
    fn caching_is_stable_across_repeated_calls() {
        let v = Value::from_string("a b");
        let first = v.as_list().unwrap();
        let second = v.as_list().unwrap();
        assert_eq!(first, second);
    }
}
