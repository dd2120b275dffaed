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

//! The `twine` command-line front end.
//!
//! Links the core crate plus the built-in set, wires `stdin`/`stdout`/
//! `stderr` into the channel registry, and supports two invocation shapes:
//! no operands reads stdin one line at a time; one operand evaluates that
//! file in a single call.

mod args;

use args::Source;
use std::cell::RefCell;
use std::io::{self, BufRead, Read, Write};
use std::process::ExitCode;
use std::rc::Rc;
use twine_semantics::Interp;

/// The concrete handles stashed in the channel registry's `stdin`/`stdout`/
/// `stderr` slots. The core treats channel entries as opaque (`Rc<dyn Any>`);
/// a built-in that wants to read or write through one downcasts back to
/// these types.
pub struct Stdin(pub RefCell<io::Stdin>);
pub struct Stdout(pub RefCell<io::Stdout>);
pub struct Stderr(pub RefCell<io::Stderr>);

fn main() -> ExitCode {
    let source = match args::parse(std::env::args().skip(1)) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("twine: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut interp = twine_builtin::new_interp();
    register_channels(&mut interp);

    match source {
        Source::Stdin => {
            run_repl(&mut interp);
            ExitCode::SUCCESS
        }
        Source::File(path) => run_file(&mut interp, &path),
    }
}

/// Populates the channel registry's `stdin`/`stdout`/`stderr` slots, the
/// only channels the core itself promises to pre-populate.
fn register_channels(interp: &mut Interp) {
    interp.set_channel("stdin", Rc::new(Stdin(RefCell::new(io::stdin()))));
    interp.set_channel("stdout", Rc::new(Stdout(RefCell::new(io::stdout()))));
    interp.set_channel("stderr", Rc::new(Stderr(RefCell::new(io::stderr()))));
}

fn run_repl(interp: &mut Interp) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let (value, err) = interp.eval_string(&line);
        match err {
            Some(e) => eprintln!("{e}"),
            None => {
                let _ = writeln!(stdout, "{value}");
            }
        }
    }
}

fn run_file(interp: &mut Interp, path: &str) -> ExitCode {
    let mut contents = String::new();
    if let Err(e) = open_and_read(path, &mut contents) {
        eprintln!("twine: cannot open script file '{path}': {e}");
        return ExitCode::FAILURE;
    }
    let (_, err) = interp.eval_string(&contents);
    match err {
        Some(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
        None => ExitCode::SUCCESS,
    }
}

fn open_and_read(path: &str, out: &mut String) -> io::Result<()> {
    std::fs::File::open(path)?.read_to_string(out)?;
    Ok(())
}
