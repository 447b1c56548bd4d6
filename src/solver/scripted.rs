//! A solver which follows a script, for testing procedures without a solver library.
//!
//! Each call to [solve](IncrementalSolver::solve) takes the next step of the (thread local) script.
//! And, every call made to any scripted solver is noted in a (thread local) journal.

use std::{cell::RefCell, collections::VecDeque};

use crate::{
    reports::Report,
    solver::IncrementalSolver,
    structures::{
        atom::Atom,
        literal::{IntLiteral, Literal},
    },
    types::err::{ErrorKind, SolverError},
};

/// A step of the script.
#[derive(Clone, Debug)]
pub enum Step {
    /// Refuse the next call to init.
    Refuse,

    /// Report satisfiable, with the given literals as the model.
    /// Any atom without a literal has no value.
    Sat(Vec<IntLiteral>),

    Unsat,

    Interrupted,
}

/// A call made to some scripted solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Init(usize),
    Clause(usize, Vec<IntLiteral>),
    Assume(usize, IntLiteral),
    Solve(usize),
    Release(usize),
}

thread_local! {
    static SCRIPT: RefCell<VecDeque<Step>> = const { RefCell::new(VecDeque::new()) };
    static JOURNAL: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
    static INSTANCES: RefCell<usize> = const { RefCell::new(0) };
}

/// Replaces the script, and clears the journal.
pub fn script(steps: Vec<Step>) {
    SCRIPT.with(|script| *script.borrow_mut() = steps.into());
    JOURNAL.with(|journal| journal.borrow_mut().clear());
    INSTANCES.with(|count| *count.borrow_mut() = 0);
}

/// The calls made since the script was set.
pub fn journal() -> Vec<Call> {
    JOURNAL.with(|journal| journal.borrow().clone())
}

/// Steps of the script which were not taken.
pub fn remaining() -> usize {
    SCRIPT.with(|script| script.borrow().len())
}

fn note(call: Call) {
    JOURNAL.with(|journal| journal.borrow_mut().push(call));
}

pub struct ScriptedSolver {
    id: usize,
    clause: Vec<IntLiteral>,
    model: Vec<IntLiteral>,
    terminate: Option<fn() -> bool>,
}

impl IncrementalSolver for ScriptedSolver {
    fn init() -> Result<Self, ErrorKind> {
        let refused = SCRIPT.with(|script| {
            let mut script = script.borrow_mut();
            match script.front() {
                Some(Step::Refuse) => {
                    script.pop_front();
                    true
                }
                _ => false,
            }
        });
        if refused {
            return Err(ErrorKind::from(SolverError::Initialisation));
        }

        let id = INSTANCES.with(|count| {
            let mut count = count.borrow_mut();
            *count += 1;
            *count
        });
        note(Call::Init(id));
        Ok(ScriptedSolver {
            id,
            clause: Vec::default(),
            model: Vec::default(),
            terminate: None,
        })
    }

    fn add(&mut self, literal_or_zero: IntLiteral) {
        match literal_or_zero {
            0 => note(Call::Clause(self.id, std::mem::take(&mut self.clause))),
            literal => self.clause.push(literal),
        }
    }

    fn assume(&mut self, literal: IntLiteral) {
        note(Call::Assume(self.id, literal));
    }

    fn solve(&mut self) -> Report {
        note(Call::Solve(self.id));
        if let Some(terminate) = self.terminate {
            if terminate() {
                return Report::Interrupted;
            }
        }
        let step = SCRIPT.with(|script| script.borrow_mut().pop_front());
        match step {
            Some(Step::Sat(model)) => {
                self.model = model;
                Report::Satisfiable
            }
            Some(Step::Unsat) => Report::Unsatisfiable,
            Some(Step::Interrupted) | Some(Step::Refuse) | None => Report::Interrupted,
        }
    }

    fn val(&self, atom: Atom) -> IntLiteral {
        self.model
            .iter()
            .find(|literal| literal.atom() == atom)
            .copied()
            .unwrap_or(0)
    }

    fn set_terminate(&mut self, callback: Option<fn() -> bool>) {
        self.terminate = callback;
    }
}

impl Drop for ScriptedSolver {
    fn drop(&mut self) {
        note(Call::Release(self.id));
    }
}
