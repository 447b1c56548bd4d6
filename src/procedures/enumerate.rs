//! Enumeration of the models of a formula, projected onto some atoms.
//!
//! # Overview
//!
//! The formula is added to a fresh solver, and then, until the solver reports unsatisfiable:
//! - The value of each atom of the projection is read from the solver, as determined by the [value convention](crate::config::ValueConvention).
//! - The model, as a literal for each atom of the projection, is returned.
//! - The negation of the model is added as a clause, blocking the model from being found again.
//!
//! As each model blocks itself, each model is distinct, and as the formula has finitely many models over the projection, enumeration always ends.
//!
//! # Laziness
//!
//! Models are found one at a time through a [ModelIterator], which owns its solver.
//! When the models are exhausted, on an error, or when the iterator is closed or dropped, the solver is released.
//! To enumerate again, a fresh iterator is required.
//!
//! ```rust,ignore
//! # use otter_prime::context::Context;
//! # use otter_prime::solver::ipasir::IpasirSolver;
//! let context = Context::default();
//! let formula = vec![vec![1, 2], vec![-1, -2]];
//!
//! let mut models = context.model_iterator::<IpasirSolver>(&formula, &[1, 2]).unwrap();
//! while let Some(model) = models.next_model().unwrap() {
//!     assert_eq!(model.iter().filter(|literal| literal.is_positive()).count(), 1);
//! }
//! assert!(models.is_exhausted());
//! ```

use crate::{
    config::ValueConvention,
    context::Context,
    governor::ResourceGovernor,
    misc::log::targets::{self},
    procedures::{load, satisfiable},
    solver::IncrementalSolver,
    structures::{
        atom::Atom,
        clause::{Clause, IntClause},
        formula::validate,
        literal::{IntLiteral, Literal},
        Model,
    },
    types::err::ErrorKind,
};

enum State<S> {
    Ready(S),
    Exhausted,
}

/// An iterator over the models of a formula, projected onto some atoms.
pub struct ModelIterator<S: IncrementalSolver> {
    state: State<S>,

    projection: Vec<Atom>,

    convention: ValueConvention,

    /// A count of models found.
    count: usize,

    /// A governor held for the life of the solver, if any.
    ///
    /// Declared after the state, so the solver is released first.
    governor: Option<ResourceGovernor>,
}

impl<S: IncrementalSolver> ModelIterator<S> {
    /// An iterator over the models of the formula, projected onto the given atoms.
    pub fn new(
        formula: &[IntClause],
        projection: &[Atom],
        convention: ValueConvention,
    ) -> Result<Self, ErrorKind> {
        validate(formula, projection)?;
        let solver = load::<S>(formula)?;

        Ok(ModelIterator {
            state: State::Ready(solver),
            projection: projection.to_vec(),
            convention,
            count: 0,
            governor: None,
        })
    }

    /// The next model, if there is some next model.
    ///
    /// After `Ok(None)`, or any error, the iterator is exhausted.
    pub fn next_model(&mut self) -> Result<Option<Model>, ErrorKind> {
        let solver = match &mut self.state {
            State::Ready(solver) => solver,
            State::Exhausted => return Ok(None),
        };

        match satisfiable(solver) {
            Ok(true) => {
                let model: Model = self
                    .projection
                    .iter()
                    .map(|&atom| IntLiteral::new(atom, self.convention.holds(solver.val(atom))))
                    .collect();

                solver.add_clause(model.negation());
                self.count += 1;
                log::debug!(target: targets::ENUMERATION, "Model {}: {model:?}", self.count);

                Ok(Some(model))
            }

            Ok(false) => {
                log::info!(target: targets::ENUMERATION, "Exhausted after {} models", self.count);
                self.close();
                Ok(None)
            }

            Err(e) => {
                log::info!(target: targets::ENUMERATION, "Stopped after {} models: {e}", self.count);
                self.close();
                Err(e)
            }
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted)
    }

    /// Releases the solver, and any governor held.
    pub fn close(&mut self) {
        self.state = State::Exhausted;
        self.governor = None;
    }
}

impl<S: IncrementalSolver> Iterator for ModelIterator<S> {
    type Item = Result<Model, ErrorKind>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_model().transpose()
    }
}

impl Context {
    /// The models of the formula, projected onto the given atoms, in the order found.
    pub fn enumerate_models<S: IncrementalSolver>(
        &self,
        formula: &[IntClause],
        projection: &[Atom],
    ) -> Result<Vec<Model>, ErrorKind> {
        validate(formula, projection)?;
        let convention = self.config.value_convention.value;

        self.governed(|| ModelIterator::<S>::new(formula, projection, convention)?.collect())
    }

    /// A lazy iterator over the models of the formula, projected onto the given atoms.
    ///
    /// The iterator holds a governor armed with the limits of the context until the iterator is exhausted, closed, or dropped.
    pub fn model_iterator<S: IncrementalSolver>(
        &self,
        formula: &[IntClause],
        projection: &[Atom],
    ) -> Result<ModelIterator<S>, ErrorKind> {
        validate(formula, projection)?;
        let governor = ResourceGovernor::arm(self.limits())?;

        let mut iterator =
            ModelIterator::<S>::new(formula, projection, self.config.value_convention.value)?;
        iterator.governor = Some(governor);
        Ok(iterator)
    }
}
