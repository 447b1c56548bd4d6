//! Model enumeration and prime implicant extraction over incremental SAT solvers.
//!
//! otter_prime drives an external incremental solver, through the [IPASIR](https://github.com/biotomas/ipasir) protocol, to answer three questions about a formula in conjunctive normal form:
//! - What are the satisfying assignments of the formula, projected onto some atoms? (See [enumerate](crate::procedures::enumerate).)
//! - What are the prime implicants of the formula with respect to some input atoms? Computed either with a single, destructively narrowed, solver (see [prime_implicants](crate::procedures::prime_implicants)), or with a persistent enumerator paired with a fresh minimising solver for each model (see [prime_implicants_dual](crate::procedures::prime_implicants_dual)).
//!
//! Each question is asked through a [context], and each is answered under the limits of a [resource governor](crate::governor).
//! Breaching a limit on CPU time, address space, or file size does not end the process. Instead, the breach is noted, the solver is interrupted, every solver handle is released, and a typed [error](crate::types::err) is returned.
//!
//! # Orientation
//!
//! - Solvers are anything implementing [IncrementalSolver](crate::solver::IncrementalSolver).
//!   A binding to a linked IPASIR library is available with the `ipasir` feature.
//! - Formulas, clauses, and literals are plain integers, following the IPASIR (and DIMACS) convention. See [structures].
//! - Limits, and how the value of an unassigned atom is read, are set through the [configuration](crate::config).
//!
//! # Example
//!
//! ```rust,ignore
//! use otter_prime::{config::Config, context::Context, solver::ipasir::IpasirSolver};
//!
//! let mut config = Config::default();
//! config.time_limit.value = 10;
//!
//! let context = Context::from_config(config);
//!
//! let formula = vec![vec![1, 2], vec![-1, -2]];
//! let models = context.enumerate_models::<IpasirSolver>(&formula, &[1, 2]).unwrap();
//! assert_eq!(models.len(), 2);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with the targets listed in [misc::log].
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/), `RUST_LOG=governor=info …` reports arming and breaches of limits.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod context;
pub mod governor;
pub mod procedures;
pub mod reports;
pub mod solver;
pub mod structures;
pub mod types;

pub mod misc;
