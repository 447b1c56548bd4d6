/*!
The context, through which each procedure is called.

A context holds a [Config], and each call through the context:
1. Checks the formula against the atoms of interest for the call.
2. Arms a [governor](crate::governor) with the limits of the config.
3. Runs the procedure, with a fresh solver (or a few).
4. Releases every solver, and then disarms the governor, whatever the outcome of the call.

# Example
```rust,ignore
# use otter_prime::config::Config;
# use otter_prime::context::Context;
# use otter_prime::solver::ipasir::IpasirSolver;
let mut config = Config::default();
config.time_limit.value = 5;
let context = Context::from_config(config);

let formula = vec![vec![1, 2, 3]];
let mut implicants = context.prime_implicants::<IpasirSolver>(&formula, &[1, 2, 3]).unwrap();
implicants.sort();
assert_eq!(implicants, vec![vec![1], vec![2], vec![3]]);
```
*/

use crate::{
    config::Config,
    governor::{Limits, ResourceGovernor},
    types::err::ErrorKind,
};

/// A context, holding the configuration of calls.
#[derive(Clone, Debug, Default)]
pub struct Context {
    pub config: Config,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        Context { config }
    }

    /// The limits of a call through the context.
    pub fn limits(&self) -> Limits {
        Limits::from_config(&self.config)
    }

    /// Runs `f` under a governor armed with the limits of the context.
    ///
    /// Anything owned by `f` is dropped before the governor is disarmed.
    pub fn governed<T, F>(&self, f: F) -> Result<T, ErrorKind>
    where
        F: FnOnce() -> Result<T, ErrorKind>,
    {
        let governor = ResourceGovernor::arm(self.limits())?;
        let result = f();
        drop(governor);
        result
    }
}
