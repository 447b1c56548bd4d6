/*!
Configuration of a context.

All configuration for a context is contained within the [Config] of the context.
Each option is a [ConfigOption], bounded by some minimum and maximum value.

```rust
# use otter_prime::config::{Config, ValueConvention};
let mut config = Config::default();

assert!(config.time_limit.set(10).is_ok());
assert!(config.value_convention.set(ValueConvention::StrictlyTrue).is_ok());

assert_eq!("StrictlyTrue".parse(), Ok(config.value_convention.value));
```

# Limits

Each limit is a count of whole units, with `0` for no limit:
- The time limit is a count of seconds of CPU time (user and system), from the moment the limit is armed.
- The memory limit is a count of megabytes of address space.
- The file size limit is a count of megabytes, for any file written by the process.
*/

mod config_option;
pub use config_option::ConfigOption;

mod value_convention;
pub use value_convention::ValueConvention;

/// The largest limit, in seconds or megabytes.
pub const LIMIT_MAX: u32 = u32::MAX >> 12;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The CPU time limit of a call, in seconds.
    pub time_limit: ConfigOption<u32>,

    /// The address space limit of a call, in megabytes.
    pub memory_limit: ConfigOption<u32>,

    /// The limit on the size of written files during a call, in megabytes.
    pub file_size_limit: ConfigOption<u32>,

    /// How values reported by a solver are read.
    pub value_convention: ConfigOption<ValueConvention>,
}

impl Default for Config {
    /// By default, no limits are set and atoms without a value are read as true.
    fn default() -> Self {
        Config {
            time_limit: ConfigOption {
                name: "time_limit",
                min: 0,
                max: LIMIT_MAX,
                value: 0,
            },

            memory_limit: ConfigOption {
                name: "memory_limit",
                min: 0,
                max: LIMIT_MAX,
                value: 0,
            },

            file_size_limit: ConfigOption {
                name: "file_size_limit",
                min: 0,
                max: LIMIT_MAX,
                value: 0,
            },

            value_convention: ConfigOption {
                name: "value_convention",
                min: ValueConvention::MIN,
                max: ValueConvention::MAX,
                value: ValueConvention::DontCareAsTrue,
            },
        }
    }
}
