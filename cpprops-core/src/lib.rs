#![warn(clippy::all)]
#![allow(clippy::too_many_arguments)]

/// Print messages with level `Verbosity::Iter` or higher.
#[macro_export]
macro_rules! log_iter {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::Verbosity::Iter {
            println!($($arg)*);
        }
    }
}

/// Print messages with level `Verbosity::Result` or higher.
#[macro_export]
macro_rules! log_result {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::Verbosity::Result {
            println!($($arg)*);
        }
    }
}

mod errors;
pub mod si;
pub mod statistics;
pub mod table;
pub mod trajectory;
pub use errors::{CpError, CpResult};
pub use table::{Delimiter, Table};
pub use trajectory::{Observable, Trajectory};

/// Level of detail in the diagnostic output.
#[derive(Copy, Clone, Debug, PartialOrd, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Do not print output.
    #[default]
    None,
    /// Print the result of every estimator.
    Result,
    /// Print additional information for every resampling iteration.
    Iter,
}

impl Verbosity {
    /// `Verbosity::Result` if `flag` is set, else `Verbosity::None`.
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Self::Result
        } else {
            Self::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_order() {
        assert!(Verbosity::Iter > Verbosity::Result);
        assert!(Verbosity::Result > Verbosity::None);
        assert_eq!(Verbosity::default(), Verbosity::None);
        assert_eq!(Verbosity::from_flag(true), Verbosity::Result);
    }
}
