pub mod checker;
pub mod cli;
pub mod error;
pub mod output;

pub use error::{ArticleGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VALIDATION_FAILED: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
