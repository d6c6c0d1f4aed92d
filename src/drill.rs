//! Type-safe drill contracts.
//!
//! Every runnable exercise is described by a plain struct holding its already
//! parsed arguments. The struct implements [`Drill`], so the binary can run any
//! of them the same way: build the args from the command line, call `run`,
//! print what comes back.
//!
//! # Example
//!
//! ```
//! use drillbook::drill::Drill;
//! use drillbook::drills::exercises::CaesarArgs;
//!
//! let args = CaesarArgs {
//!     message: "Hello World".to_string(),
//!     offset: 3,
//! };
//!
//! assert_eq!(args.name(), "caesar");
//! assert_eq!(args.run().unwrap(), "khoor zruog");
//! ```

use crate::error::Result;

/// Trait for typed drill arguments.
///
/// # Contract
///
/// - `name()`: short identifier used in logs.
/// - `run()`: performs the drill and returns the text to show the user.
///   Invalid input is reported through the error, never printed.
pub trait Drill {
    /// Identifier for log lines (e.g. `"hanoi"`)
    fn name(&self) -> &'static str;

    /// Execute the drill and return its output
    fn run(&self) -> Result<String>;
}
