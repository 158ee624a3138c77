pub mod print;
pub mod run;

pub use print::{PrintCommand, execute_print};
pub use run::execute_run;
