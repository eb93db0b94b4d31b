//! Server process startup and supervision.
mod interrupt;
mod startup;
mod supervisor;

pub use interrupt::InterruptListener;
pub use startup::{run_launcher, RuntimeExit};
pub use supervisor::{LaunchOutcome, Launcher};
