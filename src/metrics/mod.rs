// Pure aggregation over already-loaded tables. No I/O, no shared state;
// every function here is safe to call from any handler task.

pub mod goals;
pub mod weight;
pub mod workout;

pub use goals::*;
pub use weight::*;
pub use workout::*;
