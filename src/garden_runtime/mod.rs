mod runtime;

pub use runtime::{Command, GardenRuntime};
