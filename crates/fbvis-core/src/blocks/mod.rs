pub mod deviation;
pub mod experimental;
pub mod parameters;
pub mod simulated;
