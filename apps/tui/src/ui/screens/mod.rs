pub mod crop;
pub mod help;
pub mod predict;
pub mod region;
pub mod strategies;
