pub mod app;
pub mod generators;
pub mod maze;
pub mod seeds;
