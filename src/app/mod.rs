//! Application module

pub mod cli;
pub mod commands;
pub mod scan_flow;
pub mod startup;

#[cfg(test)]
mod tests;
