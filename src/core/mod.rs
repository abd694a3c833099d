pub mod calculator;
pub mod config;
pub mod edit;
pub mod form;
pub mod log;
pub mod logic;
pub mod show;
pub mod sign;
