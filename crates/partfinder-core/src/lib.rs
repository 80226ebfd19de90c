pub mod config;
pub mod logging;

pub mod catalog;
pub mod form;
pub mod lookup;
pub mod theme;
