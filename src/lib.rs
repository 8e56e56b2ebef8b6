//! WCAG 2.x contrast rating engine and design-system accessibility audit.

pub mod audit;
pub mod catalog;
pub mod cli;
pub mod color;
pub mod config;
pub mod logging;
pub mod rating;
pub mod report;
pub mod suggest;
pub mod tokens;
pub mod wcag;
