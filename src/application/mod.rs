// Application layer - Formatting and tooltip resolution use cases
pub mod formatter;
pub mod tooltip_resolver;
