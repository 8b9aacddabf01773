// Presentation layer - Markup injected into the report pages
pub mod html;
