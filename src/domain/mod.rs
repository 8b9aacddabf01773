// Domain layer - Value types handed over by the charting layer
pub mod hover;
pub mod measurement;
pub mod series;
pub mod tooltip;
