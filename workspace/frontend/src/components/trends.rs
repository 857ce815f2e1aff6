mod plot;
mod seasonal;
mod yearly;

pub use seasonal::SeasonalChart;
pub use yearly::YearlyChart;
