pub mod calculator;
pub mod history;
pub mod presets;

pub use calculator::CalculatorPage;
pub use history::HistoryPage;
pub use presets::PresetsPage;
