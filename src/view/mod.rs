pub mod charts;
pub mod dashboard;
pub mod formatter;

pub use charts::{bar_chart_series, macro_calorie_split, BarChartSeries, Gauge, MacroSplit};
pub use dashboard::{build_dashboard, CategorySection, DashboardReport, RecordDashboard};
pub use formatter::{extract_unit, split_camel_case, to_display_row, DisplayRow};
