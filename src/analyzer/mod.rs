// Analyzer module: the pure, synchronous analyses over fetched series.
// Every "last year" analysis applies the window filter first.

pub mod spread;
pub mod volatility;
pub mod weekday;
pub mod weekly;
pub mod window;

pub use spread::peak_day;
pub use volatility::{DayVolatility, top_volatility};
pub use weekday::weekday_averages;
pub use weekly::{WeekRange, widest_week};
pub use window::last_year;
