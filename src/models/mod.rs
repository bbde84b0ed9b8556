pub mod city;
pub mod month;
pub mod selection;
pub mod table;
pub mod trip;
pub mod weekday;

pub use city::City;
pub use month::Month;
pub use selection::{DayFilter, FilterSelection, MonthFilter};
pub use table::{Schema, TripTable};
pub use trip::TripRecord;
