pub mod chart;
pub mod history;
pub mod macros;
pub mod news;
pub mod quotes;

pub mod util;
