//! Conference listing rules
//!
//! Pure functions behind the conference list: which conferences a viewer
//! sees, in what order, whether their call for papers is open, and how their
//! event dates are displayed. The current time is always passed in.

mod cfp;
mod dates;
mod filter;
mod sort;

pub use cfp::is_accepting_proposals;
pub use dates::format_event_dates;
pub use filter::{filter_conferences, ConferenceFilter, Viewer};
pub use sort::{sort_conferences, ConferenceSort};
