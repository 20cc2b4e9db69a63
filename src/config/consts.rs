// src/config/consts.rs

// Net config
pub const SCHEDULE_URL: &str = "http://www.ire.org/events-and-training/event/1494/";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Conference days. The page carries no machine-readable dates; the Nth day
// container is paired with the Nth entry here.
pub const DATES: &[&str] = &[
    "2015-03-04",
    "2015-03-05",
    "2015-03-06",
    "2015-03-07",
    "2015-03-08",
];
