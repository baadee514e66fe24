use chrono::{DateTime, Local};

/// Builds `<prefix>_<YYYYMMDD_HHMMSS>.<extension>` from the given clock
/// reading.
///
/// Second granularity: two invocations completing within the same second
/// produce the same name. Accepted as-is; the front end only allows one run
/// at a time.
pub fn timestamped_filename(prefix: &str, extension: &str, stamp: &DateTime<Local>) -> String {
    format!("{prefix}_{}.{extension}", stamp.format("%Y%m%d_%H%M%S"))
}
