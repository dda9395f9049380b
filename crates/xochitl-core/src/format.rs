//! Human-facing value formatting shared by the commands

use chrono::{Local, TimeZone};

const KIB: u64 = 1024;
const MIB: u64 = KIB * KIB;
const GIB: u64 = KIB * KIB * KIB;

/// Scale a byte count for display: B, KB, MB or GB, two decimals
pub fn human_size(bytes: u64) -> String {
    if bytes > GIB {
        format!("{:.2} GB", bytes as f64 / GIB as f64)
    } else if bytes > MIB {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    } else if bytes > KIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Render an epoch-milliseconds timestamp as local wall-clock time.
/// Returns `None` for values outside the representable range.
pub fn local_timestamp(epoch_millis: i64) -> Option<String> {
    Local
        .timestamp_millis_opt(epoch_millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
}
