//! Console report.

use std::time::Duration;

use multiwatch::Summary;

pub const HEADER: &str = "  timer        runs     total ms   avg ms       avg ticks";

/// One report line for a timer snapshot.
pub fn row(label: &str, s: &Summary) -> String {
    let avg_ticks = match s.average_ticks {
        Some(t) => t.to_string(),
        None => "-".to_string(),
    };
    format!(
        "  {:<10} {:>6} {:>12} {:>8} {:>15}{}",
        label,
        s.count,
        s.elapsed_milliseconds,
        s.average_milliseconds,
        avg_ticks,
        if s.is_running { "  (running)" } else { "" },
    )
}

/// Seconds with microsecond precision, e.g. `0.012345 s`.
pub fn seconds(d: Duration) -> String {
    format!("{:.6} s", d.as_secs_f64())
}
