/// Size and duration formatting utilities.
///
/// All internal sizes are `u64` bytes. Floating point is only used at the
/// report/display boundary: report cells carry kibibytes, the summary
/// carries mebibytes.

/// Bytes per kibibyte — report rows express sizes in KiB.
const KIB: f64 = 1024.0;

/// Convert a byte count to kibibytes for a report cell.
#[inline]
pub fn bytes_to_kib(bytes: u64) -> f64 {
    bytes as f64 / KIB
}

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Uses binary units (KiB = 1024) but labels them with common short forms
/// (KB, MB, GB, TB) because that is what users expect in a disk tool.
pub fn format_size(bytes: u64) -> String {
    const MB: f64 = KIB * 1024.0;
    const GB: f64 = MB * 1024.0;
    const TB: f64 = GB * 1024.0;

    let b = bytes as f64;
    if b < KIB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KIB)
    } else if b < GB {
        format!("{:.1} MB", b / MB)
    } else if b < TB {
        format!("{:.2} GB", b / GB)
    } else {
        format!("{:.2} TB", b / TB)
    }
}

/// Format an entry count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Format a wall-clock duration as `1h 02m 03s` / `2m 03s` / `3s`,
/// dropping sub-second precision the way the completion summary expects.
pub fn format_duration(d: std::time::Duration) -> String {
    let total = d.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}
