/// Formats a byte count the way the progress bar and capacity errors show it,
/// for example `512B`, `1.50KB` or `2.00MB`.
pub fn readable_size(value: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if value < KB {
        format!("{value}B")
    } else if value < MB {
        format!("{:.2}KB", value as f64 / KB as f64)
    } else if value < GB {
        format!("{:.2}MB", value as f64 / MB as f64)
    } else {
        format!("{:.2}GB", value as f64 / GB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_bytes_without_decimals() {
        assert_eq!(readable_size(0), "0B");
        assert_eq!(readable_size(1023), "1023B");
    }

    #[test]
    fn should_format_larger_units_with_two_decimals() {
        assert_eq!(readable_size(1024), "1.00KB");
        assert_eq!(readable_size(1536), "1.50KB");
        assert_eq!(readable_size(3 * 1024 * 1024), "3.00MB");
        assert_eq!(readable_size(5 * 1024 * 1024 * 1024), "5.00GB");
    }
}
