//! Utility functions for UI components

/// Format an image size in bytes as kilobytes with two decimals
pub fn format_size_kb(bytes: i64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_kilobytes() {
        assert_eq!(format_size_kb(2048), "2.00 KB");
        assert_eq!(format_size_kb(1024), "1.00 KB");
    }

    #[test]
    fn fractional_kilobytes() {
        assert_eq!(format_size_kb(1536), "1.50 KB");
        assert_eq!(format_size_kb(500), "0.49 KB");
    }

    #[test]
    fn zero_bytes() {
        assert_eq!(format_size_kb(0), "0.00 KB");
    }

    #[test]
    fn large_sizes_stay_in_kilobytes() {
        assert_eq!(format_size_kb(5 * 1024 * 1024), "5120.00 KB");
    }
}
