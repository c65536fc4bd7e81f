//! Deterministic visual styling for service tags.

use colored::Color;

/// Fixed palette for service tags. Order matters: the hash below indexes
/// into it, and the assignment must be stable across processes.
const PALETTE: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

/// Timestamps are always cyan in plain mode.
pub(crate) const TIMESTAMP_COLOR: Color = Color::Cyan;

/// Pick a stable palette color for a service name.
///
/// Same name, same color, for the process lifetime and across processes.
/// This is a visual discriminator only; collisions between services are
/// expected and acceptable.
pub fn service_color(service: &str) -> Color {
    let sum: usize = service.chars().map(|c| c as usize).sum();
    PALETTE[sum % PALETTE.len()]
}

/// Alignment spacing so the `[service]:` column lines up across loggers
/// with differently sized service names.
pub fn service_padding(service: &str, column_width: usize) -> String {
    " ".repeat(column_width.saturating_sub(service.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_color_deterministic() {
        let first = service_color("billing");
        let second = service_color("billing");
        assert_eq!(first, second);
        assert!(PALETTE.contains(&first));
    }

    #[test]
    fn test_service_color_known_assignment() {
        // char codes of "Billing" sum to 705; 705 % 7 == 5 -> Cyan.
        assert_eq!(service_color("Billing"), Color::Cyan);
    }

    #[test]
    fn test_padding_length() {
        assert_eq!(service_padding("auth", 20).len(), 16);
        assert_eq!(service_padding("", 20).len(), 20);
        // Names longer than the column produce no padding, not a panic.
        assert_eq!(service_padding("a-very-long-service-name", 20).len(), 0);
    }
}
