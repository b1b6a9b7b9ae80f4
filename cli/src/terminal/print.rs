use colored::*;
use tracing::debug;
use reachr_common::network::target::Target;
use reachr_common::probe::{self, ProbeStatus};

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Turns colour on only when stdout is a terminal that accepts it.
///
/// Returns whether colours are enabled.
pub fn initialize() -> bool {
    let enabled = console::colors_enabled();
    colored::control::set_override(enabled);
    enabled
}

/// Section banner, only shown with `--verbose`.
pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    debug!("{}", line);
}

/// `<address> is <STATUS>`, with the status word coloured when `color` is set.
pub fn status_line(target: &Target, status: &ProbeStatus, color: bool) -> String {
    if !color {
        return probe::status_line(target, status);
    }

    let status_color = match status {
        ProbeStatus::Online => colors::ONLINE,
        ProbeStatus::Offline => colors::OFFLINE,
        ProbeStatus::Error(_) => colors::ERROR,
    };
    format!("{} is {}", target.address, status.to_string().color(status_color).bold())
}

pub fn target_row(idx: usize, target: &Target, color: bool) -> String {
    let location = target.location.as_deref().unwrap_or("-");
    if !color {
        return format!("[{}] {:<16} {}", idx, target.address, location);
    }

    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    format!(
        "{} {:<16} {}",
        idx_str.color(colors::SEPARATOR),
        target.address.color(colors::PRIMARY),
        location.color(colors::SEPARATOR)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_status_line_matches_contract() {
        let target = Target::new("127.0.0.1");
        assert_eq!(
            status_line(&target, &ProbeStatus::Online, false),
            "127.0.0.1 is ONLINE"
        );
        assert_eq!(
            status_line(&target, &ProbeStatus::Error("no ping".into()), false),
            "127.0.0.1 is ERROR: no ping"
        );
    }

    #[test]
    fn plain_target_row() {
        let target = Target::new("10.166.52.22").with_location("SO_SHOP5");
        assert_eq!(
            target_row(1, &target, false),
            "[1] 10.166.52.22     SO_SHOP5"
        );
        assert_eq!(target_row(0, &Target::new("::1"), false), "[0] ::1              -");
    }
}
