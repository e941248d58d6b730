use crate::{model::FanState, scan::scan_value};

/// Map the `status:` line of a fan state file. `None` when the key is
/// missing altogether.
pub fn parse_state(buf: &str) -> Option<FanState> {
    let status = scan_value(buf, "status:")?;

    Some(if status.starts_with("on") {
        FanState::On
    } else if status.starts_with("of") {
        FanState::Off
    } else {
        FanState::Error
    })
}
