use crate::{model::PowerState, scan::scan_value};

/// Map the `state:` line of an adapter state file.
pub fn parse_state(buf: &str) -> PowerState {
    match scan_value(buf, "state:") {
        Some(state) if state.starts_with("on-line") => PowerState::Ac,
        Some(state) if state.starts_with("off-line") => PowerState::Battery,
        _ => PowerState::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_states() {
        assert_eq!(parse_state("state:                   on-line\n"), PowerState::Ac);
        assert_eq!(parse_state("state:                   off-line\n"), PowerState::Battery);
        assert_eq!(parse_state("state:                   unknown\n"), PowerState::Error);
        assert_eq!(parse_state(""), PowerState::Error);
    }
}
