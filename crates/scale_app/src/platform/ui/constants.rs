pub const TITLE: &str = "TIMBANGAN DIGITAL AI";
pub const RULE_WIDTH: usize = 60;

/// Commit also fires on a bare Enter.
pub const KEY_COMMIT: &str = "s";
pub const KEY_DISMISS: &str = "d";
pub const KEY_QUIT: &str = "q";

pub const CLOCK_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
