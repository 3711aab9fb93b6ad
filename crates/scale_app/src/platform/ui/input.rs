use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use scale_core::Msg;

use super::constants::{KEY_COMMIT, KEY_DISMISS, KEY_QUIT};

/// Maps one line of operator input to a message.
pub fn parse_command(line: &str) -> Option<Msg> {
    match line.trim().to_lowercase().as_str() {
        "" | KEY_COMMIT => Some(Msg::CommitClicked),
        KEY_DISMISS => Some(Msg::NotificationDismissed),
        KEY_QUIT => Some(Msg::Shutdown),
        _ => None,
    }
}

/// Reads operator commands from stdin; end of input closes the view.
pub fn spawn_reader(msg_tx: mpsc::Sender<Msg>) -> io::Result<()> {
    thread::Builder::new()
        .name("operator-input".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if let Some(msg) = parse_command(&line) {
                    if msg_tx.send(msg).is_err() {
                        return;
                    }
                }
            }
            let _ = msg_tx.send(Msg::Shutdown);
        })?;
    Ok(())
}
