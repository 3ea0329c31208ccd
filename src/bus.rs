//! Explicit command channel between the palette and the shell.
//!
//! The palette (or any future emitter) publishes literal command lines;
//! the event loop drains them into [`ShellSession::submit`] so injected
//! commands are indistinguishable from typed ones. This replaces the
//! ambient global event the original design relied on with a typed,
//! inspectable channel.
//!
//! [`ShellSession::submit`]: crate::shell::ShellSession::submit

use std::sync::mpsc::{Receiver, Sender, channel};

/// Sending half: publish a command line for the shell.
#[derive(Clone)]
pub struct CommandSender {
    tx: Sender<String>,
}

impl CommandSender {
    pub fn send(&self, line: impl Into<String>) {
        // A closed receiver means the app is shutting down; dropping the
        // command is the correct behavior then.
        let _ = self.tx.send(line.into());
    }
}

/// Receiving half: drained once per event-loop tick.
pub struct CommandBus {
    rx: Receiver<String>,
}

impl CommandBus {
    pub fn new() -> (CommandSender, CommandBus) {
        let (tx, rx) = channel();
        (CommandSender { tx }, CommandBus { rx })
    }

    /// All command lines published since the last drain, in publish order.
    pub fn drain(&self) -> Vec<String> {
        self.rx.try_iter().collect()
    }
}
