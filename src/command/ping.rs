//! Connection keep-alive command.

use serde::Serialize;

use crate::command::frame;
use crate::config::BitfinexClientConfiguration;
use crate::error::EncodeResult;

/// Asks the server for a pong.
#[derive(Debug, Clone, Default)]
pub struct PingCommand;

#[derive(Serialize)]
struct PingEvent {
    event: &'static str,
}

impl PingCommand {
    /// Create the command.
    pub fn new() -> Self {
        Self
    }

    /// Encode the ping event frame.
    pub fn encode(&self, _configuration: &BitfinexClientConfiguration) -> EncodeResult<String> {
        frame::event_frame(&PingEvent { event: "ping" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_frame() {
        let frame = PingCommand::new()
            .encode(&BitfinexClientConfiguration::anonymous())
            .unwrap();

        assert_eq!(frame, "{\"event\":\"ping\"}\n");
    }
}
