//! Network URL constants for the Bitfinex v2 WebSocket API.

/// Public channel WebSocket endpoint.
pub const PUBLIC_WS_URL: &str = "wss://api-pub.bitfinex.com/ws/2";

/// Authenticated WebSocket endpoint (account channels, order entry).
pub const AUTH_WS_URL: &str = "wss://api.bitfinex.com/ws/2";
