//! The two wire frame shapes of the v2 protocol.
//!
//! Input frames carry authenticated operations as a positional array,
//! `[0,"<op>",null,{params}]`; everything else travels as an event object.
//! Both are serialized here exactly once and newline-terminated.

use serde::Serialize;

use crate::error::EncodeResult;

// Serializes as [0,"<op>",null,{params}]; the unit field becomes null.
#[derive(Serialize)]
struct InputEnvelope<'a, P: Serialize>(u8, &'a str, (), &'a P);

/// Build an input frame for an authenticated operation.
pub fn input_frame<P: Serialize>(operation: &str, params: &P) -> EncodeResult<String> {
    let mut frame = serde_json::to_string(&InputEnvelope(0, operation, (), params))?;
    frame.push('\n');
    Ok(frame)
}

/// Build an event frame.
pub fn event_frame<E: Serialize>(event: &E) -> EncodeResult<String> {
    let mut frame = serde_json::to_string(event)?;
    frame.push('\n');
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_frame_envelope() {
        let frame = input_frame("oc", &json!({ "id": 123 })).unwrap();

        assert_eq!(frame, "[0,\"oc\",null,{\"id\":123}]\n");
    }

    #[test]
    fn test_event_frame_is_newline_terminated() {
        let frame = event_frame(&json!({ "event": "ping" })).unwrap();

        assert_eq!(frame, "{\"event\":\"ping\"}\n");
    }
}
