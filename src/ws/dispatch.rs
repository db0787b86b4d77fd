//! Routes parsed server responses to their handlers.

use super::messages::ServerResponse;
use crate::status::StatusSink;

/// Dispatches one server response.
///
/// Known response kinds are forwarded to the sink; unrecognized message
/// types are dropped after a debug log.
pub fn dispatch(response: ServerResponse, sink: &mut dyn StatusSink) {
    match response {
        ServerResponse::SendScenarioParamResponse { success } => {
            sink.scenario_param_status(success);
        }
        ServerResponse::Unrecognized => {
            tracing::debug!("ignoring unrecognized message type");
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::status::StatusLine;

    #[test]
    fn response_success_reaches_sink() {
        let mut status = StatusLine::new();
        dispatch(
            ServerResponse::SendScenarioParamResponse { success: true },
            &mut status,
        );
        assert_eq!(status.last(), Some(true));

        dispatch(
            ServerResponse::SendScenarioParamResponse { success: false },
            &mut status,
        );
        assert_eq!(status.last(), Some(false));
    }

    #[test]
    fn unrecognized_response_leaves_sink_untouched() {
        let mut status = StatusLine::new();
        dispatch(ServerResponse::Unrecognized, &mut status);
        assert_eq!(status.last(), None);
    }
}
