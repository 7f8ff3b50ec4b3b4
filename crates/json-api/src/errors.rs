//! JSON Error Bodies

use salvo::{catcher::Catcher, http::ResBody, prelude::*};
use serde::{Deserialize, Serialize};

/// Error Body
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

/// Catcher rendering every error status as `{"message": ...}`, whatever the `Accept` header.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(json_error)
}

#[handler]
async fn json_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let Some(code) = res.status_code else {
        return;
    };

    if !(code.is_client_error() || code.is_server_error()) {
        return;
    }

    let message = match res.take_body() {
        ResBody::Error(error) => error.brief,
        _ => code.canonical_reason().unwrap_or("Error").to_string(),
    };

    res.render(Json(ErrorBody { message }));
    ctrl.skip_rest();
}
