//! Page components, one per route.

pub mod all_requests;
pub mod dashboard;
pub mod landing;
pub mod profile;
pub mod request_help;
pub mod volunteer_requests;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SessionSignal;

/// Send anonymous visitors back to the landing page.
///
/// Waits for session restoration to complete before deciding: while the
/// store is not ready the page keeps showing its loading state, never the
/// anonymous branch.
pub(crate) fn redirect_if_anonymous(session: SessionSignal) {
    let navigate = use_navigate();
    Effect::new(move || {
        let anonymous = session.with(|s| s.is_ready() && !s.is_authenticated());
        if anonymous {
            navigate("/", NavigateOptions::default());
        }
    });
}
