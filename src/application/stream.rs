//! Server-sent datastar responses for board fragments.

use std::convert::Infallible;

use async_stream::stream;
use axum::response::{
    IntoResponse, Response,
    sse::{Event, Sse},
};
use datastar::prelude::{ElementPatchMode, PatchElements};

/// Collects element patches and streams them back as one SSE response.
#[derive(Default)]
pub struct PatchStream {
    events: Vec<Event>,
}

impl PatchStream {
    /// Single-patch stream that swaps the element matched by `selector`.
    pub fn replace(selector: &str, html: String) -> Self {
        let mut stream = Self::default();
        stream.push_patch(html, selector, ElementPatchMode::Replace);
        stream
    }

    fn push_patch(&mut self, html: String, selector: &str, mode: ElementPatchMode) -> &mut Self {
        let event = PatchElements::new(html)
            .selector(selector)
            .mode(mode)
            .write_as_axum_sse_event();
        self.events.push(event);
        self
    }
}

impl IntoResponse for PatchStream {
    fn into_response(self) -> Response {
        let events = self.events;
        let body = stream! {
            for event in events {
                yield Ok::<Event, Infallible>(event);
            }
        };
        Sse::new(body).into_response()
    }
}
