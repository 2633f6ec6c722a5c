use std::fmt::Debug;

use ehttp::{Request, Response, Result};

pub type OnDone = Box<dyn FnOnce(Result<Response>) + Send + 'static>;

/// Transport seam for every admin API call.
pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: OnDone);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: OnDone) {
        ehttp::fetch(request, on_done)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockFetcher;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::sync::Mutex;

    use ehttp::{Headers, Request, Response, Result};

    use super::{FetchService, OnDone};

    /// Answers requests synchronously from canned routes.
    ///
    /// A route matches when the request URL ends with its suffix; the first
    /// matching route wins. Unmatched requests fail, or are never answered
    /// when [`MockFetcher::hold_unmatched`] was called.
    #[derive(Debug, Default)]
    pub struct MockFetcher {
        routes: Vec<(String, Result<Response>)>,
        hold_unmatched: bool,
        requests: Mutex<Vec<(String, String)>>,
    }

    impl MockFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_json(
            mut self,
            suffix: impl Into<String>,
            status: u16,
            body: serde_json::Value,
        ) -> Self {
            let suffix = suffix.into();
            let response = Response {
                url: suffix.clone(),
                ok: (200..300).contains(&status),
                status,
                status_text: String::new(),
                headers: Headers::new(&[("content-type", "application/json")]),
                bytes: body.to_string().into_bytes(),
            };
            self.routes.push((suffix, Ok(response)));
            self
        }

        pub fn with_error(mut self, suffix: impl Into<String>, message: impl Into<String>) -> Self {
            self.routes.push((suffix.into(), Err(message.into())));
            self
        }

        /// Leave unmatched requests in flight forever.
        pub fn hold_unmatched(mut self) -> Self {
            self.hold_unmatched = true;
            self
        }

        /// `(method, url)` of every request seen so far.
        pub fn requests(&self) -> Vec<(String, String)> {
            self.requests
                .lock()
                .map(|requests| requests.clone())
                .unwrap_or_default()
        }
    }

    impl FetchService for MockFetcher {
        fn fetch(&self, request: Request, on_done: OnDone) {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push((request.method.clone(), request.url.clone()));
            }

            let route = self
                .routes
                .iter()
                .find(|(suffix, _)| request.url.ends_with(suffix.as_str()));

            match route {
                Some((_, response)) => on_done(response.clone()),
                None if self.hold_unmatched => {}
                None => on_done(Err(format!("MockFetcher: no route for {}", request.url))),
            }
        }
    }
}
