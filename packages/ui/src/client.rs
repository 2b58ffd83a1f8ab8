//! Backend client context and hook for the UI.

use api::{ApiConfig, AuthClient};
use dioxus::prelude::*;

/// The shared backend client, or why it could not be built.
#[derive(Clone, Debug)]
pub struct ApiHandle {
    client: Result<AuthClient, String>,
}

impl ApiHandle {
    pub fn new(config: &ApiConfig) -> Self {
        let client = AuthClient::new(config).map_err(|e| {
            tracing::error!("Failed to create API client: {}", e);
            e.to_string()
        });
        Self { client }
    }

    /// The client, or the configuration error to show in place of a request.
    pub fn client(&self) -> Result<&AuthClient, &str> {
        self.client.as_ref().map_err(String::as_str)
    }
}

/// Get the backend client provided by the nearest [`ApiProvider`].
pub fn use_api() -> ApiHandle {
    use_context::<ApiHandle>()
}

/// Provider component that builds the backend client once.
/// Wrap your app with this component so the forms can submit.
#[component]
pub fn ApiProvider(config: ApiConfig, children: Element) -> Element {
    use_context_provider(|| ApiHandle::new(&config));

    rsx! {
        {children}
    }
}
