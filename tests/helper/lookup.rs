//! Lookup test utilities

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use store_version::store::lookup::{LookupMeta, LookupResponse, StoreLookup};
use store_version::store::platform::Platform;
use store_version::version::error::LookupError;

/// In-memory lookup keyed by app identifier
#[allow(dead_code)]
#[derive(Default)]
pub struct MockLookup {
    responses: HashMap<String, LookupResponse>,
    calls: Mutex<Vec<(Platform, String)>>,
}

impl MockLookup {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn with_app(
        mut self,
        app_id: &str,
        appstore: Option<&str>,
        playstore: Option<&str>,
        meta: LookupMeta,
    ) -> Self {
        self.responses.insert(
            app_id.to_string(),
            LookupResponse {
                appstore: appstore.map(str::to_string),
                playstore: playstore.map(str::to_string),
                meta,
            },
        );
        self
    }

    /// Every (platform, id) pair looked up so far
    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<(Platform, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoreLookup for MockLookup {
    async fn lookup(
        &self,
        platform: Platform,
        app_id: &str,
    ) -> Result<LookupResponse, LookupError> {
        self.calls
            .lock()
            .unwrap()
            .push((platform, app_id.to_string()));

        match self.responses.get(app_id) {
            Some(response) => Ok(response.clone()),
            None => Err(LookupError::NotFound(app_id.to_string())),
        }
    }
}

/// JSON body in the lookup service format
#[allow(dead_code)]
pub fn lookup_body(
    appstore: &str,
    playstore: &str,
    appstore_url: Option<&str>,
    playstore_url: Option<&str>,
) -> String {
    serde_json::json!({
        "appstore": appstore,
        "playstore": playstore,
        "meta": {
            "appstoreUrl": appstore_url,
            "playstoreUrl": playstore_url,
        }
    })
    .to_string()
}
