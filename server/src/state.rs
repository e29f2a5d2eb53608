use std::{collections::HashMap, sync::Arc};

use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config::Config,
    limit::{SearchLimitPolicy, UnlimitedPolicy},
    workflow::SearchWorkflow,
};

pub struct AppState {
    pub config: Config,
    pub http: Client,
    pub limit_policy: Box<dyn SearchLimitPolicy>,
    // One workflow per authenticated user; never shared across sessions.
    pub workflows: Mutex<HashMap<String, SearchWorkflow>>,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        Arc::new(Self {
            config,
            http: Client::new(),
            limit_policy: Box::new(UnlimitedPolicy),
            workflows: Mutex::new(HashMap::new()),
        })
    }
}
