// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Web page fetch tool handler.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::error::ToolError;
use crate::tools::parse_arguments;
use crate::tools::registry::ToolHandler;
use crate::types::ToolDefinition;

/// Cap on how long one fetch may take; tool calls must stay interactive.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Handler for the `fetch_web` tool.
pub struct FetchWebHandler {
    client: reqwest::Client,
}

/// Arguments for the fetch_web tool.
#[derive(Debug, Deserialize)]
struct FetchWebArgs {
    url: String,
}

impl FetchWebHandler {
    /// Create a handler with its own HTTP client.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for FetchWebHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolHandler for FetchWebHandler {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("fetch_web", "Fetch a web page content").with_parameters(
            serde_json::json!({
                "type": "object",
                "properties": {
                    "url": { "type": "string", "description": "The url of the web page" }
                },
                "required": ["url"]
            }),
        )
    }

    async fn execute(&self, input: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let args: FetchWebArgs = parse_arguments(&input)?;

        let response = self
            .client
            .get(&args.url)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        Ok(serde_json::Value::String(body))
    }
}
