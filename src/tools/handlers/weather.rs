// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Current-weather tool handler.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ToolError;
use crate::tools::parse_arguments;
use crate::tools::registry::ToolHandler;
use crate::types::ToolDefinition;

/// Handler for the `get_current_weather` tool.
///
/// Returns a canned report; there is no live weather backend behind this
/// tool, it exists so the model has a harmless function-calling target.
pub struct WeatherHandler;

/// Arguments for the get_current_weather tool.
#[derive(Debug, Deserialize)]
struct WeatherArgs {
    city: String,
}

#[async_trait]
impl ToolHandler for WeatherHandler {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_current_weather",
            "Get the current weather for a specified city",
        )
        .with_parameters(serde_json::json!({
            "type": "object",
            "properties": {
                "city": { "type": "string", "description": "The name of the city" }
            },
            "required": ["city"]
        }))
    }

    async fn execute(&self, input: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let args: WeatherArgs = parse_arguments(&input)?;

        Ok(serde_json::json!({
            "city": args.city,
            "temperature": "25°C",
            "weather": "sunny",
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_weather_echoes_city() {
        let handler = WeatherHandler;
        let result = handler
            .execute(serde_json::json!({ "city": "Osaka" }))
            .await
            .unwrap();

        assert_eq!(result["city"], "Osaka");
        assert_eq!(result["weather"], "sunny");
    }

    #[tokio::test]
    async fn test_weather_missing_city() {
        let handler = WeatherHandler;
        let result = handler.execute(serde_json::json!({})).await;
        assert!(matches!(result.unwrap_err(), ToolError::InvalidInput(_)));
    }

    #[test]
    fn test_weather_definition() {
        let def = WeatherHandler.definition();
        assert_eq!(def.name, "get_current_weather");
        assert_eq!(def.parameters["required"][0], "city");
    }
}
