//! Client for the external text-generation service.
//!
//! Generation failures degrade the session instead of aborting it: the
//! error is folded into the returned text, which the dashboard shows in
//! place of the draft. Only configuration problems are hard errors.

use crate::error::{PlanError, PlanResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Configuration for the generation service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Base URL of the text-generation API.
    pub api_base_url: String,

    /// API key; absence is fatal at process start.
    pub api_key: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://generate.welldesk.io".to_string(),
            api_key: String::new(),
        }
    }
}

/// Blocking-per-call wrapper over `POST /v1/generate`.
#[derive(Debug)]
pub struct GenerateClient {
    client: Client,
    config: GenerateConfig,
}

#[derive(Deserialize)]
struct GenerateResponse {
    text: String,
}

impl GenerateClient {
    pub fn new(config: GenerateConfig) -> PlanResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(PlanError::Config("generation api_key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Ok(Self { client, config })
    }

    /// Generates a document from a prompt.
    ///
    /// Any failure comes back as an inline error string in the returned
    /// text; the caller renders it where the draft would have been.
    pub async fn generate(&self, prompt: &str) -> String {
        match self.request(prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("document generation failed: {e}");
                format!("Generation failed: {e}")
            }
        }
    }

    async fn request(&self, prompt: &str) -> Result<String, reqwest::Error> {
        let resp: GenerateResponse = self
            .client
            .post(format!("{}/v1/generate", self.config.api_base_url))
            .bearer_auth(&self.config.api_key)
            .json(&serde_json::json!({ "prompt": prompt }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp.text)
    }
}

/// Composes the plan prompt from the studio's style guide and the
/// client's profile.
pub fn build_plan_prompt(
    style_guide: &str,
    goal: &str,
    physical_data: &str,
    clinical_input: &str,
) -> String {
    format!(
        "Act as a professional nutritionist.\n\
         \n\
         STUDIO STYLE GUIDE:\n\
         \"{style_guide}\"\n\
         \n\
         CLIENT PROFILE:\n\
         - Physical data: {physical_data}\n\
         - GOAL: \"{goal}\"\n\
         \n\
         CLINICAL DATA / SYMPTOMS PROVIDED:\n\
         \"{clinical_input}\"\n\
         \n\
         TASK:\n\
         Write a detailed weekly meal plan.\n\
         1. Strictly respect the client's goal.\n\
         2. Match the tone to the studio style guide.\n\
         3. Keep the voice professional and empathetic.\n"
    )
}
