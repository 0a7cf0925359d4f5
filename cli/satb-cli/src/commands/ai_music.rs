//! cli/satb-cli/src/commands/ai_music.rs
//! `satb ai-music`: proxy a progression to the external
//! text-to-audio collaborator. This module formats a prompt string and makes one HTTP
//! request; it must never reach into `satb-theory`/`satb-harmony` beyond that.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::args::AiMusicArgs;
use crate::config::Config;
use crate::format::OutputFormat;

const ENDPOINT: &str = "https://api.replicate.com/v1/predictions";

#[derive(Debug, Serialize)]
pub struct AiMusicReport {
    pub prompt: String,
    pub audio_url: String,
}

impl AiMusicReport {
    pub fn render_text(&self) -> String {
        format!("Prompt: {}\nAudio: {}", self.prompt, self.audio_url)
    }
}

#[derive(Serialize)]
struct PredictionRequest<'a> {
    input: PredictionInput<'a>,
}

#[derive(Serialize)]
struct PredictionInput<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct PredictionResponse {
    #[serde(default)]
    output: Option<String>,
}

fn build_prompt(progression: &[String], key: &str) -> String {
    format!(
        "A short classical piano passage in {key} following the chord progression {}.",
        progression.join(" - ")
    )
}

pub fn handle_ai_music(args: AiMusicArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let credential = config
        .ai_music_credential
        .as_deref()
        .context("no text-to-audio credential found (set REPLICATE_API_KEY, REPLICATE_API_TOKEN, or AI_MUSIC_TOKEN)")?;

    let prompt = build_prompt(&args.progression, &args.key);

    let client = reqwest::blocking::Client::new();
    let response = client
        .post(ENDPOINT)
        .bearer_auth(credential)
        .json(&PredictionRequest { input: PredictionInput { prompt: &prompt } })
        .send()
        .context("request to the text-to-audio collaborator failed")?;

    if !response.status().is_success() {
        bail!("text-to-audio collaborator returned status {}", response.status());
    }

    let body: PredictionResponse =
        response.json().context("failed to parse text-to-audio collaborator response")?;
    let audio_url = body.output.context("text-to-audio collaborator response carried no output")?;

    let report = AiMusicReport { prompt, audio_url };
    format.emit(&report, AiMusicReport::render_text)
}
