use super::constants::LINE_STAGGER_SEC;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("letter config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("letter config has no lines")]
    NoLines,
    #[error("line stagger must be finite and non-negative, got {0}")]
    BadStagger(f32),
    #[error("audio source must not be empty")]
    EmptyAudioSource,
}

/// Letter content and media supplied by the host page.
///
/// Every field is optional in the JSON; missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LetterConfig {
    pub lines: Vec<String>,
    pub audio_src: String,
    pub line_stagger_sec: f32,
    pub hint_text: String,
}

impl Default for LetterConfig {
    fn default() -> Self {
        Self {
            lines: vec![
                "Dear friend,".to_string(),
                "In the dance of stars and hearts, your smile lights up the universe.".to_string(),
                "Wishing you a birthday as magical and vibrant as you are.".to_string(),
                "With all my love,".to_string(),
                "A friend".to_string(),
            ],
            audio_src: "bgmusic.mp3".to_string(),
            line_stagger_sec: LINE_STAGGER_SEC,
            hint_text: "double tap the heart".to_string(),
        }
    }
}

impl LetterConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: LetterConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lines.is_empty() {
            return Err(ConfigError::NoLines);
        }
        if !self.line_stagger_sec.is_finite() || self.line_stagger_sec < 0.0 {
            return Err(ConfigError::BadStagger(self.line_stagger_sec));
        }
        if self.audio_src.trim().is_empty() {
            return Err(ConfigError::EmptyAudioSource);
        }
        Ok(())
    }
}
