//! OpenRouter chat-completions client used for photo analysis and image
//! generation.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::OpenRouterConfig;
use crate::error::ServiceError;
use crate::scene::ViewAnalysis;

const VISION_INSTRUCTIONS: &str = r#"Analyze this image and respond in JSON format:
{
  "landscape": "description of terrain, horizon, water, vegetation, sky, viewing angle",
  "hasPerson": true/false,
  "personDetails": "if person present: gender, approximate age, pose, position in frame, facial features to preserve"
}
Be concise but specific. Response ONLY the JSON, no other text."#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GeneratedImage {
    Base64(String),
    Url(String),
}

pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    pub fn new(api_key: String, config: OpenRouterConfig) -> Result<Self, ServiceError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// Describes a JPEG photo: its landscape and any person in frame.
    pub async fn describe_view(&self, image_base64: &str) -> Result<ViewAnalysis, ServiceError> {
        let body = json!({
            "model": self.config.vision_model,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": VISION_INSTRUCTIONS },
                    { "type": "image_url", "image_url": { "url": data_url(image_base64) } },
                ],
            }],
            "max_tokens": 400,
        });

        let completion = self.post(&body).await?;
        let content = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_str())
            .unwrap_or_default();
        Ok(parse_view_content(content))
    }

    /// Asks the image model for a picture, optionally editing `photo`.
    pub async fn generate_image(
        &self,
        instruction: &str,
        photo: Option<&str>,
    ) -> Result<GeneratedImage, ServiceError> {
        let content = match photo {
            Some(photo) => json!([
                { "type": "image_url", "image_url": { "url": data_url(photo) } },
                { "type": "text", "text": instruction },
            ]),
            None => Value::String(instruction.to_string()),
        };
        let body = json!({
            "model": self.config.image_model,
            "modalities": ["text", "image"],
            "messages": [{ "role": "user", "content": content }],
        });

        let completion = self.post(&body).await?;
        completion
            .choices
            .first()
            .and_then(|c| extract_image(&c.message))
            .ok_or(ServiceError::Empty("an image"))
    }

    async fn post(&self, body: &Value) -> Result<Completion, ServiceError> {
        let response = self
            .client
            .post(&self.config.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .header("HTTP-Referer", &self.config.site_name)
            .header("X-Title", &self.config.title)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                .unwrap_or(text);
            return Err(ServiceError::Status { status, message });
        }

        Ok(response.json().await?)
    }
}

fn data_url(image_base64: &str) -> String {
    format!("data:image/jpeg;base64,{image_base64}")
}

#[derive(Deserialize)]
struct Completion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Default)]
struct ChoiceMessage {
    #[serde(default)]
    content: Value,
    #[serde(default)]
    images: Option<Vec<ContentPart>>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    image_url: Option<ImageUrl>,
}

#[derive(Deserialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VisionReply {
    #[serde(default)]
    landscape: String,
    #[serde(default)]
    has_person: bool,
    #[serde(default)]
    person_details: String,
}

/// Parses the vision model's JSON reply, tolerating Markdown fences. Text
/// that is not JSON becomes the landscape description as-is.
pub fn parse_view_content(content: &str) -> ViewAnalysis {
    let cleaned = content
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    match serde_json::from_str::<VisionReply>(cleaned) {
        Ok(reply) => ViewAnalysis {
            description: reply.landscape,
            person: reply.has_person.then_some(reply.person_details),
        },
        Err(_) => ViewAnalysis {
            description: content.to_string(),
            person: None,
        },
    }
}

fn image_from_part(part: &ContentPart) -> Option<GeneratedImage> {
    if part.kind != "image_url" {
        return None;
    }
    let url = &part.image_url.as_ref()?.url;
    if url.starts_with("data:image") {
        url.split_once(',')
            .map(|(_, data)| GeneratedImage::Base64(data.to_string()))
    } else {
        Some(GeneratedImage::Url(url.clone()))
    }
}

fn extract_image(message: &ChoiceMessage) -> Option<GeneratedImage> {
    if let Some(image) = message.images.iter().flatten().find_map(image_from_part) {
        return Some(image);
    }
    let parts: Vec<ContentPart> = serde_json::from_value(message.content.clone()).ok()?;
    parts.iter().find_map(image_from_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(value: Value) -> ChoiceMessage {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn vision_reply_in_code_fence() {
        let content = "```json\n{\"landscape\": \"lake shore\", \"hasPerson\": true, \"personDetails\": \"child, waving\"}\n```";
        let view = parse_view_content(content);
        assert_eq!(view.description, "lake shore");
        assert_eq!(view.person.as_deref(), Some("child, waving"));
    }

    #[test]
    fn vision_reply_without_person() {
        let view = parse_view_content(r#"{"landscape": "pine forest", "hasPerson": false}"#);
        assert_eq!(view.description, "pine forest");
        assert!(!view.has_person());
    }

    #[test]
    fn free_text_vision_reply_is_kept() {
        let view = parse_view_content("A rocky coast under grey sky.");
        assert_eq!(view.description, "A rocky coast under grey sky.");
        assert!(view.person.is_none());
    }

    #[test]
    fn image_from_images_array() {
        let msg = message(json!({
            "content": "here you go",
            "images": [{ "type": "image_url", "image_url": { "url": "data:image/png;base64,AAAA" } }]
        }));
        assert_eq!(extract_image(&msg), Some(GeneratedImage::Base64("AAAA".into())));
    }

    #[test]
    fn image_from_content_parts() {
        let msg = message(json!({
            "content": [
                { "type": "text", "text": "done" },
                { "type": "image_url", "image_url": { "url": "https://cdn.example/img.png" } }
            ]
        }));
        assert_eq!(
            extract_image(&msg),
            Some(GeneratedImage::Url("https://cdn.example/img.png".into()))
        );
    }

    #[test]
    fn text_only_reply_has_no_image() {
        let msg = message(json!({ "content": "I cannot draw that." }));
        assert_eq!(extract_image(&msg), None);
    }

    #[tokio::test]
    async fn stalled_service_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accepts connections but never answers.
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let config = OpenRouterConfig {
            url: format!("http://{addr}/api/v1/chat/completions"),
            timeout_secs: 1,
            ..OpenRouterConfig::default()
        };
        let client = OpenRouterClient::new("key".into(), config).unwrap();
        let err = client.generate_image("a fjord", None).await.unwrap_err();
        match err {
            ServiceError::Transport(inner) => assert!(inner.is_timeout()),
            other => panic!("expected timeout, got {other:?}"),
        }
        server.abort();
    }
}
