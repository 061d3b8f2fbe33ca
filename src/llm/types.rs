use serde::Serialize;

/// Body of a chat completion request carrying one inline image.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl<'a> {
    pub url: &'a str,
    pub detail: &'a str,
}

impl<'a> ChatMessage<'a> {
    pub fn user_with_image(text: &'a str, image_url: &'a str, detail: &'a str) -> Self {
        Self {
            role: "user",
            content: vec![
                ContentPart::Text { text },
                ContentPart::ImageUrl { image_url: ImageUrl { url: image_url, detail } },
            ],
        }
    }
}
