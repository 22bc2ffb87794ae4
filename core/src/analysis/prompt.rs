use crate::analysis::wire::{ChatMessage, ChatRequest, ContentPart, ImageUrl};
use crate::imaging::png_data_uri;

/// Fixed instruction sent alongside every uploaded image.
pub const ANALYSIS_INSTRUCTION: &str = "You are an expert satellite imagery and geospatial analysis professional. Perform a comprehensive analysis of this satellite image. Focus on land use, vegetation cover, geological features, potential environmental changes, and any significant observations.";

/// Builds the single-turn request: one user message holding the image as a
/// data URI followed by the instruction text.
pub fn build_analysis_request(model: &str, max_tokens: u32, encoded_image: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![ChatMessage::user(vec![
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: png_data_uri(encoded_image),
                },
            },
            ContentPart::Text {
                text: ANALYSIS_INSTRUCTION.to_string(),
            },
        ])],
        max_tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_holds_one_user_turn_with_two_parts() {
        let request = build_analysis_request("vision-model", 1024, "QUJD");
        assert_eq!(request.model, "vision-model");
        assert_eq!(request.max_tokens, 1024);
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
        assert_eq!(request.messages[0].content.len(), 2);
    }

    #[test]
    fn image_part_uses_data_uri() {
        let request = build_analysis_request("vision-model", 512, "QUJD");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["messages"][0]["content"][0]["image_url"]["url"],
            "data:image/png;base64,QUJD"
        );
    }
}
