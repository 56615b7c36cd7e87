use crate::adapters::huggingface::IMAGE_SERVICE;
use crate::core::border::add_border;
use crate::core::overlay::TextOverlay;
use crate::core::wrap::add_line_breaks;
use crate::domain::model::SummaryItem;
use crate::domain::ports::{ImageGenerator, Summarizer};
use crate::utils::error::{AppError, Result};
use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use std::sync::Arc;

/// Wrap the caller's prompt in the narrative sent to the image model.
pub fn narrative_prompt(prompt: &str) -> String {
    format!(
        "Create a program that utilizes stable diffusion to fetch real-time updates as stated in {}, \
         dynamically generating visually appealing images representing these updates. \
         The generated images should succinctly summarize the latest news and developments for the company, \
         ready for seamless posting on their respective social media feeds.",
        prompt
    )
}

/// Generate, caption and frame an image for one prompt.
pub struct ImagePipeline {
    generator: Arc<dyn ImageGenerator>,
    summarizer: Arc<dyn Summarizer>,
    overlay: Arc<TextOverlay>,
}

impl ImagePipeline {
    pub fn new(
        generator: Arc<dyn ImageGenerator>,
        summarizer: Arc<dyn Summarizer>,
        overlay: TextOverlay,
    ) -> Self {
        Self {
            generator,
            summarizer,
            overlay: Arc::new(overlay),
        }
    }

    /// Returns the composed image as PNG bytes.
    pub async fn run(&self, prompt: &str) -> Result<Vec<u8>> {
        tracing::info!("Generating image for prompt ({} chars)", prompt.len());

        let image_bytes = self.generator.generate(&narrative_prompt(prompt)).await?;
        let base = decode_image(&image_bytes)?;
        tracing::debug!("Decoded base image {}x{}", base.width(), base.height());

        let items = self.summarizer.summarize(prompt).await?;
        let summary = first_summary(items)?;
        tracing::debug!("Summary: {}", summary);

        let overlay = Arc::clone(&self.overlay);
        let png = tokio::task::spawn_blocking(move || compose(&overlay, base, &summary))
            .await
            .map_err(|e| AppError::Internal {
                message: format!("compositing task failed: {}", e),
            })??;

        tracing::info!("Composed image ready ({} bytes)", png.len());
        Ok(png)
    }
}

pub fn decode_image(bytes: &[u8]) -> Result<RgbImage> {
    if bytes.is_empty() {
        return Err(AppError::EmptyResponse {
            service: IMAGE_SERVICE,
        });
    }

    image::load_from_memory(bytes)
        .map(|decoded| decoded.to_rgb8())
        .map_err(|e| AppError::MalformedImage {
            reason: e.to_string(),
        })
}

/// An empty summary list or a first item without text fails the request.
pub fn first_summary(items: Vec<SummaryItem>) -> Result<String> {
    items
        .into_iter()
        .next()
        .and_then(|item| item.summary_text)
        .ok_or(AppError::MissingSummary)
}

/// Line-wrap the summary, draw it on the image, frame the result and encode it.
pub fn compose(overlay: &TextOverlay, base: RgbImage, summary: &str) -> Result<Vec<u8>> {
    let formatted = add_line_breaks(summary);
    let captioned = overlay.render(base, &formatted)?;
    let framed = add_border(&captioned);
    encode_png(&framed)
}

pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}
