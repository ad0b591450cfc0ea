use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::BitmapDecoder;
use crate::core::models::DecodedBitmap;
use crate::global_constants::LOG_TAG_DECODER;

/// Decodes pasted image bytes into RGBA for the preview tab. Malformed
/// payloads fail here and never replace existing session content.
pub struct ImageBitmapDecoder;

impl ImageBitmapDecoder {
    pub fn initialize() -> Self {
        log::debug!("{} initializing image bitmap decoder", LOG_TAG_DECODER);
        Self
    }

    fn decode_bytes(encoded_bytes: &[u8]) -> Result<DecodedBitmap> {
        let format = image::guess_format(encoded_bytes)
            .context("unrecognized image format in pasted bytes")?;
        log::debug!("{} guessed pasted format: {:?}", LOG_TAG_DECODER, format);

        let decoded = image::load_from_memory(encoded_bytes).context("image decode failed")?;
        let rgba_image = decoded.to_rgba8();
        let (width, height) = rgba_image.dimensions();
        let raw_rgba_data = rgba_image.into_raw();

        let expected_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .context("image dimensions overflow")?;
        if raw_rgba_data.len() != expected_len {
            anyhow::bail!("decoded pixel buffer has unexpected length");
        }

        log::info!(
            "{} decoded pasted image: {}x{}",
            LOG_TAG_DECODER,
            width,
            height
        );

        Ok(DecodedBitmap {
            width,
            height,
            raw_rgba_data,
        })
    }
}

#[async_trait]
impl BitmapDecoder for ImageBitmapDecoder {
    async fn decode_bitmap_bytes(&self, encoded_bytes: Vec<u8>) -> Result<DecodedBitmap> {
        tokio::task::spawn_blocking(move || Self::decode_bytes(&encoded_bytes))
            .await
            .context("image decode task was cancelled")?
    }
}
