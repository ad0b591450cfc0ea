use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::DecodedBitmap;

#[async_trait]
pub trait BitmapDecoder: Send + Sync {
    async fn decode_bitmap_bytes(&self, encoded_bytes: Vec<u8>) -> Result<DecodedBitmap>;
}
