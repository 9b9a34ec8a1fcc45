use std::io::Cursor;
use thiserror::Error;

use crate::assemble::assemble;
use crate::cluster::cluster;
use crate::config::ScanConfig;
use crate::detector::{OcrError, TextDetector};
use crate::types::{Line, Receipt, Token};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read image header: {0}")]
    Image(#[from] image::ImageError),
    #[error("Text detection failed: {0}")]
    Ocr(#[from] OcrError),
}

/// The result of a single receipt scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    /// Reconstructed rows, bottom of the receipt first.
    pub lines: Vec<Line>,
    pub receipt: Receipt,
}

/// Orchestrates: image height → detection → line clustering → assembly.
pub struct ReceiptScanner<D: TextDetector> {
    detector: D,
    config: ScanConfig,
}

impl<D: TextDetector> ReceiptScanner<D> {
    pub fn new(detector: D, config: ScanConfig) -> Self {
        Self { detector, config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan raw image bytes (PNG, JPEG, …). Only the image header is decoded
    /// here; the pixels go to the detector untouched.
    pub fn scan_bytes(&self, image_bytes: &[u8]) -> Result<ScanOutcome, ScanError> {
        let (width, height) = image::ImageReader::new(Cursor::new(image_bytes))
            .with_guessed_format()
            .map_err(image::ImageError::IoError)?
            .into_dimensions()?;

        let tokens = self.detector.detect(image_bytes)?;
        tracing::debug!(width, height, tokens = tokens.len(), "detected text regions");

        Ok(self.scan_tokens(&tokens, height))
    }

    /// Run clustering and assembly over tokens already detected on an image
    /// `image_height` pixels tall.
    pub fn scan_tokens(&self, tokens: &[Token], image_height: u32) -> ScanOutcome {
        let epsilon = self.config.epsilon_for_height(image_height);
        let lines = cluster(tokens, epsilon);
        tracing::debug!(epsilon, ?lines, "receipt lines");

        let receipt = assemble(&lines);
        tracing::debug!(items = receipt.len(), tax = %receipt.tax, "assembled receipt");

        ScanOutcome { lines, receipt }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::MockDetector;
    use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
    use slipscan_core::{Money, Quad};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img: GrayImage = ImageBuffer::from_fn(width, height, |_, _| Luma([200u8]));
        let mut buf = Vec::new();
        DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    fn tok(text: &str, x: f64, y: f64) -> Token {
        Token::new(text, 0.95, Quad::axis_aligned(x, y, x + 60.0, y + 18.0))
    }

    #[test]
    fn scan_bytes_uses_image_height_for_tolerance() {
        // 3px apart: one row on a 400px image (epsilon 4), two on 200px.
        let tokens = vec![tok("Bread", 10.0, 100.0), tok("3.99", 200.0, 103.0)];

        let scanner = ReceiptScanner::new(MockDetector::new(tokens.clone()), ScanConfig::default());
        let outcome = scanner.scan_bytes(&png(4, 400)).unwrap();
        assert_eq!(outcome.lines.len(), 1);
        assert_eq!(outcome.receipt.get("Bread"), Some(Money::from_cents(399)));

        let outcome = scanner.scan_bytes(&png(4, 200)).unwrap();
        assert_eq!(outcome.lines.len(), 2);
    }

    #[test]
    fn nothing_detected_is_an_empty_receipt() {
        let scanner = ReceiptScanner::new(MockDetector::new(vec![]), ScanConfig::default());
        let outcome = scanner.scan_bytes(&png(4, 4)).unwrap();
        assert!(outcome.lines.is_empty());
        assert_eq!(outcome.receipt, Receipt::default());
    }

    #[test]
    fn unreadable_image_is_an_error() {
        let scanner = ReceiptScanner::new(MockDetector::new(vec![]), ScanConfig::default());
        let err = scanner.scan_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ScanError::Image(_)));
    }

    #[test]
    fn scan_tokens_skips_the_image() {
        let scanner = ReceiptScanner::new(MockDetector::new(vec![]), ScanConfig::default());
        let tokens = vec![tok("Tax", 10.0, 300.0), tok("0.80", 200.0, 300.0)];
        let outcome = scanner.scan_tokens(&tokens, 1000);
        assert_eq!(outcome.receipt.tax, Money::from_cents(80));
        assert!(outcome.receipt.is_empty());
    }
}
