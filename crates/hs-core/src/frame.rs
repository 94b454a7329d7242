//! Captured camera frame
//!
//! Opaque to the engine: frames are handed straight to the image service,
//! which owns all interpretation of the pixel data.

/// A single captured frame from the monitoring camera
#[derive(Debug, Clone)]
pub struct CameraFrame {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Raw pixel bytes; layout is a contract between camera and detector
    pub pixels: Vec<u8>,
}

impl CameraFrame {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// An all-zero frame of the given dimensions, for tests and placeholders
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }
}
