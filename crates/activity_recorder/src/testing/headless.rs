//! Headless surface for testing.

use crate::surface::Surface;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Configuration for a headless surface.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessConfig {
    /// Width in logical pixels.
    pub width: f64,
    /// Height in logical pixels.
    pub height: f64,
    /// Screen position of the surface's top-left corner.
    pub origin: (f64, f64),
    /// Scale factor from logical to screen pixels.
    pub scale_factor: f64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            origin: (0.0, 0.0),
            scale_factor: 1.0,
        }
    }
}

impl HeadlessConfig {
    /// Create a new config with specified dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Place the surface at a screen offset.
    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin = (x, y);
        self
    }

    /// Set the scale factor.
    pub fn with_scale_factor(mut self, scale: f64) -> Self {
        self.scale_factor = scale;
        self
    }
}

/// A surface with no display behind it.
pub struct HeadlessSurface {
    config: HeadlessConfig,
    size: Mutex<(f64, f64)>,
    focus_count: AtomicUsize,
    resize_count: AtomicUsize,
}

impl HeadlessSurface {
    /// Create an unscaled surface at the screen origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_config(HeadlessConfig::new(width, height))
    }

    pub fn with_config(config: HeadlessConfig) -> Self {
        Self {
            size: Mutex::new((config.width, config.height)),
            config,
            focus_count: AtomicUsize::new(0),
            resize_count: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &HeadlessConfig {
        &self.config
    }

    /// Number of times the surface was focused.
    pub fn focus_count(&self) -> usize {
        self.focus_count.load(Ordering::Relaxed)
    }

    /// Number of times the surface was resized.
    pub fn resize_count(&self) -> usize {
        self.resize_count.load(Ordering::Relaxed)
    }
}

impl Surface for HeadlessSurface {
    fn focus(&self) {
        self.focus_count.fetch_add(1, Ordering::Relaxed);
    }

    fn size(&self) -> (f64, f64) {
        *self.size.lock()
    }

    fn resize(&self, width: f64, height: f64) {
        *self.size.lock() = (width, height);
        self.resize_count.fetch_add(1, Ordering::Relaxed);
    }

    fn point_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        let (ox, oy) = self.config.origin;
        let scale = self.config.scale_factor;
        (ox + x * scale, oy + y * scale)
    }
}
