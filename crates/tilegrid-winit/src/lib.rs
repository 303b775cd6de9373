//! Winit host adapter for the tile renderer.
//!
//! Drives a [`TileView`] in a native window using:
//! - [`winit`] for window creation and host callbacks
//! - [`softbuffer`] for CPU-based pixel presentation
//!
//! The embedding application supplies a [`Scene`]: tile registration on
//! startup, grid updates before each redraw. Resize notifications and draw
//! requests arrive serially on the event-loop thread, matching the view's
//! single-threaded model.
//!
//! # Usage
//!
//! ```rust,no_run
//! use tilegrid_core::{Error, SolidTile, TileView};
//! use tilegrid_winit::{Scene, WinitConfig, WinitDriver};
//!
//! struct Blink;
//!
//! impl Scene for Blink {
//!     fn init(&mut self, view: &mut TileView) -> Result<(), Error> {
//!         view.reset_palette(2);
//!         view.register_tile(1, &SolidTile::new([255, 0, 0, 255]))
//!     }
//!     fn frame(&mut self, view: &mut TileView) -> Result<(), Error> {
//!         view.set_tile(1, 5, 5)
//!     }
//! }
//!
//! let driver = WinitDriver::new(WinitConfig::default());
//! driver.run(Box::new(Blink)).unwrap();
//! ```

mod canvas;

pub use canvas::{BLACK, PixelCanvas};

use std::num::NonZeroU32;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use tilegrid_core::{Error, TileView, ViewConfig};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Fallback display height when no monitor reports one.
const DEFAULT_DISPLAY_HEIGHT: i32 = 1080;

/// Configuration for the winit driver.
pub struct WinitConfig {
    /// Window title.
    pub title: String,
    /// Layout configuration for the tile view.
    pub view: ViewConfig,
    /// ARGB color the canvas is cleared to before each render.
    pub clear_color: u32,
}

impl Default for WinitConfig {
    fn default() -> Self {
        Self {
            title: "tilegrid".into(),
            view: ViewConfig::default(),
            clear_color: BLACK,
        }
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// What the embedding application supplies to the driver.
pub trait Scene {
    /// Called once after the window opens, before the first render.
    /// Register the palette and any initial board contents here.
    fn init(&mut self, view: &mut TileView) -> Result<(), Error>;

    /// Called before each redraw to update the grid contents.
    fn frame(&mut self, view: &mut TileView) -> Result<(), Error>;
}

// ---------------------------------------------------------------------------
// WinitDriver
// ---------------------------------------------------------------------------

/// Winit-based windowed host for a [`TileView`].
pub struct WinitDriver {
    config: WinitConfig,
}

impl WinitDriver {
    pub fn new(config: WinitConfig) -> Self {
        Self { config }
    }

    /// Run the event loop until the window is closed.
    pub fn run(self, scene: Box<dyn Scene>) -> Result<(), Box<dyn std::error::Error>> {
        let event_loop = EventLoop::new()?;
        let mut app = WinitApp::new(self.config, scene);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// WinitApp — ApplicationHandler
// ---------------------------------------------------------------------------

struct WinitApp {
    config: WinitConfig,
    scene: Box<dyn Scene>,
    state: Option<WinitState>,
}

struct WinitState {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    view: TileView,
    canvas: PixelCanvas,
    pixel_width: u32,
    pixel_height: u32,
}

impl WinitApp {
    fn new(config: WinitConfig, scene: Box<dyn Scene>) -> Self {
        Self {
            config,
            scene,
            state: None,
        }
    }

    fn render(&mut self) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        if let Err(e) = self.scene.frame(&mut state.view) {
            log::warn!("scene frame failed: {e}");
        }

        state.canvas.clear(self.config.clear_color);
        if let Err(e) = state.view.render(&mut state.canvas) {
            log::warn!("render skipped: {e}");
            return;
        }

        let (width, height) = (state.pixel_width, state.pixel_height);
        if width == 0 || height == 0 {
            return;
        }

        let mut buf = match state.surface.buffer_mut() {
            Ok(b) => b,
            Err(_) => return,
        };

        state
            .canvas
            .blit_to_buffer(&mut buf, width as usize, height as usize);

        buf.present().ok();
    }
}

impl ApplicationHandler for WinitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return; // already initialized
        }

        // Derive the tile size from the display metrics.
        let display_height = event_loop
            .primary_monitor()
            .map(|m| m.size().height as i32)
            .unwrap_or(DEFAULT_DISPLAY_HEIGHT);

        let mut view = match TileView::new(self.config.view, display_height) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("cannot build tile view: {e}");
                event_loop.exit();
                return;
            }
        };

        // Open the window at the exact board size; the host may resize it
        // afterwards.
        let pixel_w = (view.tile_size() * view.config().x_tile_count) as u32;
        let pixel_h = (view.tile_size() * view.config().y_tile_count) as u32;

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(pixel_w, pixel_h))
            .with_resizable(true);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("failed to create window"),
        );

        let context =
            softbuffer::Context::new(window.clone()).expect("failed to create softbuffer context");
        let mut surface = softbuffer::Surface::new(&context, window.clone())
            .expect("failed to create softbuffer surface");

        surface
            .resize(
                NonZeroU32::new(pixel_w).unwrap_or(NonZeroU32::new(1).unwrap()),
                NonZeroU32::new(pixel_h).unwrap_or(NonZeroU32::new(1).unwrap()),
            )
            .ok();

        view.on_resize(pixel_w as i32, pixel_h as i32);
        if let Err(e) = self.scene.init(&mut view) {
            log::warn!("scene init failed: {e}");
        }

        self.state = Some(WinitState {
            window,
            surface,
            view,
            canvas: PixelCanvas::new(pixel_w as usize, pixel_h as usize),
            pixel_width: pixel_w,
            pixel_height: pixel_h,
        });

        self.render();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(state) = self.state.as_mut() {
                    log::debug!("resized to {width}x{height}");
                    state.pixel_width = width;
                    state.pixel_height = height;
                    state
                        .surface
                        .resize(
                            NonZeroU32::new(width).unwrap_or(NonZeroU32::new(1).unwrap()),
                            NonZeroU32::new(height).unwrap_or(NonZeroU32::new(1).unwrap()),
                        )
                        .ok();
                    state.canvas.resize(width as usize, height as usize);
                    state.view.on_resize(width as i32, height as i32);
                }
                self.render();
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            _ => {}
        }
    }
}
