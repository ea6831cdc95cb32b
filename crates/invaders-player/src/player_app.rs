//! Player application implementing winit ApplicationHandler
//!
//! Translates window events into input events and runs one game-loop frame
//! every time the event loop goes idle.

use invaders_core::{InvadersError, Result, Size, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use invaders_render::{RenderContext, SpriteImage, SpriteRenderer, SpriteTexture};
use invaders_runtime::{
    input_event, FrameStats, GameLoop, InputEvent, InputQueue, LoopState, SpriteSet, ThreadPacer,
};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

pub struct PlayerApp {
    /// Decoded sprites, consumed when the window comes up
    images: Option<SpriteSet<SpriteImage>>,

    // Rendering
    window: Option<Arc<Window>>,
    renderer: Option<SpriteRenderer>,

    // Game
    game_loop: Option<GameLoop<SpriteTexture>>,
    events: InputQueue,
    pacer: ThreadPacer,
    stats: FrameStats,

    startup_error: Option<InvadersError>,
}

impl PlayerApp {
    pub fn new(images: SpriteSet<SpriteImage>) -> Self {
        Self {
            images: Some(images),
            window: None,
            renderer: None,
            game_loop: None,
            events: InputQueue::new(),
            pacer: ThreadPacer,
            stats: FrameStats::new(),
            startup_error: None,
        }
    }

    /// The error that stopped startup, if any. The event loop has already
    /// been asked to exit when this is set.
    pub fn take_startup_error(&mut self) -> Option<InvadersError> {
        self.startup_error.take()
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        // Hidden until the first texture upload succeeds
        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64))
            .with_resizable(false)
            .with_visible(false);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| InvadersError::WindowCreation(e.to_string()))?,
        );

        let render_context = pollster::block_on(RenderContext::new(window.clone()))
            .map_err(|e| InvadersError::WindowCreation(e.to_string()))?;
        let renderer = SpriteRenderer::new(render_context, Size::screen());

        let images = self
            .images
            .take()
            .ok_or_else(|| InvadersError::WindowCreation("initialized twice".into()))?;
        let sprites = SpriteSet {
            ship: renderer.upload("ship", &images.ship),
            enemy: renderer.upload("enemy", &images.enemy),
        };

        window.set_visible(true);
        log::info!(
            "Window ready: {}x{} '{}'",
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
            WINDOW_TITLE
        );

        self.game_loop = Some(GameLoop::new(sprites));
        self.renderer = Some(renderer);
        self.window = Some(window);

        Ok(())
    }

    fn queue(&mut self, event: InputEvent) {
        if !self.events.push(event) {
            log::debug!("Quit pending, dropped {:?}", event);
        }
    }

    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(game_loop), Some(renderer)) = (self.game_loop.as_mut(), self.renderer.as_mut())
        else {
            return;
        };

        let events = self.events.take_frame();
        match game_loop.run_frame(events, renderer, &mut self.pacer) {
            LoopState::Terminated => event_loop.exit(),
            LoopState::Running => {
                if let Some((fps, per_frame)) = self.stats.on_frame() {
                    log::debug!(
                        "{} fps ({:.2} ms/frame), t = {:.2}s",
                        fps,
                        per_frame.as_secs_f64() * 1000.0,
                        game_loop.clock().elapsed()
                    );
                }
            }
        }
    }
}

impl ApplicationHandler for PlayerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.startup_error.is_some() {
            return;
        }

        if let Err(e) = self.initialize(event_loop) {
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.queue(InputEvent::Quit);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(input) = input_event(event.physical_key, event.state) {
                    self.queue(input);
                }
            }

            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.run_frame(event_loop);
    }
}
