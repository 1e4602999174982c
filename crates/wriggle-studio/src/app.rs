use wriggle_engine::coords::{Vec2, Viewport};
use wriggle_engine::core::{App, AppControl, FrameCtx};
use wriggle_engine::input::{InputEvent, Key, KeyState, MouseButton, MouseButtonState};
use wriggle_engine::paint::Color;
use wriggle_engine::render::{RibbonMesh, RibbonRenderer};
use wriggle_gesture::{build_mesh, GesturePool};

/// Worms are drawn in a single flat warm white on black.
const BACKGROUND: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
const FILL: Color = Color::from_premul(1.0, 1.0, 0.96, 1.0);

/// How strongly the fps readout follows the instantaneous frame rate.
const FPS_SMOOTHING: f32 = 0.1;

/// Title refresh cadence in frames.
const TITLE_INTERVAL: u64 = 15;

pub struct StudioApp {
    pool: GesturePool,
    renderer: RibbonRenderer,
    /// One reusable mesh per pool slot.
    meshes: Vec<RibbonMesh>,
    /// True between pointer press and release; freezes the active gesture's
    /// loop while the stroke is still under the cursor.
    drawing: bool,
    fps: f32,
}

impl StudioApp {
    pub fn new() -> Self {
        let pool = GesturePool::new();
        let meshes = (0..pool.len()).map(|_| RibbonMesh::new()).collect();

        Self {
            pool,
            renderer: RibbonRenderer::new(),
            meshes,
            drawing: false,
            fps: 0.0,
        }
    }

    /// Applies this frame's input events in arrival order: stroke recording
    /// and the editing keys. Returns `true` if an exit was requested.
    fn handle_input(&mut self, ctx: &FrameCtx<'_, '_>, canvas: Viewport) -> bool {
        let mut exit = false;

        for ev in &ctx.input_frame.events {
            match ev {
                InputEvent::PointerButton(e) if e.button == MouseButton::Left => match e.state {
                    MouseButtonState::Pressed => {
                        self.drawing = true;
                        let gesture = self.pool.begin_gesture();
                        gesture.add_point(Vec2::new(e.x, e.y));
                    }
                    MouseButtonState::Released => {
                        self.drawing = false;
                    }
                },

                InputEvent::PointerMoved(m) if self.drawing => {
                    if let Some(gesture) = self.pool.active_mut() {
                        if gesture.add_point(Vec2::new(m.x, m.y)) {
                            gesture.smooth();
                            gesture.compile(canvas);
                        }
                    }
                }

                InputEvent::Key {
                    key,
                    state: KeyState::Pressed,
                    ..
                } => match key {
                    Key::Equal => self.nudge_thickness(1.0, canvas),
                    Key::Minus => self.nudge_thickness(-1.0, canvas),
                    Key::Space => self.pool.clear_all(),
                    Key::Escape => exit = true,
                    _ => {}
                },

                _ => {}
            }
        }

        exit
    }

    /// Adjusts the active gesture's thickness. With no stroke ever started
    /// there is no active gesture and the key is ignored.
    fn nudge_thickness(&mut self, delta: f32, canvas: Viewport) {
        if let Some(gesture) = self.pool.active_mut() {
            let thickness = gesture.thickness();
            gesture.set_thickness(thickness + delta, canvas);
        }
    }

    fn update_title(&mut self, ctx: &FrameCtx<'_, '_>) {
        let instantaneous = 1.0 / ctx.time.dt;
        self.fps = if self.fps == 0.0 {
            instantaneous
        } else {
            self.fps + (instantaneous - self.fps) * FPS_SMOOTHING
        };

        if ctx.time.frame_index % TITLE_INTERVAL == 0 {
            let title = format!(
                "wriggle  |  {:.1} fps  |  gestures: {}",
                self.fps,
                self.pool.count_active()
            );
            ctx.window.set_title(&title);
        }
    }
}

impl App for StudioApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let canvas = ctx.window.viewport();

        if self.handle_input(ctx, canvas) {
            return AppControl::Exit;
        }

        // All loop advances complete before any geometry is built or drawn,
        // so a frame never mixes pre- and post-advance shapes.
        self.pool.advance_all(self.drawing, canvas);

        for (gesture, mesh) in self.pool.iter().zip(self.meshes.iter_mut()) {
            build_mesh(gesture, canvas, mesh);
        }

        self.update_title(ctx);

        let renderer = &mut self.renderer;
        let meshes = &self.meshes;
        ctx.render(BACKGROUND, |rctx, target| {
            renderer.render(rctx, target, meshes, FILL);
        })
    }
}

impl Default for StudioApp {
    fn default() -> Self {
        Self::new()
    }
}
