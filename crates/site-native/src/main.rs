use std::time::Instant;

use anyhow::Context;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use site_core::gpu::{preferred_format, GliderPipeline};
use site_core::{
    hits_glider, pixels_to_ndc, pointer_on_drag_plane, Camera, GliderController, IdleTimer,
    SceneUniforms, IDLE_TICK_MS,
};

const SKY: wgpu::Color = wgpu::Color {
    r: 0.53,
    g: 0.75,
    b: 0.92,
    a: 1.0,
};

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: GliderPipeline,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = preferred_format(&surface_caps);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        let pipeline = GliderPipeline::new(&device, format);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn size(&self) -> Vec2 {
        Vec2::new(self.config.width as f32, self.config.height as f32)
    }

    fn camera(&self) -> Camera {
        let size = self.size();
        Camera::hero(size.x / size.y)
    }

    fn render(&mut self, uniforms: &SceneUniforms) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.pipeline
            .draw(&self.queue, &mut encoder, &view, uniforms, SKY);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Hero controller plus the host-side bits the browser would otherwise own.
struct Preview {
    controller: GliderController<StdRng>,
    idle: IdleTimer,
    started: Instant,
    last_frame: Instant,
    cursor: Option<Vec2>,
}

impl Preview {
    fn new(rng: StdRng) -> Self {
        let now = Instant::now();
        Self {
            controller: GliderController::new(rng),
            idle: IdleTimer::from_millis(IDLE_TICK_MS),
            started: now,
            last_frame: now,
            cursor: None,
        }
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        for _ in 0..self.idle.advance(dt) {
            self.controller.on_idle_tick();
        }
        self.controller.on_frame((now - self.started).as_secs_f32());
    }

    fn pointer_ndc(&self, size: Vec2) -> Option<Vec2> {
        self.cursor.map(|px| pixels_to_ndc(px, size.x, size.y))
    }

    fn press(&mut self, camera: &Camera, size: Vec2) {
        let Some(ndc) = self.pointer_ndc(size) else {
            return;
        };
        if !hits_glider(camera, ndc, self.controller.pose().translation) {
            return;
        }
        if let Some(p) = pointer_on_drag_plane(camera, ndc) {
            self.controller.on_drag_start(p);
        }
    }

    fn moved(&mut self, camera: &Camera, size: Vec2, px: Vec2) {
        self.cursor = Some(px);
        if !self.controller.is_dragging() {
            return;
        }
        let ndc = pixels_to_ndc(px, size.x, size.y);
        if let Some(p) = pointer_on_drag_plane(camera, ndc) {
            self.controller.on_drag_move(p);
        }
    }

    fn release(&mut self) {
        if self.controller.is_dragging() {
            self.controller.on_drag_end();
        }
    }

    fn left(&mut self) {
        self.cursor = None;
        if self.controller.is_dragging() {
            self.controller.on_drag_cancel();
        }
    }
}

fn seed_from_args() -> anyhow::Result<Option<u64>> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            let value = args.next().context("--seed needs a value")?;
            let seed = value
                .parse::<u64>()
                .with_context(|| format!("invalid --seed {value:?}"))?;
            return Ok(Some(seed));
        }
        log::warn!("ignoring argument {arg:?}");
    }
    Ok(None)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let rng = match seed_from_args()? {
        Some(seed) => {
            log::info!("flight seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut preview = Preview::new(rng);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Hang Gliding Rio (hero preview)")
        .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 480.0))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let px = Vec2::new(position.x as f32, position.y as f32);
                preview.moved(&state.camera(), state.size(), px);
            }
            WindowEvent::CursorLeft { .. } => preview.left(),
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => match button_state {
                ElementState::Pressed => preview.press(&state.camera(), state.size()),
                ElementState::Released => preview.release(),
            },
            _ => {}
        },
        Event::AboutToWait => {
            preview.tick();
            let uniforms = SceneUniforms::new(&state.camera(), &preview.controller.pose());
            match state.render(&uniforms) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("frame skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
