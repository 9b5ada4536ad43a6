use ledge_engine::{
    Game, GameConfig, EngineContext, StateManager,
    InputEvent, InputQueue, RenderBuffer,
    FixedTimestep, ProtocolLayout,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    states: StateManager,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frame: u32,
    /// Header + instances, packed for a single host read.
    frame_buffer: Vec<f32>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt).with_max_steps(config.max_steps_per_frame);
        let layout = ProtocolLayout::from_config(&config);

        Self {
            game,
            ctx: EngineContext::new(&config),
            states: StateManager::new(),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            timestep,
            layout,
            config,
            initialized: false,
            frame: 0,
            frame_buffer: Vec::new(),
        }
    }

    /// Enter the game's first state. Call once after construction.
    pub fn init(&mut self) {
        let initial = self.game.initial_state(&mut self.ctx);
        self.states.start(initial, &mut self.ctx);
        self.initialized = true;
        self.render();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: fixed-step updates with a transition boundary
    /// after each step, then render.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            let changed = self.states.update(&mut self.ctx, &self.input, self.timestep.dt());
            // Edges belong to the step that saw them, even across a transition.
            self.input.end_step();
            if changed {
                self.timestep.reset();
                log::debug!("stack is now {:?}", self.states.names());
            }
            if self.states.is_empty() {
                log::error!("state stack emptied; nothing left to run");
                break;
            }
        }

        self.frame = self.frame.wrapping_add(1);
        self.render();
    }

    fn render(&mut self) {
        self.render_buffer.clear(ledge_engine::Color::BLACK);
        self.states.render(&mut self.render_buffer);
        self.layout
            .write_frame(self.frame, self.ctx.world_size(), &self.render_buffer, &mut self.frame_buffer);
    }

    /// Exit every state. The runner ignores ticks afterwards.
    pub fn shutdown(&mut self) {
        self.states.shutdown(&mut self.ctx);
        self.initialized = false;
    }

    // ---- Side channels (JSON) ----

    /// Audio commands queued since the last call, as a JSON array.
    pub fn take_audio_commands(&mut self) -> String {
        let commands = self.ctx.audio.take_commands();
        serde_json::to_string(&commands).unwrap_or_else(|e| {
            log::error!("failed to encode audio commands: {}", e);
            "[]".to_string()
        })
    }

    /// Asset load/unload events since the last call, as a JSON array.
    pub fn take_asset_events(&mut self) -> String {
        let events = self.ctx.assets.take_events();
        serde_json::to_string(&events).unwrap_or_else(|e| {
            log::error!("failed to encode asset events: {}", e);
            "[]".to_string()
        })
    }

    // ---- Pointer accessors for host reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame_buffer.as_ptr()
    }

    pub fn clear_color(&self) -> u32 {
        self.render_buffer.clear_color.to_u32()
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    // ---- Introspection ----

    pub fn states(&self) -> &StateManager {
        &self.states
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn frame_buffer(&self) -> &[f32] {
        &self.frame_buffer
    }
}
