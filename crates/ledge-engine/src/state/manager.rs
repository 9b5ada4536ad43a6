use crate::api::game::EngineContext;
use crate::input::queue::InputQueue;
use crate::renderer::instance::RenderBuffer;
use super::{State, Transition};

/// Runs a stack of states. Only the top state updates; rendering starts at
/// the topmost non-overlay state and works upward.
///
/// Transitions are never applied while a state hook is running. States queue
/// them on the [`EngineContext`] and [`StateManager::apply_pending`] performs
/// them between steps, so the requesting state is never destroyed mid-update.
#[derive(Default)]
pub struct StateManager {
    states: Vec<Box<dyn State>>,
}

impl StateManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the first state. Anything already on the stack is exited first.
    pub fn start(&mut self, initial: Box<dyn State>, ctx: &mut EngineContext) {
        self.change(initial, ctx);
    }

    /// Update the top state for one fixed step, then apply whatever
    /// transition it requested. Returns true if the stack changed.
    pub fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) -> bool {
        if let Some(top) = self.states.last_mut() {
            top.update(ctx, input, dt);
        }
        self.apply_pending(ctx)
    }

    /// Apply the pending transition, if any.
    ///
    /// A transition requested from inside an `enter`/`exit`/`pause`/`resume`
    /// hook stays pending until the next call.
    pub fn apply_pending(&mut self, ctx: &mut EngineContext) -> bool {
        let Some(transition) = ctx.take_transition() else {
            return false;
        };
        match transition {
            Transition::Change(state) => self.change(state, ctx),
            Transition::Push(state) => self.push(state, ctx),
            Transition::Pop => return self.pop(ctx),
        }
        true
    }

    fn change(&mut self, mut state: Box<dyn State>, ctx: &mut EngineContext) {
        self.exit_all(ctx);
        log::info!("enter {}", state.name());
        state.enter(ctx);
        self.states.push(state);
    }

    fn push(&mut self, mut state: Box<dyn State>, ctx: &mut EngineContext) {
        if let Some(top) = self.states.last_mut() {
            log::info!("pause {}", top.name());
            top.pause(ctx);
        }
        log::info!("push {}", state.name());
        self.states.push(state);
        if let Some(top) = self.states.last_mut() {
            top.enter(ctx);
        }
    }

    fn pop(&mut self, ctx: &mut EngineContext) -> bool {
        if self.states.len() <= 1 {
            log::warn!("pop refused: the stack would be left empty");
            return false;
        }
        if let Some(mut top) = self.states.pop() {
            log::info!("exit {}", top.name());
            top.exit(ctx);
        }
        if let Some(top) = self.states.last_mut() {
            log::info!("resume {}", top.name());
            top.resume(ctx);
        }
        true
    }

    fn exit_all(&mut self, ctx: &mut EngineContext) {
        while let Some(mut state) = self.states.pop() {
            log::info!("exit {}", state.name());
            state.exit(ctx);
        }
    }

    /// Exit every state, top first. Used when the host tears the game down.
    pub fn shutdown(&mut self, ctx: &mut EngineContext) {
        self.exit_all(ctx);
    }

    /// Draw the visible part of the stack in bottom-to-top order.
    pub fn render(&self, buffer: &mut RenderBuffer) {
        let mut base = self.states.len();
        while base > 0 {
            base -= 1;
            if !self.states[base].is_overlay() {
                break;
            }
        }
        for state in self.states.iter().skip(base) {
            state.render(buffer);
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn top_name(&self) -> Option<&'static str> {
        self.states.last().map(|s| s.name())
    }

    /// State names from bottom to top.
    pub fn names(&self) -> Vec<&'static str> {
        self.states.iter().map(|s| s.name()).collect()
    }
}
