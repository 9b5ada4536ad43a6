//! Application modes (title screen, gameplay, pause overlay, ...) and the
//! stack that runs them.

pub mod manager;

use std::fmt;
use crate::api::game::EngineContext;
use crate::input::queue::InputQueue;
use crate::renderer::instance::RenderBuffer;

pub use manager::StateManager;

/// Lifecycle hooks for one application mode.
///
/// A state owns its entities outright: it creates them in `enter` and must
/// release them in `exit`. Transitions requested from any hook go through the
/// [`EngineContext`] and are applied by the [`StateManager`] at the next frame
/// boundary, never while the requesting state is still running.
pub trait State {
    /// Name used in lifecycle logs.
    fn name(&self) -> &'static str;

    /// Acquire assets, spawn entities, start state-scoped audio.
    fn enter(&mut self, ctx: &mut EngineContext);

    /// One fixed step of logic.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32);

    /// Draw into `buffer`. Opaque states start with `buffer.clear(..)`.
    fn render(&self, buffer: &mut RenderBuffer);

    /// Release entities and state-scoped assets.
    fn exit(&mut self, ctx: &mut EngineContext);

    /// Another state was pushed on top of this one. Resources stay loaded.
    fn pause(&mut self, _ctx: &mut EngineContext) {}

    /// The state on top of this one was popped.
    fn resume(&mut self, _ctx: &mut EngineContext) {}

    /// Overlay states are drawn on top of the state beneath them.
    fn is_overlay(&self) -> bool {
        false
    }
}

/// A deferred request to reshape the state stack.
pub enum Transition {
    /// Exit every state and replace the stack with this one.
    Change(Box<dyn State>),
    /// Pause the top state and run this one above it.
    Push(Box<dyn State>),
    /// Exit the top state and resume the one beneath.
    Pop,
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Change(s) => write!(f, "Change({})", s.name()),
            Transition::Push(s) => write!(f, "Push({})", s.name()),
            Transition::Pop => write!(f, "Pop"),
        }
    }
}
