use ledge_engine::{keys, Color, EngineContext, InputQueue, Rect, RenderBuffer, State};

const SHADE: Color = Color::rgba(128, 128, 128, 128);
const PANEL: Rect = Rect::new(256.0, 128.0, 512.0, 512.0);

/// Translucent panel drawn over the paused game. `R` resumes.
#[derive(Default)]
pub struct PauseState;

impl PauseState {
    pub fn new() -> Self {
        Self
    }
}

impl State for PauseState {
    fn name(&self) -> &'static str {
        "Pause"
    }

    fn enter(&mut self, _ctx: &mut EngineContext) {}

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, _dt: f32) {
        if input.key_pressed(keys::R) {
            ctx.pop_state();
        }
    }

    fn render(&self, buffer: &mut RenderBuffer) {
        buffer.fill_rect(PANEL, SHADE);
    }

    fn exit(&mut self, _ctx: &mut EngineContext) {}

    fn is_overlay(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledge_engine::{AudioCommand, InputEvent, StateManager};
    use crate::config::PlayerTuning;
    use crate::states::GameState;

    const DT: f32 = 1.0 / 60.0;

    fn paused_game() -> (StateManager, EngineContext) {
        let mut ctx = EngineContext::default();
        let mut states = StateManager::new();
        states.start(Box::new(GameState::new(PlayerTuning::default())), &mut ctx);
        ctx.push_state(Box::new(PauseState::new()));
        states.apply_pending(&mut ctx);
        ctx.audio.take_commands();
        (states, ctx)
    }

    #[test]
    fn renders_panel_over_the_game() {
        let (states, _) = paused_game();
        let mut buffer = RenderBuffer::new();
        states.render(&mut buffer);

        assert_eq!(buffer.clear_color, Color::rgb(0, 0, 255));
        let panel = buffer.instances.last().unwrap();
        assert_eq!((panel.x, panel.y, panel.w, panel.h), (256.0, 128.0, 512.0, 512.0));
        assert_eq!(panel.a, 128.0 / 255.0);
        assert!(buffer.instance_count() > 1);
    }

    #[test]
    fn r_resumes_game_and_music() {
        let (mut states, mut ctx) = paused_game();
        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown { key_code: keys::R });

        assert!(states.update(&mut ctx, &input, DT));
        assert_eq!(states.names(), vec!["Game"]);
        assert_eq!(ctx.audio.take_commands(), vec![AudioCommand::Resume]);
    }

    #[test]
    fn game_does_not_update_while_paused() {
        let (mut states, mut ctx) = paused_game();
        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown { key_code: keys::X });

        assert!(!states.update(&mut ctx, &input, DT));
        assert_eq!(states.names(), vec!["Game", "Pause"]);
    }
}
