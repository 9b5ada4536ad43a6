use glam::Vec2;
use ledge_engine::{Color, EngineContext, InputQueue, Rect, RenderBuffer, State};
use crate::button::PlayButton;
use crate::config::{paths, PlayerTuning};
use super::GameState;

const MUSIC: &str = "MainMenuMusic";
const PLAY_TEXTURE: &str = "play";
const BUTTON_SIZE: Vec2 = Vec2::new(400.0, 100.0);
const CLEAR: Color = Color::rgb(255, 0, 255);

pub struct TitleState {
    tuning: PlayerTuning,
    buttons: Vec<PlayButton>,
}

impl TitleState {
    pub fn new(tuning: PlayerTuning) -> Self {
        Self { tuning, buttons: Vec::new() }
    }
}

impl State for TitleState {
    fn name(&self) -> &'static str {
        "Title"
    }

    fn enter(&mut self, ctx: &mut EngineContext) {
        ctx.assets.load_music(paths::MENU_MUSIC, MUSIC);
        if let Err(e) = ctx.play_music(MUSIC) {
            log::warn!("{}", e);
        }

        let texture = ctx.assets.load_texture(paths::PLAY_BUTTON, PLAY_TEXTURE);
        let dst = Rect::centered(ctx.world_size() / 2.0, BUTTON_SIZE);
        let id = ctx.next_id();
        self.buttons.push(PlayButton::new(id, texture, dst));
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, _dt: f32) {
        for button in &mut self.buttons {
            if button.update(input) {
                ctx.change_state(Box::new(GameState::new(self.tuning.clone())));
            }
            if ctx.state_changing() {
                break;
            }
        }
    }

    fn render(&self, buffer: &mut RenderBuffer) {
        buffer.clear(CLEAR);
        for button in &self.buttons {
            button.render(buffer);
        }
    }

    fn exit(&mut self, ctx: &mut EngineContext) {
        ctx.stop_music();
        if let Err(e) = ctx.unload_music(MUSIC) {
            log::warn!("{}", e);
        }
        if let Err(e) = ctx.assets.unload_texture(PLAY_TEXTURE) {
            log::warn!("{}", e);
        }
        self.buttons.clear();
    }
}
