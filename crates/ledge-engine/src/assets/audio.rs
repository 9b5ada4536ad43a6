use serde::Serialize;

/// Music playback request forwarded to the host's sound manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "key", rename_all = "snake_case")]
pub enum AudioCommand {
    Play(String),
    Pause,
    Resume,
    Stop,
}

/// Tracks what the host is playing and queues the commands that got it there.
/// One music track plays at a time.
#[derive(Debug, Default)]
pub struct AudioQueue {
    commands: Vec<AudioCommand>,
    current: Option<String>,
    paused: bool,
}

impl AudioQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `key` from the beginning, replacing whatever was playing.
    pub fn play(&mut self, key: &str) {
        self.current = Some(key.to_string());
        self.paused = false;
        self.commands.push(AudioCommand::Play(key.to_string()));
    }

    pub fn pause(&mut self) {
        if self.current.is_some() && !self.paused {
            self.paused = true;
            self.commands.push(AudioCommand::Pause);
        }
    }

    pub fn resume(&mut self) {
        if self.current.is_some() && self.paused {
            self.paused = false;
            self.commands.push(AudioCommand::Resume);
        }
    }

    pub fn stop(&mut self) {
        if self.current.take().is_some() {
            self.paused = false;
            self.commands.push(AudioCommand::Stop);
        }
    }

    /// Key of the track currently playing (or paused).
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Commands queued since the last call.
    pub fn take_commands(&mut self) -> Vec<AudioCommand> {
        std::mem::take(&mut self.commands)
    }
}
