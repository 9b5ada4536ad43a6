use std::collections::HashMap;
use serde::Serialize;
use thiserror::Error;
use crate::components::sprite::TextureId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("texture `{0}` is not loaded")]
    TextureNotLoaded(String),
    #[error("music `{0}` is not loaded")]
    MusicNotLoaded(String),
}

/// Load/unload notifications for the host, which owns the actual GPU
/// textures and audio buffers. Serialized as JSON for the side channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssetEvent {
    TextureLoaded { id: u32, key: String, path: String },
    TextureUnloaded { id: u32, key: String },
    MusicLoaded { key: String, path: String },
    MusicUnloaded { key: String },
}

#[derive(Debug)]
struct TextureEntry {
    id: TextureId,
    path: String,
    refs: u32,
}

#[derive(Debug)]
struct MusicEntry {
    path: String,
    refs: u32,
}

/// Named textures and music tracks, reference-counted per key.
///
/// Handed to states through the engine context rather than living in a
/// global. Loading a key that is already loaded only bumps its count, and the
/// host is told to free the resource when the count drops to zero, so a
/// paused state underneath keeps its assets while the state on top loads and
/// unloads the same keys.
pub struct AssetRegistry {
    textures: HashMap<String, TextureEntry>,
    music: HashMap<String, MusicEntry>,
    next_texture: u32,
    events: Vec<AssetEvent>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            music: HashMap::new(),
            next_texture: 1,
            events: Vec::new(),
        }
    }

    /// Load the texture at `path` under `key` (or take another reference to it).
    pub fn load_texture(&mut self, path: &str, key: &str) -> TextureId {
        if let Some(entry) = self.textures.get_mut(key) {
            if entry.path != path {
                log::warn!(
                    "texture `{}` already loaded from {}; ignoring {}",
                    key, entry.path, path
                );
            }
            entry.refs += 1;
            return entry.id;
        }

        let id = TextureId(self.next_texture);
        self.next_texture += 1;
        self.textures.insert(key.to_string(), TextureEntry {
            id,
            path: path.to_string(),
            refs: 1,
        });
        self.events.push(AssetEvent::TextureLoaded {
            id: id.0,
            key: key.to_string(),
            path: path.to_string(),
        });
        log::debug!("texture `{}` loaded from {} as {:?}", key, path, id);
        id
    }

    /// Drop one reference to `key`; the texture is released at zero.
    pub fn unload_texture(&mut self, key: &str) -> Result<(), AssetError> {
        let entry = self
            .textures
            .get_mut(key)
            .ok_or_else(|| AssetError::TextureNotLoaded(key.to_string()))?;
        entry.refs -= 1;
        if entry.refs == 0 {
            if let Some(entry) = self.textures.remove(key) {
                self.events.push(AssetEvent::TextureUnloaded {
                    id: entry.id.0,
                    key: key.to_string(),
                });
                log::debug!("texture `{}` released", key);
            }
        }
        Ok(())
    }

    pub fn texture(&self, key: &str) -> Option<TextureId> {
        self.textures.get(key).map(|e| e.id)
    }

    /// Current reference count for `key` (0 when not loaded).
    pub fn texture_refs(&self, key: &str) -> u32 {
        self.textures.get(key).map_or(0, |e| e.refs)
    }

    /// Load the music track at `path` under `key` (or take another reference).
    pub fn load_music(&mut self, path: &str, key: &str) {
        if let Some(entry) = self.music.get_mut(key) {
            if entry.path != path {
                log::warn!(
                    "music `{}` already loaded from {}; ignoring {}",
                    key, entry.path, path
                );
            }
            entry.refs += 1;
            return;
        }
        self.music.insert(key.to_string(), MusicEntry {
            path: path.to_string(),
            refs: 1,
        });
        self.events.push(AssetEvent::MusicLoaded {
            key: key.to_string(),
            path: path.to_string(),
        });
        log::debug!("music `{}` loaded from {}", key, path);
    }

    /// Drop one reference to the music track `key`; released at zero.
    pub fn unload_music(&mut self, key: &str) -> Result<(), AssetError> {
        let entry = self
            .music
            .get_mut(key)
            .ok_or_else(|| AssetError::MusicNotLoaded(key.to_string()))?;
        entry.refs -= 1;
        if entry.refs == 0 {
            self.music.remove(key);
            self.events.push(AssetEvent::MusicUnloaded { key: key.to_string() });
            log::debug!("music `{}` released", key);
        }
        Ok(())
    }

    pub fn has_music(&self, key: &str) -> bool {
        self.music.contains_key(key)
    }

    /// Take the load/unload events produced since the last call.
    pub fn take_events(&mut self) -> Vec<AssetEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
