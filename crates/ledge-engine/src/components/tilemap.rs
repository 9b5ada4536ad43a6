//! Tile-based level geometry built from plain-text tile and layout data.
//!
//! Tile definitions map a single-character key to a sprite-sheet cell and
//! collision flags. The layout is a grid of those keys, one text line per row.
//! Every cell becomes an [`Entity`] in a [`Scene`], stored in row-major order;
//! that order is the order obstacles are offered to the collision resolver.

use std::collections::HashMap;
use thiserror::Error;
use crate::api::types::EntityId;
use crate::components::entity::{Entity, EntityKind};
use crate::components::sprite::{SpriteComponent, TextureId};
use crate::core::rect::Rect;
use crate::core::scene::Scene;
use crate::renderer::instance::RenderBuffer;
use crate::systems::render::draw_entities;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("tile definition line {line}: expected `key col row obstacle hazard`, got `{text}`")]
    BadTileDef { line: usize, text: String },
    #[error("unknown tile key `{key}` at row {row}, column {col}")]
    UnknownTile { key: char, row: usize, col: usize },
    #[error("row {row} has {found} tiles, expected {expected}")]
    RowLength { row: usize, found: usize, expected: usize },
    #[error("level has {found} rows, expected {expected}")]
    RowCount { found: usize, expected: usize },
    #[error("tile definition line {line}: tile `{key}` cannot be both an obstacle and a hazard")]
    ObstacleHazard { line: usize, key: char },
}

/// One entry of the tile definition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileDef {
    pub key: char,
    /// Column of the tile's cell in the tile sheet.
    pub src_col: u32,
    /// Row of the tile's cell in the tile sheet.
    pub src_row: u32,
    pub obstacle: bool,
    pub hazard: bool,
}

impl TileDef {
    fn kind(&self) -> EntityKind {
        if self.hazard {
            EntityKind::Hazard
        } else if self.obstacle {
            EntityKind::Obstacle
        } else {
            EntityKind::Prop
        }
    }
}

/// Parse tile definitions: `key src_col src_row obstacle hazard` per line.
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_tile_defs(text: &str) -> Result<HashMap<char, TileDef>, LevelError> {
    let mut defs = HashMap::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let bad = || LevelError::BadTileDef { line: index + 1, text: line.to_string() };

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [key, col, row, obstacle, hazard] = fields.as_slice() else {
            return Err(bad());
        };
        let mut key_chars = key.chars();
        let (Some(key), None) = (key_chars.next(), key_chars.next()) else {
            return Err(bad());
        };
        let src_col = col.parse().map_err(|_| bad())?;
        let src_row = row.parse().map_err(|_| bad())?;
        let obstacle = parse_flag(obstacle).ok_or_else(bad)?;
        let hazard = parse_flag(hazard).ok_or_else(bad)?;
        // Hazards never take part in collision resolution.
        if obstacle && hazard {
            return Err(LevelError::ObstacleHazard { line: index + 1, key });
        }

        if defs.insert(key, TileDef { key, src_col, src_row, obstacle, hazard }).is_some() {
            log::warn!("tile `{}` defined twice; the later definition wins", key);
        }
    }
    Ok(defs)
}

fn parse_flag(text: &str) -> Option<bool> {
    match text {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

/// A grid of tiles and the obstacles it contributes.
#[derive(Debug, Clone)]
pub struct TiledLevel {
    pub rows: usize,
    pub cols: usize,
    pub tile_w: f32,
    pub tile_h: f32,
    tiles: Scene,
}

impl TiledLevel {
    /// A level with no tiles. Used when level data fails to load.
    pub fn empty(rows: usize, cols: usize, tile_w: f32, tile_h: f32) -> Self {
        Self { rows, cols, tile_w, tile_h, tiles: Scene::new() }
    }

    /// Build a level from tile definitions and a layout of `rows` lines with
    /// `cols` keys each. Trailing blank lines in the layout are ignored.
    pub fn parse(
        rows: usize,
        cols: usize,
        tile_w: f32,
        tile_h: f32,
        tile_data: &str,
        level_data: &str,
        texture: TextureId,
    ) -> Result<Self, LevelError> {
        let defs = parse_tile_defs(tile_data)?;
        let lines: Vec<&str> = level_data.trim_end().lines().map(str::trim_end).collect();
        if lines.len() != rows {
            return Err(LevelError::RowCount { found: lines.len(), expected: rows });
        }

        let mut tiles = Scene::with_capacity(rows * cols);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(LevelError::RowLength { row, found, expected: cols });
            }
            for (col, key) in line.chars().enumerate() {
                let def = defs
                    .get(&key)
                    .ok_or(LevelError::UnknownTile { key, row, col })?;
                let id = EntityId((row * cols + col) as u32 + 1);
                let tile = Entity::new(id)
                    .with_kind(def.kind())
                    .with_src(Rect::new(
                        def.src_col as f32 * tile_w,
                        def.src_row as f32 * tile_h,
                        tile_w,
                        tile_h,
                    ))
                    .with_dst(Rect::new(col as f32 * tile_w, row as f32 * tile_h, tile_w, tile_h))
                    .with_sprite(SpriteComponent::new(texture));
                tiles.spawn(tile);
            }
        }

        log::debug!(
            "level parsed: {}x{} tiles, {} obstacles",
            cols,
            rows,
            tiles.iter().filter(|t| t.is_obstacle()).count()
        );
        Ok(Self { rows, cols, tile_w, tile_h, tiles })
    }

    /// Destination bounds of every obstacle tile, in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = &Rect> {
        self.tiles.iter().filter(|t| t.is_obstacle()).map(|t| &t.dst)
    }

    /// Destination bounds of every hazard tile, in row-major order.
    pub fn hazards(&self) -> impl Iterator<Item = &Rect> {
        self.tiles.iter().filter(|t| t.is_hazard()).map(|t| &t.dst)
    }

    /// Tile at a grid position.
    pub fn tile(&self, row: usize, col: usize) -> Option<&Entity> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles.get(EntityId((row * self.cols + col) as u32 + 1))
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Size of the whole grid in world units.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.cols as f32 * self.tile_w, self.rows as f32 * self.tile_h)
    }

    pub fn render(&self, buffer: &mut RenderBuffer) {
        draw_entities(self.tiles.iter(), buffer);
    }

    /// Release every tile.
    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}
