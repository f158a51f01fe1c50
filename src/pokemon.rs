use crate::error::BattleError;
use crate::model::{Move, PokemonRecord};
use crate::sprite::Sprite;
use rand::Rng;

/// Who picks this pokemon's attacks.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AttackSelector {
    /// Chosen from the fight menu. These pokemon face right, so their sprite is flipped.
    User,
    /// Uniformly random over the move list.
    Random,
}

/// Which stats to print under a sprite.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SpriteStats {
    pub hp: bool,
    pub moves: bool,
    pub spacing: Option<usize>,
}

impl Default for SpriteStats {
    fn default() -> Self {
        Self {
            hp: true,
            moves: false,
            spacing: None,
        }
    }
}

impl SpriteStats {
    /// The bare sprite, no stats.
    pub fn plain() -> Self {
        Self {
            hp: false,
            moves: false,
            spacing: None,
        }
    }

    pub fn roster(spacing: usize) -> Self {
        Self {
            hp: true,
            moves: true,
            spacing: Some(spacing),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Pokemon {
    name: String,
    hp: i32,
    moves: Vec<Move>,
    sprite: Sprite,
    selector: AttackSelector,
}

impl Pokemon {
    pub fn new(record: PokemonRecord, sprite: Sprite, selector: AttackSelector) -> Self {
        let sprite = match selector {
            AttackSelector::User => sprite.flip(),
            AttackSelector::Random => sprite,
        };
        Self {
            name: record.name,
            hp: record.hp,
            moves: record.moves,
            sprite,
            selector,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn move_names(&self) -> Vec<String> {
        self.moves.iter().map(|m| m.name.clone()).collect()
    }

    pub fn power_of(&self, move_name: &str) -> Option<i32> {
        self.moves
            .iter()
            .find(|m| m.name == move_name)
            .map(|m| m.power)
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn is_user_controlled(&self) -> bool {
        self.selector == AttackSelector::User
    }

    pub fn is_fainted(&self) -> bool {
        self.hp <= 0
    }

    pub fn get_sprite(&self, stats: SpriteStats) -> Sprite {
        if stats == SpriteStats::plain() {
            return self.sprite.clone();
        }
        let spacing = stats.spacing.unwrap_or(self.sprite.spacing());
        let mut lines = self.sprite.source().to_vec();
        if stats.hp {
            lines.push(format!("HP: {}", self.hp));
        }
        if stats.moves {
            lines.push(format!("Moves: {}", self.move_names().join(", ")));
        }
        Sprite::from_lines(lines, spacing)
    }

    /// Both pokemon side by side with their HP, `distance` cells apart.
    pub fn render_in_battle(&self, enemy: &Pokemon, distance: usize) -> Sprite {
        let own = self.get_sprite(SpriteStats::default());
        let theirs = enemy.get_sprite(SpriteStats::default());
        own.join(&theirs, distance)
    }

    /// Hit `target` with `move_name`. HP may drop below zero; see [`Pokemon::clamp_hp`].
    pub fn attack(&self, move_name: &str, target: &mut Pokemon) -> Result<i32, BattleError> {
        let power = self
            .power_of(move_name)
            .ok_or_else(|| BattleError::UnknownMove {
                pokemon: self.name.clone(),
                move_name: move_name.to_string(),
            })?;
        target.hp = target.hp.saturating_sub(power);
        Ok(power)
    }

    pub fn clamp_hp(&mut self) {
        if self.hp < 0 {
            self.hp = 0;
        }
    }

    pub fn random_move<R: Rng>(&self, rng: &mut R) -> Option<&Move> {
        if self.moves.is_empty() {
            return None;
        }
        Some(&self.moves[rng.gen_range(0..self.moves.len())])
    }
}
