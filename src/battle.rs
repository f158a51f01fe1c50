use crate::error::BattleError;
use crate::pokemon::Pokemon;
use crate::sprite::Sprite;
use rand::Rng;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BattleResult {
    PlayerWins,
    EnemyWins,
}

/// What happened in one attack, for the announcement dialog.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttackReport {
    pub attacker: String,
    pub move_name: String,
    pub damage: i32,
    pub target_hp: i32,
}

impl AttackReport {
    pub fn announcement(&self) -> [String; 2] {
        [
            format!("{} used {}", self.attacker, self.move_name),
            "It was effective.".to_string(),
        ]
    }
}

/// Two pokemon taking turns. The player moves first.
pub struct Battle {
    player: Pokemon,
    enemy: Pokemon,
    turn: Side,
}

impl Battle {
    pub fn new(player: Pokemon, enemy: Pokemon) -> Self {
        Battle {
            player,
            enemy,
            turn: Side::Player,
        }
    }

    pub fn player(&self) -> &Pokemon {
        &self.player
    }

    pub fn enemy(&self) -> &Pokemon {
        &self.enemy
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn player_attack(&mut self, move_name: &str) -> Result<AttackReport, BattleError> {
        if self.turn != Side::Player {
            return Err(BattleError::OutOfTurn);
        }
        let report = resolve_attack(&self.player, move_name, &mut self.enemy)?;
        self.turn = self.turn.opponent();
        Ok(report)
    }

    /// The enemy picks a random move. Returns `None` if it has nothing to use.
    pub fn enemy_turn<R: Rng>(&mut self, rng: &mut R) -> Option<AttackReport> {
        self.turn = self.turn.opponent();
        let move_name = self.enemy.random_move(rng)?.name.clone();
        resolve_attack(&self.enemy, &move_name, &mut self.player).ok()
    }

    /// Send in `next` for the player and hand back the pokemon it replaces.
    pub fn swap_player(&mut self, next: Pokemon) -> Pokemon {
        tracing::debug!(from = self.player.name(), to = next.name(), "player swapped pokemon");
        std::mem::replace(&mut self.player, next)
    }

    pub fn is_over(&self) -> bool {
        self.player.is_fainted() || self.enemy.is_fainted()
    }

    /// The pokemon with more HP left. A tie goes to the player.
    pub fn winner(&self) -> &Pokemon {
        if self.enemy.hp() > self.player.hp() {
            &self.enemy
        } else {
            &self.player
        }
    }

    pub fn result(&self) -> Option<BattleResult> {
        if !self.is_over() {
            return None;
        }
        if self.enemy.hp() > self.player.hp() {
            Some(BattleResult::EnemyWins)
        } else {
            Some(BattleResult::PlayerWins)
        }
    }

    pub fn scene(&self, distance: usize) -> Sprite {
        self.player.render_in_battle(&self.enemy, distance)
    }
}

fn resolve_attack(
    attacker: &Pokemon,
    move_name: &str,
    defender: &mut Pokemon,
) -> Result<AttackReport, BattleError> {
    let damage = attacker.attack(move_name, defender)?;
    defender.clamp_hp();
    tracing::info!(
        attacker = attacker.name(),
        defender = defender.name(),
        move_name,
        damage,
        remaining = defender.hp(),
        "attack resolved"
    );
    Ok(AttackReport {
        attacker: attacker.name().to_string(),
        move_name: move_name.to_string(),
        damage,
        target_hp: defender.hp(),
    })
}
