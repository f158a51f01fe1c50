use crate::battle::Battle;
use crate::console::Console;
use crate::menu::{FightMenu, GameOver, GameOverChoice, MainChoice, MainMenu, SelectionMenu, TurnOutcome};
use crate::model::Pokedex;
use crate::pokemon::{AttackSelector, Pokemon};
use crate::sprite::{Sprite, SpriteSheet};
use crate::GameConfig;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};

const TITLE_SPRITE: &str = "Title";

pub struct Game {
    pokedex: Pokedex,
    sheet: SpriteSheet,
    distance: usize,
    rng: SmallRng,
}

impl Game {
    pub fn new(config: &GameConfig, pokedex: Pokedex) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Game {
            pokedex,
            sheet: SpriteSheet::new(&config.sprite_dir),
            distance: config.battle_distance,
            rng,
        }
    }

    fn roster(&self, sprites: &[Sprite], selector: AttackSelector) -> Vec<Pokemon> {
        self.pokedex
            .records()
            .iter()
            .zip(sprites)
            .map(|(record, sprite)| Pokemon::new(record.clone(), sprite.clone(), selector))
            .collect()
    }

    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> anyhow::Result<()> {
        loop {
            let title = self.sheet.load_or_empty(TITLE_SPRITE, 0);
            let mut main = MainMenu::new(&title);
            if main.show_and_select(console)? == MainChoice::Exit {
                break;
            }

            let sprites: Vec<Sprite> = self
                .pokedex
                .names()
                .map(|name| self.sheet.load_or_empty(name, 0))
                .collect();
            let mut player_select =
                SelectionMenu::new(self.roster(&sprites, AttackSelector::User), AttackSelector::User);
            let player = player_select.show_and_select(console)?;
            let mut enemy_select = SelectionMenu::new(
                self.roster(&sprites, AttackSelector::Random),
                AttackSelector::Random,
            );
            let enemy = enemy_select.show_and_select(console)?;
            tracing::info!(player = player.name(), enemy = enemy.name(), "battle started");

            let mut battle = Battle::new(player, enemy);
            let mut fight = FightMenu::new(self.distance);
            while !battle.is_over() {
                if fight.play_turn(&mut battle, console, &mut self.rng)? == TurnOutcome::ChangePokemon {
                    let current = battle.player().clone();
                    let next = player_select.swap(current, console)?;
                    battle.swap_player(next);
                }
            }

            let winner = battle.winner();
            tracing::info!(winner = winner.name(), hp = winner.hp(), "battle finished");
            let mut game_over = GameOver::new(winner);
            if game_over.show_and_select(console)? == GameOverChoice::Exit {
                break;
            }
        }
        writeln!(console.output(), "Thanks for playing")?;
        Ok(())
    }
}
