use crate::battle::{AttackReport, Battle, Side};
use crate::console::Console;
use crate::dialog::{DialogBox, DialogStyle};
use crate::pokemon::{AttackSelector, Pokemon, SpriteStats};
use crate::sprite::Sprite;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, BufRead, Write};

pub const DEFAULT_PROMPT: &str = "Select an action: ";
pub const CHANGE_POKEMON: &str = "Change Pokemon";
const ROSTER_SPACING: usize = 4;
const FIGHT_COLUMN_GAP: usize = 5;

pub fn to_choice(index: usize, label: &str) -> String {
    format!("{index} - {label}")
}

pub fn to_choices<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| to_choice(i, label.as_ref()))
        .collect()
}

pub struct Menu {
    prompt: String,
    content: Vec<String>,
    dialog: DialogBox,
}

impl Menu {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            content: Vec::new(),
            dialog: DialogBox::new(DialogStyle::default().with_border(2)),
        }
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn dialog(&self) -> &DialogBox {
        &self.dialog
    }

    pub fn draw<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        draw_screen(&self.content, &mut self.dialog, out)
    }

    pub fn select<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        count: usize,
    ) -> Result<usize> {
        let Menu {
            prompt,
            content,
            dialog,
        } = self;
        console.choose(prompt, count, |out| draw_screen(content, dialog, out))
    }
}

fn draw_screen<W: Write>(content: &[String], dialog: &mut DialogBox, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", content.join("\n"))?;
    dialog.show_to(out)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MainChoice {
    Play,
    Exit,
}

pub struct MainMenu {
    menu: Menu,
}

impl MainMenu {
    const ACTIONS: [&'static str; 2] = ["Play", "Exit"];

    pub fn new(title: &Sprite) -> Self {
        let mut menu = Menu::new(DEFAULT_PROMPT);
        menu.dialog.update(to_choices(&Self::ACTIONS));
        menu.dialog.center(title.width());
        menu.content = vec![title.text().to_string()];
        Self { menu }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn show_and_select<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<MainChoice> {
        let choice = self.menu.select(console, Self::ACTIONS.len())?;
        Ok(if choice == 0 {
            MainChoice::Play
        } else {
            MainChoice::Exit
        })
    }
}

/// Pick a pokemon from the roster. The player's roster is also used for swaps mid-fight.
pub struct SelectionMenu {
    menu: Menu,
    roster: Vec<Pokemon>,
}

impl SelectionMenu {
    pub fn new(roster: Vec<Pokemon>, role: AttackSelector) -> Self {
        let prompt = match role {
            AttackSelector::User => "Select a Pokemon: ",
            AttackSelector::Random => "Select an enemy Pokemon: ",
        };
        let mut selection = Self {
            menu: Menu::new(prompt),
            roster,
        };
        selection.refresh();
        selection
    }

    fn refresh(&mut self) {
        self.menu.content = self
            .roster
            .iter()
            .enumerate()
            .map(|(i, pokemon)| {
                let sprite = pokemon.get_sprite(SpriteStats::roster(ROSTER_SPACING));
                format!("{}\n\n{}", to_choice(i, pokemon.name()), sprite.text())
            })
            .collect();
    }

    pub fn roster(&self) -> &[Pokemon] {
        &self.roster
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn show_and_select<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Pokemon> {
        anyhow::ensure!(!self.roster.is_empty(), "there are no pokemon to choose from");
        let choice = self.menu.select(console, self.roster.len())?;
        Ok(self.roster[choice].clone())
    }

    /// Store `current` (with its damage) back in the roster, then pick again.
    pub fn swap<R: BufRead, W: Write>(
        &mut self,
        current: Pokemon,
        console: &mut Console<R, W>,
    ) -> Result<Pokemon> {
        if let Some(slot) = self.roster.iter_mut().find(|p| p.name() == current.name()) {
            *slot = current;
        }
        self.refresh();
        self.show_and_select(console)
    }
}

/// Dialog rows for the fight menu: two numbered choices per row.
pub fn fight_dialog_rows<S: AsRef<str>>(actions: &[S]) -> Vec<String> {
    let choices = to_choices(actions);
    choices
        .chunks(2)
        .map(|pair| pair.join(" ".repeat(FIGHT_COLUMN_GAP).as_str()))
        .collect()
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TurnOutcome {
    Attacked,
    Skipped,
    ChangePokemon,
}

pub struct FightMenu {
    menu: Menu,
    width: usize,
    distance: usize,
}

impl FightMenu {
    pub fn new(distance: usize) -> Self {
        Self {
            menu: Menu::new(DEFAULT_PROMPT),
            width: 0,
            distance,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    fn show_scene(&mut self, battle: &Battle) {
        let scene = battle.scene(self.distance);
        self.width = scene.width();
        self.menu.content = vec![scene.text().to_string()];
    }

    fn announce<R: BufRead, W: Write>(
        &mut self,
        report: &AttackReport,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        self.menu.dialog.update(report.announcement());
        self.menu.dialog.center(self.width);
        self.menu.draw(console.output())?;
        console.prompt("Press enter to continue.")?;
        Ok(())
    }

    /// Play whichever side's turn it is.
    pub fn play_turn<R, W, G>(
        &mut self,
        battle: &mut Battle,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> Result<TurnOutcome>
    where
        R: BufRead,
        W: Write,
        G: Rng,
    {
        self.show_scene(battle);
        match battle.turn() {
            Side::Player => {
                let mut actions = battle.player().move_names();
                actions.push(CHANGE_POKEMON.to_string());
                self.menu.dialog.update(fight_dialog_rows(&actions));
                self.menu.dialog.center(self.width);

                let choice = self.menu.select(console, actions.len())?;
                if choice == actions.len() - 1 {
                    return Ok(TurnOutcome::ChangePokemon);
                }
                let report = battle
                    .player_attack(&actions[choice])
                    .context("player attack failed")?;
                self.show_scene(battle);
                self.announce(&report, console)?;
                Ok(TurnOutcome::Attacked)
            }
            Side::Enemy => match battle.enemy_turn(rng) {
                Some(report) => {
                    self.show_scene(battle);
                    self.announce(&report, console)?;
                    Ok(TurnOutcome::Attacked)
                }
                None => Ok(TurnOutcome::Skipped),
            },
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameOverChoice {
    PlayAgain,
    Exit,
}

pub struct GameOver {
    menu: Menu,
}

impl GameOver {
    const ACTIONS: [&'static str; 2] = ["Play again", "Exit"];

    pub fn new(winner: &Pokemon) -> Self {
        let mut menu = Menu::new(DEFAULT_PROMPT);
        let headline = if winner.is_user_controlled() {
            "You Win!"
        } else {
            "You Lose!"
        };
        let mut lines = vec![headline.to_string(), String::new()];
        lines.extend(to_choices(&Self::ACTIONS));
        menu.dialog.update(lines);
        menu.dialog.center(winner.sprite().width());
        menu.content = vec![winner.get_sprite(SpriteStats::plain()).text().to_string()];
        Self { menu }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn show_and_select<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<GameOverChoice> {
        let choice = self.menu.select(console, Self::ACTIONS.len())?;
        Ok(if choice == 0 {
            GameOverChoice::PlayAgain
        } else {
            GameOverChoice::Exit
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_are_numbered_from_zero() {
        assert_eq!(to_choices(&["Play", "Exit"]), ["0 - Play", "1 - Exit"]);
        assert_eq!(to_choice(3, "Tackle"), "3 - Tackle");
    }

    #[test]
    fn fight_rows_pair_choices() {
        let rows = fight_dialog_rows(&["Ember", "Scratch", "Change Pokemon"]);
        assert_eq!(rows, ["0 - Ember     1 - Scratch", "2 - Change Pokemon"]);
    }

    #[test]
    fn fight_rows_even_count() {
        let rows = fight_dialog_rows(&["Tackle", "Change Pokemon"]);
        assert_eq!(rows, ["0 - Tackle     1 - Change Pokemon"]);
    }
}
