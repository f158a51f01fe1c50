use pokemon_ansi_battle::ansi::visible_width;
use pokemon_ansi_battle::error::SpriteError;
use pokemon_ansi_battle::sprite::{Sprite, SpriteSheet};
use std::fs;

const ORANGE: &str = "\x1b[38;2;240;128;48m";
const RESET: &str = "\x1b[0m";

fn colored(glyph: &str) -> String {
    format!("{ORANGE}{glyph}{RESET}")
}

#[test]
fn rendering_is_repeatable() {
    let lines = vec![colored("▀") + " " + &colored("▄"), "▀▀".to_string()];
    let first = Sprite::from_lines(lines.clone(), 2);
    let second = Sprite::from_lines(lines, 2);
    assert_eq!(first.text(), second.text());
    assert_eq!(Sprite::from_lines(first.source().to_vec(), 2), first);
}

#[test]
fn every_line_has_the_sprite_width() {
    let lines = vec![
        colored("▀") + &colored("▄") + "  ",
        "▄".to_string(),
        String::new(),
        "HP: 12".to_string(),
    ];
    let sprite = Sprite::from_lines(lines, 3);
    assert_eq!(sprite.width(), 9);
    for line in sprite.lines() {
        assert_eq!(visible_width(line), sprite.width(), "{line:?}");
    }
}

#[test]
fn flipping_plain_art_twice_restores_it() {
    let sprite = Sprite::from_lines(["▀▀ ▄", " ▄", "▄▄▄▄▄"], 1);
    let flipped = sprite.flip();
    assert_ne!(flipped.lines(), sprite.lines());
    assert_eq!(flipped.flip().lines(), sprite.lines());
}

#[test]
fn flipping_colored_art_moves_colors_with_glyphs() {
    let blue = "\x1b[38;2;96;168;232m";
    let line = format!("{ORANGE}▀{RESET}{blue}▄{RESET}  ");
    let sprite = Sprite::from_lines([line], 0);
    let flipped = sprite.flip();
    assert_eq!(flipped.width(), 4);
    assert_eq!(
        flipped.lines()[0],
        format!("  {blue}▄\x1b[m{ORANGE}▀\x1b[m")
    );
    assert_eq!(sprite.lines()[0], format!("{ORANGE}▀{RESET}{blue}▄{RESET}  "));
}

#[test]
fn join_pads_the_shorter_sprite_on_top() {
    let tall = Sprite::from_lines(["aa", "bb", "cc"], 0);
    let short = Sprite::from_lines(["x", "y"], 1);
    let joined = tall.join(&short, 3);

    assert_eq!(joined.lines().len(), 3);
    assert_eq!(joined.lines(), ["aa     ", "bb    x", "cc    y"]);
    assert_eq!(joined.spacing(), 0);
    for line in joined.lines() {
        assert_eq!(visible_width(line), tall.width() + 3 + short.width());
    }

    assert_eq!(short.lines(), [" x", " y"]);
    assert_eq!(tall.lines().len(), 3);
}

#[test]
fn join_works_in_both_directions() {
    let tall = Sprite::from_lines(["aa", "bb", "cc"], 0);
    let short = Sprite::from_lines(["x"], 0);
    let joined = short.join(&tall, 1);
    assert_eq!(joined.lines(), ["  aa", "  bb", "x cc"]);
}

#[test]
fn joined_colored_sprites_keep_uniform_width() {
    let left = Sprite::from_lines([colored("▀▀"), colored("▄")], 0);
    let right = Sprite::from_lines([colored("▄"), "▀".to_string(), colored("▀▀▀")], 2);
    let joined = left.join(&right, 10);
    assert_eq!(joined.lines().len(), 3);
    let expected = left.width() + 10 + right.width();
    assert_eq!(joined.width(), expected);
    assert!(joined.lines().iter().all(|l| visible_width(l) == expected));
}

#[test]
fn sheet_loads_lowercased_names() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("charmander"), format!("{}\n ▄", colored("▀▀"))).unwrap();
    let sheet = SpriteSheet::new(dir.path());

    let sprite = sheet.load("Charmander", 0).expect("sprite exists");
    assert_eq!(sprite.lines().len(), 2);
    assert_eq!(sprite.width(), 2);
    assert_eq!(sprite.lines()[1], " ▄");
}

#[test]
fn trailing_newline_becomes_blank_row() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("title"), "▀▀\n").unwrap();
    let sprite = SpriteSheet::new(dir.path()).load("Title", 0).unwrap();
    assert_eq!(sprite.lines(), ["▀▀", "  "]);
}

#[test]
fn missing_sprite_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = SpriteSheet::new(dir.path());
    match sheet.load("Mew", 0) {
        Err(SpriteError::NotFound { name }) => assert_eq!(name, "mew"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    let (err_text, empty) = (
        sheet.load("Mew", 0).unwrap_err().to_string(),
        sheet.load_or_empty("Mew", 2),
    );
    assert_eq!(err_text, "Sprite 'mew' not found");
    assert!(empty.is_empty());
    assert_eq!(empty.width(), 2);
    assert_eq!(empty.text(), "");
}

#[test]
fn empty_sprite_joins_as_blank_column() {
    let sprite = Sprite::from_lines(["ab"], 0);
    let joined = Sprite::empty(3).join(&sprite, 1);
    assert_eq!(joined.lines(), ["    ab"]);
}

#[test]
fn flip_mirrors_rows_that_leave_a_color_open() {
    let red = "\x1b[38;2;255;0;0m";
    let sprite = Sprite::from_lines([format!("{red}▀"), "▀▀▀".to_string()], 0);
    let flipped = sprite.flip();
    assert_eq!(flipped.lines()[0], format!("  {red}▀\x1b[m"));
    assert_eq!(flipped.lines()[1], "▀▀▀");
    assert!(flipped.lines().iter().all(|l| visible_width(l) == 3));
}

#[test]
fn flip_keeps_spacing_on_the_left() {
    let sprite = Sprite::from_lines(["▀▄", "▀"], 2);
    let flipped = sprite.flip();
    assert_eq!(flipped.spacing(), 2);
    assert_eq!(flipped.lines(), ["  ▄▀", "   ▀"]);
}

#[test]
fn show_writes_text_and_a_newline() {
    let sprite = Sprite::from_lines(["ab", "c"], 1);
    let mut out = Vec::new();
    sprite.show_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), " ab\n c \n\n");
}
