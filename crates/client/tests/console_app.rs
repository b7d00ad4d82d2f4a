//! Scripted end-to-end runs of the console client.

use std::io::Cursor;
use std::path::Path;

use hogwarts_client::{App, ClientConfig, Console};

fn config(save_dir: &Path) -> ClientConfig {
    ClientConfig {
        save_dir: save_dir.to_path_buf(),
        log_dir: save_dir.join("logs"),
        seed: Some(1),
        ..ClientConfig::default()
    }
}

fn play(script: &str, config: ClientConfig) -> String {
    let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut app = App::new(console, config).unwrap();
    app.run().unwrap();
    String::from_utf8(app.into_console().into_output()).unwrap()
}

const NEW_GRYFFINDOR: &str = "1\nHarry\n1\n1\n1\n";

#[test]
fn new_game_sorts_and_saves() {
    let dir = tempfile::tempdir().unwrap();
    let script = format!("{NEW_GRYFFINDOR}1\n2\n6\n0\n");

    let out = play(&script, config(dir.path()));

    assert!(out.contains("The Sorting Hat has decided... Gryffindor!"));
    assert!(out.contains("House: Gryffindor"));
    assert!(out.contains("Known Spells: Lumos"));
    assert!(out.contains("You learned the spell:"));
    assert!(out.contains("Game saved to slot 'default'."));
    assert!(out.ends_with("Farewell!\n"));
    assert!(dir.path().join("save_default.json").exists());
}

#[test]
fn saved_game_can_be_loaded() {
    let dir = tempfile::tempdir().unwrap();
    play(&format!("{NEW_GRYFFINDOR}6\n0\n"), config(dir.path()));

    let out = play("2\n1\n0\n", config(dir.path()));

    assert!(out.contains("2. Load Game"));
    assert!(out.contains("Welcome back, Harry of Gryffindor!"));
    assert!(out.contains("Name: Harry"));
}

#[test]
fn lumos_only_duel_is_lost() {
    let dir = tempfile::tempdir().unwrap();
    let script = format!("{NEW_GRYFFINDOR}5\n1\n{}0\n", "1\n".repeat(60));

    let out = play(&script, config(dir.path()));

    assert!(out.contains("Duel start! Harry vs Training Dummy"));
    assert!(out.contains("You cast Lumos!"));
    assert!(out.contains("Defeat!"));
    assert!(out.contains("You catch your breath."));
}

#[test]
fn invalid_menu_input_reprompts() {
    let dir = tempfile::tempdir().unwrap();
    let out = play("9\nfoo\n0\n", config(dir.path()));

    assert_eq!(out.matches("Invalid input. Please choose from: 0, 1").count(), 2);
    assert!(!out.contains("Load Game"));
}

#[test]
fn cancelled_spell_cast_returns_to_menu() {
    let dir = tempfile::tempdir().unwrap();
    let out = play(&format!("{NEW_GRYFFINDOR}3\nq\n0\n"), config(dir.path()));

    assert!(out.contains("Choose a spell to cast (or 'q' to cancel): "));
    assert!(!out.contains("You cast Lumos!"));
    assert!(out.ends_with("Farewell!\n"));
}
