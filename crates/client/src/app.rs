//! Menu loop.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use game_core::{ErrorSeverity, House, Npc, Player, SortingHat, TurnChoice, TurnReport};
use runtime::{FilePlayerRepository, PlayerRepository, RuntimeError, Session, SessionBuilder};

use crate::config::ClientConfig;
use crate::console::Console;
use crate::render;

pub struct App<R, W> {
    console: Console<R, W>,
    config: ClientConfig,
    repo: FilePlayerRepository,
    session: Option<Session>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(console: Console<R, W>, config: ClientConfig) -> Result<Self> {
        let repo = FilePlayerRepository::new(&config.save_dir)?;
        Ok(Self {
            console,
            config,
            repo,
            session: None,
        })
    }

    /// Runs until the player quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let keep_going = if self.session.is_some() {
                self.main_menu()?
            } else {
                self.start_menu()?
            };
            if !keep_going {
                break;
            }
        }

        self.console.println("Farewell!")?;
        tracing::info!("Client exiting");
        Ok(())
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn builder(&self) -> SessionBuilder {
        let mut builder = Session::builder();
        if let Some(dir) = &self.config.data_dir {
            builder = builder.content_dir(dir);
        }
        if let Some(seed) = self.config.seed {
            builder = builder.seed(seed);
        }
        builder
    }

    fn start_menu(&mut self) -> Result<bool> {
        let has_save = self.repo.exists(&self.config.save_slot);

        self.console.println("")?;
        self.console.println("=== Hogwarts RPG ===")?;
        self.console.println("1. Start New Game")?;
        if has_save {
            self.console.println("2. Load Game")?;
        }
        self.console.println("0. Quit")?;

        let options: &[&str] = if has_save { &["0", "1", "2"] } else { &["0", "1"] };
        match self.console.choose("Choose an option: ", options)? {
            Some("1") => self.new_game()?,
            Some("2") => self.load_game()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn new_game(&mut self) -> Result<()> {
        let (content, mut rng) = self.builder().prepare()?;

        self.console.println("")?;
        self.console
            .println("Welcome to Hogwarts School of Witchcraft and Wizardry!")?;
        let name = loop {
            match self.console.prompt("Enter your character's name: ")? {
                None => return Ok(()),
                Some(name) if name.is_empty() => continue,
                Some(name) => break name,
            }
        };

        self.console.println("")?;
        self.console.println("Now, let the sorting begin!")?;
        let mut hat = SortingHat::new();
        for question in content.quiz.questions() {
            self.console.println("")?;
            self.console.println(&question.prompt)?;
            for (number, option) in question.options.iter().enumerate() {
                self.console
                    .println(format!("{}. {}", number + 1, option.label))?;
            }
            let prompt = format!("Your choice (1-{}): ", question.options.len());
            let Some(choice) = self
                .console
                .choose_index(&prompt, question.options.len(), None)?
            else {
                return Ok(());
            };
            if let Some(house) = question.answer(choice) {
                hat.vote(house);
            }
        }
        let house: House = hat.decide(&mut rng);

        self.console.println("")?;
        self.console
            .println(format!("The Sorting Hat has decided... {house}!"))?;

        self.session = Some(Session::new_game(name, house, content, rng)?);
        Ok(())
    }

    fn load_game(&mut self) -> Result<()> {
        let slot = self.config.save_slot.clone();
        match self.builder().load(&self.repo, &slot) {
            Ok(session) => {
                self.console.println(format!(
                    "Welcome back, {} of {}!",
                    session.player().name(),
                    session.player().house()
                ))?;
                self.session = Some(session);
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    fn main_menu(&mut self) -> Result<bool> {
        let Some(session) = &self.session else {
            return Ok(true);
        };
        let player = session.player();

        self.console.println("")?;
        self.console.println("=== Hogwarts RPG ===")?;
        self.console.println(format!(
            "Playing as: {} of {}",
            player.name(),
            player.house()
        ))?;
        self.console.print_lines([
            "",
            "1. View Character Stats",
            "2. Attend Class",
            "3. Cast a Spell",
            "4. Explore Hogwarts",
            "5. Wizard's Duel",
            "6. Save Game",
            "0. Quit",
        ])?;

        let choice = self
            .console
            .choose("Choose an option: ", &["0", "1", "2", "3", "4", "5", "6"])?;
        match choice {
            Some("1") => self.show_stats()?,
            Some("2") => self.attend_class()?,
            Some("3") => self.cast_spell()?,
            Some("4") => self.explore()?,
            Some("5") => self.duel()?,
            Some("6") => self.save()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn show_stats(&mut self) -> Result<()> {
        if let Some(session) = &self.session {
            self.console
                .print_lines(render::stats(&session.player().stats()))?;
        }
        Ok(())
    }

    fn attend_class(&mut self) -> Result<()> {
        let Some(session) = &mut self.session else {
            return Ok(());
        };
        let outcome = session.attend_class();
        self.console.println("=== Attending Class ===")?;
        self.console.print_lines(render::class(&outcome))?;
        Ok(())
    }

    fn cast_spell(&mut self) -> Result<()> {
        let Some(session) = &mut self.session else {
            return Ok(());
        };

        self.console.println("=== Cast a Spell ===")?;
        let spells = session.player().combatant().known_spells();
        if spells.is_empty() {
            self.console.println("You don't know any spells yet!")?;
            return Ok(());
        }
        self.console.println("Known spells:")?;
        for (number, spell) in spells.iter().enumerate() {
            self.console.println(format!("{}. {}", number + 1, spell))?;
        }

        let count = spells.len();
        let Some(index) = self.console.choose_index(
            "Choose a spell to cast (or 'q' to cancel): ",
            count,
            Some("q"),
        )?
        else {
            return Ok(());
        };

        match session.practice_cast(index) {
            Ok(report) => self.console.print_lines(render::practice(&report))?,
            Err(e) => return self.report(e),
        }
        Ok(())
    }

    fn explore(&mut self) -> Result<()> {
        let Some(session) = &mut self.session else {
            return Ok(());
        };
        let outcome = session.explore()?;
        self.console.println("=== Exploring Hogwarts ===")?;
        self.console.print_lines(render::explore(&outcome))?;
        Ok(())
    }

    fn duel(&mut self) -> Result<()> {
        let Some(session) = &mut self.session else {
            return Ok(());
        };

        self.console.println("=== Wizard's Duel ===")?;
        self.console.println("Choose your opponent:")?;
        let roster = session.opponents();
        for (number, template) in roster.iter().enumerate() {
            self.console.println(format!(
                "{}. {} ({})",
                number + 1,
                template.name,
                template.difficulty
            ))?;
        }
        let Some(index) = self.console.choose_index(
            "Select opponent (or 'q' to cancel): ",
            roster.len(),
            Some("q"),
        )?
        else {
            return Ok(());
        };

        let mut input = ConsoleDuel {
            console: &mut self.console,
            opponent: String::new(),
            error: None,
        };
        let result = session.duel(index, &mut input);
        if let Some(e) = input.error {
            return Err(e.into());
        }

        match result {
            Ok(outcome) => {
                self.console.println(render::duel_summary(&outcome))?;
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    fn save(&mut self) -> Result<()> {
        let Some(session) = &self.session else {
            return Ok(());
        };
        let slot = &self.config.save_slot;
        match session.save(&self.repo, slot) {
            Ok(()) => {
                self.console
                    .println(format!("Game saved to slot '{slot}'."))?;
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    /// Shows recoverable errors and keeps going; anything else ends the game.
    fn report(&mut self, error: RuntimeError) -> Result<()> {
        let severity = error.severity();
        if severity == ErrorSeverity::Validation {
            tracing::warn!(severity = severity.as_str(), "{}", error);
            self.console.println(format!("Cannot do that: {error}"))?;
            return Ok(());
        }
        tracing::error!(severity = severity.as_str(), "{}", error);
        Err(error.into())
    }
}

/// Reads the player's spell choices during a duel and prints each round.
struct ConsoleDuel<'c, R, W> {
    console: &'c mut Console<R, W>,
    /// Name of the opponent, captured on the first choice.
    opponent: String,
    /// First I/O failure; the duel is forfeited when input breaks.
    error: Option<io::Error>,
}

impl<R: BufRead, W: Write> ConsoleDuel<'_, R, W> {
    fn try_choose(&mut self, player: &Player, opponent: &Npc) -> io::Result<TurnChoice> {
        if self.opponent.is_empty() {
            self.opponent = opponent.name().to_string();
            self.console.println("")?;
            self.console.println(format!(
                "Duel start! {} vs {}",
                player.name(),
                self.opponent
            ))?;
        }
        self.console.println("")?;
        self.console.print_lines(render::duel_status(
            player.combatant(),
            opponent.combatant(),
        ))?;
        self.console.println("Your turn! Known spells:")?;

        let spells = player.combatant().known_spells();
        for (number, spell) in spells.iter().enumerate() {
            self.console.println(format!("{}. {}", number + 1, spell))?;
        }

        let choice = self.console.choose_index(
            "Choose your spell (or 'q' to yield): ",
            spells.len(),
            Some("q"),
        )?;
        Ok(choice.map_or(TurnChoice::Forfeit, TurnChoice::Cast))
    }
}

impl<R: BufRead, W: Write> game_core::DuelInput for ConsoleDuel<'_, R, W> {
    fn choose(&mut self, player: &Player, opponent: &Npc) -> TurnChoice {
        if self.error.is_some() {
            return TurnChoice::Forfeit;
        }
        match self.try_choose(player, opponent) {
            Ok(choice) => choice,
            Err(e) => {
                self.error = Some(e);
                TurnChoice::Forfeit
            }
        }
    }

    fn observe(&mut self, report: &TurnReport) {
        if self.error.is_some() {
            return;
        }
        let lines = render::turn(report, &self.opponent);
        if let Err(e) = self.console.print_lines(lines) {
            self.error = Some(e);
        }
    }
}
