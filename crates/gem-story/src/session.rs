//! The fixed story pipeline.
//!
//! `StorySession` walks the player through the whole adventure in one pass:
//! introduction, four catalog selections, the scripted events, and the
//! epilogue. There is no branching; every run visits the same steps.

use std::io::{BufRead, Write};

use rand::rngs::StdRng;

use crate::catalog::{Category, ChoiceOption};
use crate::character::{Character, Selections};
use crate::config::StoryConfig;
use crate::epilogue::epilogue;
use crate::error::StoryResult;
use crate::event::{EVENTS, Event};
use crate::prompt::Prompter;
use crate::resolve::resolve;
use crate::text::{banner, wrap};

const TITLE: &str = "WELCOME TO GEM'S ISEKAI SIMULATOR";

const INTRO: &str = "An improbable accident cuts your life in the original world short. \
    In the void between realities you meet Gem, the god who oversees reincarnations. \
    He smiles and offers you a new chance to live in a fantastic realm.";

const GREETING: &str = "Greetings, lost traveler. I am Gem, the weaver of destinies. \
    Choose wisely where to be reborn, which powers to master and what legacy you \
    mean to build. Every decision will shape the story we are about to tell.";

const ADVENTURE_BEGINS: &str =
    "\nGem raises his silver scepter and the threads of fate begin to glow...";

const FAREWELL: &str =
    "\nThank you for sharing your journey with Gem. Until the next reincarnation!";

/// An interactive story session over a console.
pub struct StorySession<R, W> {
    prompter: Prompter<R, W>,
    rng: StdRng,
    width: usize,
}

impl<R: BufRead, W: Write> StorySession<R, W> {
    /// Create a session reading answers from `reader` and writing to `writer`.
    pub fn new(reader: R, writer: W, config: &StoryConfig) -> Self {
        let (seed, rng) = config.rng();
        tracing::info!(seed, width = config.width, "story session created");
        Self {
            prompter: Prompter::new(reader, writer),
            rng,
            width: config.width,
        }
    }

    /// Consume the session, returning its input and output.
    pub fn into_inner(self) -> (R, W) {
        self.prompter.into_inner()
    }

    /// Play the whole story and return the finished character.
    pub fn run(&mut self) -> StoryResult<Character> {
        self.introduce()?;
        let mut character = self.create_character()?;

        self.prompter.say(ADVENTURE_BEGINS)?;
        for event in EVENTS {
            self.play_event(&mut character, event)?;
        }

        self.prompter.say("")?;
        self.prompter.say(&epilogue(&character, self.width))?;
        self.prompter.say(FAREWELL)?;
        Ok(character)
    }

    fn introduce(&mut self) -> StoryResult<()> {
        self.prompter.say(&banner(TITLE, self.width))?;
        self.prompter.say(&wrap(INTRO, self.width))?;
        self.prompter.say("")?;
        self.prompter.say(&wrap(GREETING, self.width))
    }

    /// Ask for a name and the four catalog selections.
    pub fn create_character(&mut self) -> StoryResult<Character> {
        let name = self.prompter.ask_name()?;
        let selections = Selections {
            world: self.choose(Category::World)?,
            origin: self.choose(Category::Origin)?,
            power: self.choose(Category::Power)?,
            legacy: self.choose(Category::Legacy)?,
        };
        Ok(Character::new(name, selections))
    }

    /// Present a category's options and return the player's pick.
    pub fn choose(&mut self, category: Category) -> StoryResult<&'static ChoiceOption> {
        let options = category.options();
        self.prompter.say(&format!("\n--- {} ---", category.prompt()))?;
        for (i, option) in options.iter().enumerate() {
            self.prompter.say(&format!("  {}. {}", i + 1, option.present()))?;
        }
        let index = self.prompter.ask_index(options.len())?;
        Ok(&options[index])
    }

    /// Present one event, read the choice, and narrate its outcome.
    pub fn play_event(&mut self, character: &mut Character, event: &Event) -> StoryResult<()> {
        self.prompter.say(&event.present(self.width))?;
        let index = self.prompter.ask_index(event.options.len())?;
        let resolution = resolve(character, &event.options[index], &mut self.rng);
        self.prompter.say(&resolution.narrative(self.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;
    use crate::epilogue::Tier;
    use crate::error::StoryError;
    use std::io::Cursor;

    type TestSession = StorySession<Cursor<Vec<u8>>, Vec<u8>>;

    fn session(input: &str, seed: u64) -> TestSession {
        let config = StoryConfig::default().with_seed(seed);
        StorySession::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), &config)
    }

    fn transcript(s: TestSession) -> String {
        String::from_utf8(s.into_inner().1).unwrap()
    }

    #[test]
    fn all_glory_run_ends_as_legend() {
        // Name, four picks, then the glory option of each event.
        let mut s = session("Akira\n1\n2\n3\n1\n1\n2\n1\n", 42);
        let hero = s.run().unwrap();

        assert_eq!(hero.glory, 3);
        assert_eq!(hero.scars, 0);
        assert_eq!(hero.selections.world.name, "Kingdom of Aerilon");
        assert_eq!(hero.selections.power.name, "Heart Lyre");

        let out = transcript(s);
        assert!(out.contains("WELCOME TO GEM'S ISEKAI SIMULATOR"));
        assert!(out.contains("=== Festival of Rebirth ==="));
        assert!(out.contains("=== Twilight Trial ==="));
        assert!(out.contains("You choose to attack the titan head-on with courage."));
        assert_eq!(Tier::from_difference(hero.difference()), Tier::Legend);
        assert!(out.contains(&epilogue(&hero, 88)));
        assert!(out.trim_end().ends_with("Until the next reincarnation!"));
    }

    #[test]
    fn all_mystic_run_raises_mana_three_times() {
        let mut s = session("Rin\n1\n1\n1\n1\n2\n1\n3\n", 9);
        let hero = s.run().unwrap();

        // Aerilon, Artificer's Child, Star Forge, Celestial Guardian: mana 5
        assert_eq!(hero.attribute(Attribute::Mana), 8);
        assert_eq!(hero.glory, 0);
        assert_eq!(hero.scars, 0);
        assert_eq!(Tier::from_difference(hero.difference()), Tier::Balance);
        assert!(transcript(s).contains(&epilogue(&hero, 88)));
    }

    #[test]
    fn invalid_answers_do_not_advance() {
        let mut s = session("\nKai\nfoo\n7\n2\n1\n1\n1\n3\n3\n2\n", 1);
        let hero = s.run().unwrap();

        assert_eq!(hero.name, "Kai");
        assert_eq!(hero.selections.world.name, "Ferromar Empire");
        assert_eq!(hero.scars, 3);

        let out = transcript(s);
        assert!(out.contains("A hero needs a name"));
        assert!(out.contains("Enter the number of the option you want."));
        assert!(out.contains("Invalid option, try again."));
        assert_eq!(Tier::from_difference(hero.difference()), Tier::Resilience);
        assert!(out.contains(&epilogue(&hero, 88)));
    }

    #[test]
    fn same_seed_same_transcript() {
        let input = "Mio\n3\n3\n3\n3\n1\n2\n1\n";
        let mut a = session(input, 2024);
        let mut b = session(input, 2024);
        a.run().unwrap();
        b.run().unwrap();
        assert_eq!(transcript(a), transcript(b));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut s = session("Sora\n1\n", 0);
        assert!(matches!(s.run(), Err(StoryError::InputClosed)));
    }

    #[test]
    fn choose_lists_options_with_deltas() {
        let mut s = session("2\n", 0);
        let option = s.choose(Category::Origin).unwrap();
        assert_eq!(option.name, "Guild Heir");

        let out = transcript(s);
        assert!(out.contains("--- What will your new origin be? ---"));
        assert!(out.contains("  2. Guild Heir - "));
        assert!(out.contains("(charisma: +2)"));
    }
}
