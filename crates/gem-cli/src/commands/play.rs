use std::io;

use gem_story::{StoryConfig, StorySession};

pub fn run(seed: Option<u64>, width: usize) -> Result<(), String> {
    let mut config = StoryConfig::default().with_width(width);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = StorySession::new(stdin.lock(), stdout.lock(), &config);

    let hero = session.run().map_err(|e| e.to_string())?;
    tracing::info!(
        name = %hero.name,
        glory = hero.glory,
        scars = hero.scars,
        "story finished"
    );
    Ok(())
}
