/// Per-match settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Seeds every shuffle of the match. `None` draws a seed from the OS.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}
