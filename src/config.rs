use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Render and animation parameters. Defaults reproduce the original
/// animation; a JSON file may override any subset of them.
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    /// Base triangle edge length the animation starts from.
    pub max_size: f64,
    /// Size change per frame; the sign flips once the size goes negative.
    pub size_step: f64,
    /// Per-endpoint jitter amplitude, as a fraction of the point's distance
    /// from the canvas origin.
    pub noise: f64,
    /// Subdivision rounds per frame.
    pub rounds: u32,
    pub framerate: u32,
    /// Draw the pre-subdivision triangle's vertices on top of each frame.
    pub overlay: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            max_size: 300.0,
            size_step: 3.0,
            noise: 0.03,
            rounds: 4,
            framerate: 100,
            overlay: false,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: &P) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(file)?;

        Ok(config)
    }
}
