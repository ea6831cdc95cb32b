//! Install-root discovery and asset path resolution

use crate::config::AssetConfig;
use invaders_core::{InvadersError, Result};
use invaders_render::SpriteImage;
use invaders_runtime::SpriteSet;
use std::path::{Path, PathBuf};

/// Player sprite file name
pub const SHIP_ASSET: &str = "ship.png";
/// Enemy sprite file name
pub const ENEMY_ASSET: &str = "enemy.png";

/// Path segments between the install root and the executable
/// (`<root>/target/<profile>/<exe>`)
const EXE_DEPTH: usize = 3;

/// Strip the executable name and its two containing directories.
///
/// Returns `None` when the path is too shallow to have an install root.
pub fn install_root_from_exe(exe: &Path) -> Option<PathBuf> {
    exe.ancestors()
        .nth(EXE_DEPTH)
        .filter(|root| !root.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

/// Resolve the install root of the running executable
pub fn current_install_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = std::fs::canonicalize(&exe).unwrap_or(exe);

    install_root_from_exe(&exe).ok_or_else(|| {
        InvadersError::Config(format!(
            "cannot derive install root from executable path {}",
            exe.display()
        ))
    })
}

/// Absolute locations of assets under an injected install root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    dir: PathBuf,
}

impl AssetPaths {
    /// `<root>/assets`
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_dir(root, "assets")
    }

    /// `<root>/<dir>`, or `dir` itself when it is absolute
    pub fn with_dir(root: impl AsRef<Path>, dir: impl AsRef<Path>) -> Self {
        Self {
            dir: root.as_ref().join(dir),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.dir
    }

    /// Absolute path of a logical asset name
    pub fn asset(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

/// Decode both sprites. The first failure is returned with its path.
pub fn load_sprites(paths: &AssetPaths, names: &AssetConfig) -> Result<SpriteSet<SpriteImage>> {
    let ship = SpriteImage::open(paths.asset(&names.ship))?;
    log::info!("Loaded {} ({}x{})", ship.path.display(), ship.size().width, ship.size().height);

    let enemy = SpriteImage::open(paths.asset(&names.enemy))?;
    log::info!("Loaded {} ({}x{})", enemy.path.display(), enemy.size().width, enemy.size().height);

    Ok(SpriteSet { ship, enemy })
}
