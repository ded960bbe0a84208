use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vocab_config::Config;

const REPO_DEFAULT_CONFIG: &str = "config.json";

/// Load the default config shipped in the repo
fn load_repo_default_config() -> anyhow::Result<Config> {
    tracing::info!("Loading repo default config...");
    let file = File::open(REPO_DEFAULT_CONFIG)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

fn default_config() -> Config {
    load_repo_default_config().unwrap_or_else(|e| {
        tracing::warn!("Repo default config unavailable ({e}), using built-in defaults");
        Config::default()
    })
}

/// `VOCAB_HOME`, or `.vocab` in the working directory
fn vocab_root() -> PathBuf {
    env::var_os("VOCAB_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".vocab"))
}

fn profiles_dir() -> PathBuf {
    vocab_root().join("profiles")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&data)?;
    Ok(profile.value)
}

/// Initialize user config folders and main profile if missing
pub fn init_user_config() -> anyhow::Result<()> {
    init_profiles(&profiles_dir(), default_config)
}

/// Load a user profile by name, defaulting to main if name not found
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    load_profile(&profiles_dir(), name, default_config)
}

fn init_profiles(dir: &Path, fallback: impl FnOnce() -> Config) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;

    let main_profile = dir.join("main.json");
    if !main_profile.exists() {
        let profile = Profile {
            name: "main".into(),
            value: fallback(),
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(())
}

fn load_profile(
    dir: &Path,
    name: &str,
    fallback: impl FnOnce() -> Config,
) -> anyhow::Result<Config> {
    let profile_file = dir.join(format!("{name}.json"));
    if profile_file.exists() {
        return read_profile(&profile_file);
    }

    tracing::warn!("Profile {name} not found, falling back to main profile or repo default");
    let main_file = dir.join("main.json");
    if main_file.exists() {
        read_profile(&main_file)
    } else {
        Ok(fallback())
    }
}
