use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON ledger document.
    pub ledger: String,
    /// Path of the append-only operations log.
    pub audit_log: String,
    #[serde(default = "default_window")]
    pub default_window: String,
    #[serde(default = "default_ranking_limit")]
    pub ranking_limit: usize,
}

fn default_window() -> String {
    "week".to_string()
}
fn default_ranking_limit() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: Self::ledger_file().to_string_lossy().to_string(),
            audit_log: Self::audit_file().to_string_lossy().to_string(),
            default_window: default_window(),
            ranking_limit: default_ranking_limit(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
            appdata.join("shiftledger")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".shiftledger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftledger.conf")
    }

    /// Return the full path of the JSON ledger.
    /// The historical file name `registro.json` is kept so documents
    /// written by earlier deployments keep loading unchanged.
    pub fn ledger_file() -> PathBuf {
        Self::config_dir().join("registro.json")
    }

    /// Return the full path of the audit log
    pub fn audit_file() -> PathBuf {
        Self::config_dir().join("shiftledger.log")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                    eprintln!("⚠️  Ignoring malformed configuration file: {e}");
                    Config::default()
                }),
                Err(e) => {
                    eprintln!("⚠️  Failed to read configuration file: {e}");
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and ledger files
    pub fn init_all(custom_ledger: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Ledger path: user provided or default
        let ledger_path = if let Some(name) = custom_ledger {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::ledger_file()
        };

        let config = Config {
            ledger: ledger_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("cannot serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create an empty ledger document if not exists
        if !ledger_path.exists() {
            if let Some(parent) = ledger_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&ledger_path, "{}\n")?;
        }

        println!("✅ Ledger:      {:?}", ledger_path);

        Ok(())
    }
}
