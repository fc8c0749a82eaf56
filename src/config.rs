use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_DATA_DIR: &str = "/app/data";
const DEFAULT_SEND_INTERVAL_SEC: &str = "28800"; // 8 hours

/// Runtime configuration, read once at process start and passed into the
/// upload loop.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub chat_id: i64,
    pub data_dir: PathBuf,
    pub send_interval: Duration,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID` are not validated here;
    /// when unset, uploads are still attempted and rejected by the API at
    /// send time. `DATA_DIR` is likewise not checked for existence, so a
    /// missing directory shows up per cycle rather than at startup.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default();

        let chat_id = match env::var("TELEGRAM_CHAT_ID") {
            Ok(raw) => parse_chat_id(&raw)?,
            Err(_) => 0,
        };

        let data_dir = PathBuf::from(
            env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
        );

        let interval_raw =
            env::var("SEND_INTERVAL").unwrap_or_else(|_| DEFAULT_SEND_INTERVAL_SEC.to_string());
        let send_interval = parse_interval_secs(&interval_raw)?;

        Ok(Self {
            bot_token,
            chat_id,
            data_dir,
            send_interval,
        })
    }
}

fn parse_chat_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .with_context(|| format!("TELEGRAM_CHAT_ID is not a valid chat id: '{}'", raw))
}

fn parse_interval_secs(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("SEND_INTERVAL is not a valid number of seconds: '{}'", raw))?;

    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_id() {
        assert_eq!(parse_chat_id("123456").unwrap(), 123456);
        // group and channel ids are negative
        assert_eq!(parse_chat_id("-1001234567890").unwrap(), -1001234567890);
        assert_eq!(parse_chat_id(" 42 ").unwrap(), 42);

        assert!(parse_chat_id("@mychannel").is_err());
        assert!(parse_chat_id("").is_err());
        assert!(parse_chat_id("12.5").is_err());
    }

    #[test]
    fn test_parse_interval_secs() {
        assert_eq!(
            parse_interval_secs("28800").unwrap(),
            Duration::from_secs(28800)
        );
        assert_eq!(parse_interval_secs("0").unwrap(), Duration::from_secs(0));

        assert!(parse_interval_secs("-1").is_err());
        assert!(parse_interval_secs("8h").is_err());
        assert!(parse_interval_secs("").is_err());
    }
}
