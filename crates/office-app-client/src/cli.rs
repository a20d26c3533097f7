use std::path::PathBuf;

use clap::Parser;
use officehub_shared::const_config::client::CLIENT_DEFAULT_SERVER_ADDRESS;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "stdout",
        action,
        help = "Controls if it logs to stdout/stderr instead of to a file"
    )]
    pub is_to_std_out: bool,

    #[arg(
        long = "server",
        default_value = CLIENT_DEFAULT_SERVER_ADDRESS,
        help = "Base address of the OfficeHub API"
    )]
    pub server_address: String,

    #[arg(
        long = "storage",
        help = "File the session is kept in between runs [default: session.json next to the traces]"
    )]
    pub storage_path: Option<PathBuf>,
}

impl Cli {
    pub fn storage_path(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("session.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        // Act
        let actual = Cli::parse_from(["office-app-client"]);

        // Assert
        assert!(!actual.is_to_std_out);
        assert_eq!(actual.server_address, CLIENT_DEFAULT_SERVER_ADDRESS);
        assert_eq!(actual.storage_path(), PathBuf::from("session.json"));
    }

    #[test]
    fn overrides() {
        // Act
        let actual = Cli::parse_from([
            "office-app-client",
            "--stdout",
            "--server",
            "https://api.example.com",
            "--storage",
            "/tmp/office.json",
        ]);

        // Assert
        assert!(actual.is_to_std_out);
        assert_eq!(actual.server_address, "https://api.example.com");
        assert_eq!(actual.storage_path(), PathBuf::from("/tmp/office.json"));
    }
}
