//! Network selection and chain constants.

/// Chain network the SDK talks to.
///
/// Selected once at client construction; there is no runtime switching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Local development node (LocalTerra).
    Local,
    /// Bombay public testnet.
    #[default]
    Testnet,
}

impl Network {
    pub fn chain_id(&self) -> &'static str {
        match self {
            Network::Local => "localterra",
            Network::Testnet => "bombay-10",
        }
    }

    /// Default LCD endpoint for this network.
    pub fn lcd_url(&self) -> &'static str {
        match self {
            Network::Local => "http://localhost:1317",
            Network::Testnet => "https://bombay-lcd.terra.dev",
        }
    }

    /// Block-explorer page for a transaction hash.
    pub fn finder_tx_url(&self, txhash: &str) -> String {
        format!("https://finder.terra.money/{}/tx/{}", self.chain_id(), txhash)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chain_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_testnet() {
        assert_eq!(Network::default(), Network::Testnet);
    }

    #[test]
    fn test_finder_tx_url() {
        assert_eq!(
            Network::Testnet.finder_tx_url("ABC123"),
            "https://finder.terra.money/bombay-10/tx/ABC123"
        );
        assert_eq!(
            Network::Local.finder_tx_url("ABC123"),
            "https://finder.terra.money/localterra/tx/ABC123"
        );
    }
}
