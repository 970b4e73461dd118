use serde::{Deserialize, Serialize};

/// Chains a token can be launched on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "snake_case")]
pub enum Chain {
    Ethereum,
    Base,
    Arbitrum,
    Bsc,
    Polygon,
    Solana,
    Tron,
    Hyperliquid,
    // Testnets
    Sepolia,
    SolanaDevnet,
}

const ALL_CHAINS: &[Chain] = &[
    Chain::Ethereum,
    Chain::Base,
    Chain::Arbitrum,
    Chain::Bsc,
    Chain::Polygon,
    Chain::Solana,
    Chain::Tron,
    Chain::Hyperliquid,
    Chain::Sepolia,
    Chain::SolanaDevnet,
];

impl Chain {
    /// Every supported chain, mainnets first
    pub fn all() -> &'static [Chain] {
        ALL_CHAINS
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Base => "Base",
            Chain::Arbitrum => "Arbitrum One",
            Chain::Bsc => "BNB Smart Chain",
            Chain::Polygon => "Polygon",
            Chain::Solana => "Solana",
            Chain::Tron => "Tron",
            Chain::Hyperliquid => "HyperLiquid",
            Chain::Sepolia => "Sepolia Testnet",
            Chain::SolanaDevnet => "Solana Devnet",
        }
    }

    /// Currency the platform fee is charged in
    pub fn currency(&self) -> Currency {
        match self {
            Chain::Ethereum | Chain::Base | Chain::Arbitrum | Chain::Sepolia => Currency::Eth,
            Chain::Bsc => Currency::Bnb,
            Chain::Polygon => Currency::Pol,
            Chain::Solana | Chain::SolanaDevnet => Currency::Sol,
            Chain::Tron => Currency::Trx,
            Chain::Hyperliquid => Currency::Hype,
        }
    }

    /// Token standard the launcher deploys
    pub fn token_standard(&self) -> TokenStandard {
        match self {
            Chain::Solana | Chain::SolanaDevnet => TokenStandard::Spl,
            Chain::Tron => TokenStandard::Trc20,
            Chain::Hyperliquid => TokenStandard::Hip1,
            _ => TokenStandard::Erc20,
        }
    }

    /// Decimals given to newly launched tokens
    pub fn token_decimals(&self) -> u8 {
        self.token_standard().default_decimals()
    }

    /// Whether this is a testnet
    pub fn is_testnet(&self) -> bool {
        matches!(self, Chain::Sepolia | Chain::SolanaDevnet)
    }

    /// Upper snake case key used in environment variable names
    pub fn env_key(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ETHEREUM",
            Chain::Base => "BASE",
            Chain::Arbitrum => "ARBITRUM",
            Chain::Bsc => "BSC",
            Chain::Polygon => "POLYGON",
            Chain::Solana => "SOLANA",
            Chain::Tron => "TRON",
            Chain::Hyperliquid => "HYPERLIQUID",
            Chain::Sepolia => "SEPOLIA",
            Chain::SolanaDevnet => "SOLANA_DEVNET",
        }
    }
}

/// Native currency of a launch chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eth,
    Bnb,
    Pol,
    Sol,
    Trx,
    Hype,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eth => "ETH",
            Currency::Bnb => "BNB",
            Currency::Pol => "POL",
            Currency::Sol => "SOL",
            Currency::Trx => "TRX",
            Currency::Hype => "HYPE",
        }
    }

    /// Decimals of the smallest unit (wei, lamports, sun, ...)
    pub fn decimals(&self) -> u8 {
        match self {
            Currency::Eth | Currency::Bnb | Currency::Pol => 18,
            Currency::Sol => 9,
            Currency::Trx => 6,
            Currency::Hype => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
pub enum TokenStandard {
    Erc20,
    Spl,
    Trc20,
    Hip1,
}

impl TokenStandard {
    pub fn default_decimals(&self) -> u8 {
        match self {
            TokenStandard::Erc20 => 18,
            TokenStandard::Spl => 9,
            TokenStandard::Trc20 => 6,
            TokenStandard::Hip1 => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_chains_listed_once() {
        let chains = Chain::all();
        assert_eq!(chains.len(), 10);
        let mut sorted = chains.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), chains.len());
    }

    #[test]
    fn testnets() {
        let testnets: Vec<_> = Chain::all().iter().filter(|c| c.is_testnet()).collect();
        assert_eq!(testnets, vec![&Chain::Sepolia, &Chain::SolanaDevnet]);
    }

    #[test]
    fn evm_chains_deploy_erc20() {
        for chain in [Chain::Ethereum, Chain::Base, Chain::Arbitrum, Chain::Bsc, Chain::Polygon, Chain::Sepolia] {
            assert_eq!(chain.token_standard(), TokenStandard::Erc20, "{}", chain.display_name());
            assert_eq!(chain.token_decimals(), 18);
            assert_eq!(chain.currency().decimals(), 18);
        }
    }

    #[test]
    fn non_evm_chains() {
        assert_eq!(Chain::Solana.token_standard(), TokenStandard::Spl);
        assert_eq!(Chain::Solana.currency().symbol(), "SOL");
        assert_eq!(Chain::Solana.currency().decimals(), 9);
        assert_eq!(Chain::Tron.token_standard(), TokenStandard::Trc20);
        assert_eq!(Chain::Tron.currency().decimals(), 6);
        assert_eq!(Chain::Hyperliquid.token_standard(), TokenStandard::Hip1);
        assert_eq!(Chain::Hyperliquid.currency().symbol(), "HYPE");
    }

    #[test]
    fn env_keys_are_upper_snake() {
        for chain in Chain::all() {
            let key = chain.env_key();
            assert!(key.chars().all(|c| c.is_ascii_uppercase() || c == '_'), "{key}");
        }
        assert_eq!(Chain::SolanaDevnet.env_key(), "SOLANA_DEVNET");
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&Chain::SolanaDevnet).unwrap(), "\"solana_devnet\"");
        assert_eq!(serde_json::to_string(&Currency::Hype).unwrap(), "\"HYPE\"");
        let chain: Chain = serde_json::from_str("\"bsc\"").unwrap();
        assert_eq!(chain, Chain::Bsc);
    }
}
