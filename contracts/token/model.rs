use ink::prelude::string::String;
use ink::primitives::AccountId;

use crate::config;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// The caller context may not move funds out of (or act for) the account.
    AuthorizationDenied,
    /// A debit would take the balance below zero.
    InsufficientBalance,
    /// A mint would push total supply past `MAX_SUPPLY`.
    SupplyOverflow,
}

/// Storage key of the allowance table.
///
/// Both halves are fixed-width, so the encoded key is exactly
/// `owner ‖ spender` and two different pairs never share a key.
#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct AllowanceKey {
    pub owner: AccountId,
    pub spender: AccountId,
}

impl AllowanceKey {
    pub fn new(owner: AccountId, spender: AccountId) -> Self {
        Self { owner, spender }
    }
}

/// Aggregate answer of `get_info`.
#[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub max_supply: u64,
}

impl TokenInfo {
    pub fn configured() -> Self {
        Self {
            name: String::from(config::NAME),
            symbol: String::from(config::SYMBOL),
            decimals: config::DECIMALS,
            max_supply: config::MAX_SUPPLY,
        }
    }
}

// dotted event names, used in diagnostics
pub const TRANSFER_EVENT: &str = "token.transfer";
pub const MINT_EVENT: &str = "token.mint";
pub const APPROVE_EVENT: &str = "token.approve";
pub const BURN_EVENT: &str = "token.burn";

#[cfg(test)]
mod tests {
    use super::*;
    use scale::Encode;

    #[test]
    fn allowance_key_is_fixed_width_concatenation() {
        let owner = AccountId::from([0x11; 32]);
        let spender = AccountId::from([0x22; 32]);
        let encoded = AllowanceKey::new(owner, spender).encode();

        assert_eq!(encoded.len(), 64);
        assert_eq!(&encoded[..32], &[0x11; 32]);
        assert_eq!(&encoded[32..], &[0x22; 32]);
    }

    #[test]
    fn swapped_pair_is_a_different_key() {
        let a = AccountId::from([0x01; 32]);
        let b = AccountId::from([0x02; 32]);
        assert_ne!(AllowanceKey::new(a, b).encode(), AllowanceKey::new(b, a).encode());
    }

    #[test]
    fn configured_info_mirrors_config() {
        let info = TokenInfo::configured();
        assert_eq!(info.name, config::NAME);
        assert_eq!(info.symbol, config::SYMBOL);
        assert_eq!(info.decimals, config::DECIMALS);
        assert_eq!(info.max_supply, config::MAX_SUPPLY);
    }
}
