#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod authority;
pub mod config;
pub mod events;
pub mod model;

#[ink::contract]
mod token {
    use crate::authority::{self, AllowanceSpender, CallContext, SignerSet};
    use crate::config;
    use crate::events::{Approve, Mint, Transfer};
    use crate::model::{
        AllowanceKey, Error, Result, TokenInfo, APPROVE_EVENT, BURN_EVENT, MINT_EVENT,
        TRANSFER_EVENT,
    };
    use ink::prelude::string::String;
    use ink::storage::Mapping;

    #[ink(storage)]
    pub struct Token {
        // administrative identity of the token; the only account that mints
        admin: AccountId,
        total_supply: u64,
        balances: Mapping<AccountId, u64>,
        allowances: Mapping<AllowanceKey, u64>,
    }

    impl Token {
        /// The instantiating account becomes the token's administrative
        /// account.
        #[ink(constructor)]
        pub fn new() -> Self {
            Self {
                admin: Self::env().caller(),
                total_supply: 0,
                balances: Mapping::default(),
                allowances: Mapping::default(),
            }
        }

        // -------- read API --------

        #[ink(message)]
        pub fn name(&self) -> String {
            String::from(config::NAME)
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            String::from(config::SYMBOL)
        }

        #[ink(message)]
        pub fn decimals(&self) -> u32 {
            config::DECIMALS
        }

        #[ink(message)]
        pub fn max_supply(&self) -> u64 {
            config::MAX_SUPPLY
        }

        #[ink(message)]
        pub fn get_info(&self) -> TokenInfo {
            TokenInfo::configured()
        }

        #[ink(message)]
        pub fn admin(&self) -> AccountId {
            self.admin
        }

        #[ink(message)]
        pub fn total_supply(&self) -> u64 {
            self.total_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, owner: AccountId) -> u64 {
            self.balances.get(&owner).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner: AccountId, spender: AccountId) -> u64 {
            self.stored_allowance(owner, spender).unwrap_or(0)
        }

        // -------- write API --------

        #[ink(message)]
        pub fn transfer(&mut self, from: AccountId, to: AccountId, value: u64) -> Result<bool> {
            let ctx = self.call_context();
            self.transfer_in(&ctx, from, to, value)
        }

        /// Only the token's administrative account may mint.
        #[ink(message)]
        pub fn mint(&mut self, to: AccountId, value: u64) -> Result<bool> {
            let ctx = self.call_context();
            self.mint_in(&ctx, to, value)
        }

        /// Disabled: always succeeds without touching state or emitting.
        #[ink(message)]
        pub fn burn(&mut self, _from: AccountId, _value: u64) -> Result<bool> {
            ink::env::debug_println!("{}: disabled, ignoring", BURN_EVENT);
            Ok(true)
        }

        #[ink(message)]
        pub fn approve(&mut self, owner: AccountId, spender: AccountId, value: u64) -> Result<bool> {
            let ctx = self.call_context();
            self.approve_in(&ctx, owner, spender, value)
        }

        // -------- operations over an explicit caller context --------

        pub(crate) fn transfer_in(
            &mut self,
            ctx: &CallContext,
            from: AccountId,
            to: AccountId,
            value: u64,
        ) -> Result<bool> {
            self.authorize(ctx, from, true, value)?;
            // balance is checked only once authority is established
            self.debit(from, value)?;
            self.credit(to, value);

            ink::env::debug_println!("{}: {:?} -> {:?} ({})", TRANSFER_EVENT, from, to, value);
            self.env().emit_event(Transfer { from, to, value });
            Ok(true)
        }

        pub(crate) fn mint_in(&mut self, ctx: &CallContext, to: AccountId, value: u64) -> Result<bool> {
            self.authorize(ctx, self.admin, false, 0)?;

            let new_supply = match config::MAX_SUPPLY.checked_sub(value) {
                Some(headroom) if self.total_supply <= headroom => self.total_supply + value,
                _ => {
                    ink::env::debug_println!(
                        "{}: {} over supply {} exceeds cap",
                        MINT_EVENT,
                        value,
                        self.total_supply
                    );
                    return Err(Error::SupplyOverflow)
                }
            };

            self.credit(to, value);
            self.total_supply = new_supply;

            ink::env::debug_println!("{}: {:?} ({})", MINT_EVENT, to, value);
            self.env().emit_event(Mint { to, value });
            Ok(true)
        }

        pub(crate) fn approve_in(
            &mut self,
            ctx: &CallContext,
            owner: AccountId,
            spender: AccountId,
            value: u64,
        ) -> Result<bool> {
            self.authorize(ctx, owner, false, 0)?;
            self.allowances.insert(&AllowanceKey::new(owner, spender), &value);

            ink::env::debug_println!("{}: {:?} -> {:?} ({})", APPROVE_EVENT, owner, spender, value);
            self.env().emit_event(Approve { owner, spender, value });
            Ok(true)
        }

        // ---- internals ----

        fn call_context(&self) -> CallContext {
            let caller = self.env().caller();
            if self.env().caller_is_origin() {
                CallContext::Signed(SignerSet::origin(caller))
            } else {
                CallContext::Contract(caller)
            }
        }

        fn authorize(
            &mut self,
            ctx: &CallContext,
            account: AccountId,
            allow_allowance: bool,
            amount: u64,
        ) -> Result<()> {
            if authority::authorize(ctx, account, allow_allowance, amount, self) {
                return Ok(())
            }
            ink::env::debug_println!("authorization denied for {:?} under {:?}", account, ctx);
            Err(Error::AuthorizationDenied)
        }

        fn stored_allowance(&self, owner: AccountId, spender: AccountId) -> Option<u64> {
            self.allowances.get(&AllowanceKey::new(owner, spender))
        }

        fn credit(&mut self, account: AccountId, amount: u64) {
            // supply cap already bounds every balance
            let balance = self.balance_of(account).saturating_add(amount);
            self.balances.insert(&account, &balance);
        }

        fn debit(&mut self, account: AccountId, amount: u64) -> Result<()> {
            let balance = self.balance_of(account);
            let Some(remaining) = balance.checked_sub(amount) else {
                ink::env::debug_println!(
                    "debit of {} from {:?} exceeds balance {}",
                    amount,
                    account,
                    balance
                );
                return Err(Error::InsufficientBalance)
            };
            self.balances.insert(&account, &remaining);
            Ok(())
        }
    }

    impl AllowanceSpender for Token {
        fn spend_allowance(&mut self, owner: AccountId, spender: AccountId, amount: u64) -> bool {
            match self.stored_allowance(owner, spender) {
                Some(stored) if stored >= amount => {
                    self.allowances
                        .insert(&AllowanceKey::new(owner, spender), &(stored - amount));
                    true
                }
                _ => false,
            }
        }
    }


}
