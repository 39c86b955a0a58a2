#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub use self::forwarder::{Forwarder, ForwarderRef};

/// Relays `transfer` to a token contract, so the token sees this contract
/// as its immediate caller. Used by the token's end-to-end tests.
#[ink::contract]
mod forwarder {
    use ink::env::call::{build_call, ExecutionInput, Selector};
    use ink::env::DefaultEnvironment;

    #[ink(storage)]
    pub struct Forwarder {}

    impl Forwarder {
        #[ink(constructor)]
        pub fn new() -> Self {
            Self {}
        }

        /// Calls `token.transfer(from, to, value)`.
        ///
        /// `None` if the call could not be dispatched. Otherwise the token's
        /// answer, with its error as the raw variant index. A rejected
        /// transfer is returned, not propagated, so this call still commits.
        #[ink(message)]
        pub fn relay_transfer(
            &mut self,
            token: AccountId,
            from: AccountId,
            to: AccountId,
            value: u64,
        ) -> Option<core::result::Result<bool, u8>> {
            let outcome = build_call::<DefaultEnvironment>()
                .call(token)
                .exec_input(
                    ExecutionInput::new(Selector::new(ink::selector_bytes!("transfer")))
                        .push_arg(from)
                        .push_arg(to)
                        .push_arg(value),
                )
                .returns::<core::result::Result<bool, u8>>()
                .try_invoke();

            match outcome {
                Ok(Ok(answer)) => Some(answer),
                _ => {
                    ink::env::debug_println!("relay to {:?} failed: {:?}", token, outcome);
                    None
                }
            }
        }
    }
}
