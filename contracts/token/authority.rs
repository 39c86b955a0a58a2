//! Authority resolution for balance-moving and administrative calls.
//!
//! Host context (who called, who signed) is captured once per message as a
//! [`CallContext`] and handed in explicitly, so the decision procedure is a
//! plain function that can be driven without a running node.

use ink::env::hash::{Blake2x256, HashOutput};
use ink::prelude::vec::Vec;
use ink::primitives::AccountId;

/// 65-byte recoverable secp256k1 signature (`r ‖ s ‖ v`).
pub type Signature = [u8; 65];

/// 33-byte compressed secp256k1 public key.
pub type PublicKey = [u8; 33];

/// Who is acting on the current invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallContext {
    /// Invoked by another contract; holds the immediate caller's address.
    Contract(AccountId),
    /// Invoked directly by a transaction; holds its verified signers.
    Signed(SignerSet),
}

/// Addresses that signed the enclosing transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignerSet {
    signers: Vec<AccountId>,
}

impl SignerSet {
    /// The transaction origin, already verified by the runtime.
    pub fn origin(account: AccountId) -> Self {
        Self {
            signers: ink::prelude::vec![account],
        }
    }

    /// Rebuilds the signer set from a transaction's signature list.
    ///
    /// Each signature is checked against `tx_id` through public-key recovery.
    /// Signatures that do not recover contribute nobody.
    ///
    /// Host binding for runtimes that hand the raw signature list to the
    /// contract. The ink runtime verifies the extrinsic itself, so the
    /// token's messages use [`SignerSet::origin`] instead.
    pub fn recover<R>(tx_id: &[u8; 32], signatures: &[Signature], keys: &R) -> Self
    where
        R: KeyRecovery + ?Sized,
    {
        let signers = signatures
            .iter()
            .filter_map(|signature| keys.recover_public_key(signature, tx_id))
            .map(|public_key| keys.address_of(&public_key))
            .collect();
        Self { signers }
    }

    pub fn contains(&self, account: &AccountId) -> bool {
        self.signers.contains(account)
    }

    pub fn len(&self) -> usize {
        self.signers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signers.is_empty()
    }
}

/// Signature recovery supplied by the host, consumed by
/// [`SignerSet::recover`].
pub trait KeyRecovery {
    fn recover_public_key(&self, signature: &Signature, digest: &[u8; 32]) -> Option<PublicKey>;

    fn address_of(&self, public_key: &PublicKey) -> AccountId;
}

/// [`KeyRecovery`] backed by the contract environment, for building a
/// [`SignerSet`] from signatures carried in a call.
///
/// Addresses follow the Substrate ECDSA rule: `blake2x256(compressed key)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvKeyRecovery;

impl KeyRecovery for EnvKeyRecovery {
    fn recover_public_key(&self, signature: &Signature, digest: &[u8; 32]) -> Option<PublicKey> {
        let mut public_key = [0u8; 33];
        ink::env::ecdsa_recover(signature, digest, &mut public_key).ok()?;
        Some(public_key)
    }

    fn address_of(&self, public_key: &PublicKey) -> AccountId {
        let mut hash = <Blake2x256 as HashOutput>::Type::default();
        ink::env::hash_bytes::<Blake2x256>(public_key, &mut hash);
        AccountId::from(hash)
    }
}

/// Allowance consumption, the one side effect authorization may have.
pub trait AllowanceSpender {
    /// Decrements `(owner, spender)` by `amount` iff an allowance is stored
    /// and covers it. Returns whether it did.
    fn spend_allowance(&mut self, owner: AccountId, spender: AccountId, amount: u64) -> bool;
}

/// Decides whether `ctx` may move `amount` out of `account`.
///
/// Contract path: allowance first (when `allow_allowance`), then
/// self-identity. Signature membership is never consulted once a contract
/// sits between the signer and this call.
///
/// Signed path: `account` must be one of the signers. Allowances play no
/// part here.
pub fn authorize<S>(
    ctx: &CallContext,
    account: AccountId,
    allow_allowance: bool,
    amount: u64,
    allowances: &mut S,
) -> bool
where
    S: AllowanceSpender + ?Sized,
{
    match ctx {
        CallContext::Contract(caller) => {
            if allow_allowance && allowances.spend_allowance(account, *caller, amount) {
                return true
            }
            *caller == account
        }
        CallContext::Signed(signers) => signers.contains(&account),
    }
}
