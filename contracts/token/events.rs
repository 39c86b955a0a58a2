//! Token events.
//!
//! The encoded payload keeps the schema field order. Topics are the
//! signature followed by the impacted accounts in impacted order, which is
//! why `ink::env::Event` is implemented by hand instead of derived.

use ink::env::event::{state, TopicsBuilder, TopicsBuilderBackend};
use ink::env::Environment;
use ink::primitives::AccountId;

type Topics<E, B> = TopicsBuilder<state::Uninit, E, B>;
type TopicsOutput<E, B> = <B as TopicsBuilderBackend<E>>::Output;

/// `token.transfer`, impacted `[to, from]`.
#[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(ink::EventMetadata))]
pub struct Transfer {
    pub from: AccountId,
    pub to: AccountId,
    pub value: u64,
}

impl ink::env::Event for Transfer {
    type RemainingTopics = [state::HasRemainingTopics; 3];
    const SIGNATURE_TOPIC: Option<[u8; 32]> = Some(ink::blake2x256!("token.transfer"));

    fn topics<E, B>(&self, builder: Topics<E, B>) -> TopicsOutput<E, B>
    where
        E: Environment,
        B: TopicsBuilderBackend<E>,
    {
        builder
            .build::<Self>()
            .push_topic(Self::SIGNATURE_TOPIC.as_ref())
            .push_topic(Some(&self.to))
            .push_topic(Some(&self.from))
            .finish()
    }
}

/// `token.mint`, impacted `[to]`.
#[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(ink::EventMetadata))]
pub struct Mint {
    pub to: AccountId,
    pub value: u64,
}

impl ink::env::Event for Mint {
    type RemainingTopics = [state::HasRemainingTopics; 2];
    const SIGNATURE_TOPIC: Option<[u8; 32]> = Some(ink::blake2x256!("token.mint"));

    fn topics<E, B>(&self, builder: Topics<E, B>) -> TopicsOutput<E, B>
    where
        E: Environment,
        B: TopicsBuilderBackend<E>,
    {
        builder
            .build::<Self>()
            .push_topic(Self::SIGNATURE_TOPIC.as_ref())
            .push_topic(Some(&self.to))
            .finish()
    }
}

/// `token.burn`, impacted `[from]`. Never emitted while `burn` is disabled.
#[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(ink::EventMetadata))]
pub struct Burn {
    pub from: AccountId,
    pub value: u64,
}

impl ink::env::Event for Burn {
    type RemainingTopics = [state::HasRemainingTopics; 2];
    const SIGNATURE_TOPIC: Option<[u8; 32]> = Some(ink::blake2x256!("token.burn"));

    fn topics<E, B>(&self, builder: Topics<E, B>) -> TopicsOutput<E, B>
    where
        E: Environment,
        B: TopicsBuilderBackend<E>,
    {
        builder
            .build::<Self>()
            .push_topic(Self::SIGNATURE_TOPIC.as_ref())
            .push_topic(Some(&self.from))
            .finish()
    }
}

/// `token.approve`, impacted `[spender, owner]`.
#[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(ink::EventMetadata))]
pub struct Approve {
    pub owner: AccountId,
    pub spender: AccountId,
    pub value: u64,
}

impl ink::env::Event for Approve {
    type RemainingTopics = [state::HasRemainingTopics; 3];
    const SIGNATURE_TOPIC: Option<[u8; 32]> = Some(ink::blake2x256!("token.approve"));

    fn topics<E, B>(&self, builder: Topics<E, B>) -> TopicsOutput<E, B>
    where
        E: Environment,
        B: TopicsBuilderBackend<E>,
    {
        builder
            .build::<Self>()
            .push_topic(Self::SIGNATURE_TOPIC.as_ref())
            .push_topic(Some(&self.spender))
            .push_topic(Some(&self.owner))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scale::Encode;

    #[test]
    fn transfer_payload_keeps_schema_order() {
        let from = AccountId::from([0x01; 32]);
        let to = AccountId::from([0x02; 32]);
        let encoded = Transfer { from, to, value: 7 }.encode();

        assert_eq!(&encoded[..32], &[0x01; 32]);
        assert_eq!(&encoded[32..64], &[0x02; 32]);
        assert_eq!(&encoded[64..], &7u64.encode()[..]);
    }

    #[test]
    fn approve_payload_keeps_schema_order() {
        let owner = AccountId::from([0x0A; 32]);
        let spender = AccountId::from([0x0B; 32]);
        let encoded = Approve { owner, spender, value: 1 }.encode();

        assert_eq!(&encoded[..32], &[0x0A; 32]);
        assert_eq!(&encoded[32..64], &[0x0B; 32]);
    }

    #[test]
    fn signatures_are_distinct() {
        let signatures = [
            <Transfer as ink::env::Event>::SIGNATURE_TOPIC,
            <Mint as ink::env::Event>::SIGNATURE_TOPIC,
            <Burn as ink::env::Event>::SIGNATURE_TOPIC,
            <Approve as ink::env::Event>::SIGNATURE_TOPIC,
        ];
        for (i, a) in signatures.iter().enumerate() {
            assert!(a.is_some());
            for b in &signatures[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
