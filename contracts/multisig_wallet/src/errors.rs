use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultisigError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidOwnersOrSignatures = 3,
    NotOwner = 4,
    TxDoesNotExist = 5,
    TxAlreadyExecuted = 6,
    TxAlreadyConfirmed = 7,
    TxNotConfirmed = 8,
    NotEnoughConfirmations = 9,
    InvalidOwnerCount = 10,
    OwnerAlreadyExists = 11,
    OwnerDoesNotExist = 12,
    NotMultiSigWallet = 13,
    TxFailed = 14,
}
