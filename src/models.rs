use std::{collections::HashSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub type Questions = Vec<Question>;

/// Explanatory text shown after a question is answered, one markdown blob per page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackContent {
    pub pages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_number: u32,
    pub question: String,
    pub feedback_content: FeedbackContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page_url: Option<String>,
    #[serde(flatten)]
    pub interaction: Interaction,
}

/// How the user answers a question. Tagged by the `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Interaction {
    Single(MultiChoice),
    Multi(MultiChoice),
    SignOrReject(SignOrReject),
}

impl Question {
    pub fn kind_label(&self) -> &'static str {
        match &self.interaction {
            Interaction::Single(_) => "Single choice",
            Interaction::Multi(_) => "Multiple choice",
            Interaction::SignOrReject(_) => "Sign or reject",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiChoice {
    pub options: Vec<ChoiceOption>,
    pub correct_answers: Vec<String>,
}

impl MultiChoice {
    /// The selection is correct when it names exactly the correct option ids.
    pub fn is_correct<S: AsRef<str>>(&self, selected: &[S]) -> bool {
        let selected: HashSet<&str> = selected.iter().map(AsRef::as_ref).collect();
        let correct: HashSet<&str> = self.correct_answers.iter().map(String::as_str).collect();
        selected == correct
    }

    pub fn is_answer(&self, option_id: &str) -> bool {
        self.correct_answers.iter().any(|id| id == option_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOrReject {
    pub expected_action: WalletAction,
    pub wallet_type: WalletType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_content: Option<FakeWebsite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction_button_text: Option<String>,
    pub transaction_or_signature_details: WalletRequest,
}

impl SignOrReject {
    pub fn interaction_label(&self) -> &str {
        self.interaction_button_text
            .as_deref()
            .or_else(|| {
                self.website_content
                    .as_ref()
                    .and_then(|site| site.primary_button_text.as_deref())
            })
            .unwrap_or("Connect wallet")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WalletAction {
    Sign,
    Reject,
}

impl WalletAction {
    pub fn as_str(self) -> &'static str {
        match self {
            WalletAction::Sign => "sign",
            WalletAction::Reject => "reject",
        }
    }
}

impl fmt::Display for WalletAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWalletAction(pub String);

impl fmt::Display for UnknownWalletAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown wallet action '{}'", self.0)
    }
}

impl std::error::Error for UnknownWalletAction {}

impl FromStr for WalletAction {
    type Err = UnknownWalletAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sign" => Ok(WalletAction::Sign),
            "reject" => Ok(WalletAction::Reject),
            other => Err(UnknownWalletAction(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WalletType {
    Metamask,
    SafeWallet,
    Trezor,
}

impl WalletType {
    pub fn label(self) -> &'static str {
        match self {
            WalletType::Metamask => "MetaMask",
            WalletType::SafeWallet => "Safe{Wallet}",
            WalletType::Trezor => "Trezor",
        }
    }

    /// CSS modifier used by the wallet prompt.
    pub fn css_class(self) -> &'static str {
        match self {
            WalletType::Metamask => "wallet-metamask",
            WalletType::SafeWallet => "wallet-safe",
            WalletType::Trezor => "wallet-trezor",
        }
    }
}

/// The request shown in the wallet prompt. Which shape applies depends on the
/// scenario; serde tries the transaction shape first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WalletRequest {
    Transaction(TransactionDetails),
    Signature(SignatureDetails),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatedFee {
    pub usd: String,
    pub eth: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    pub from_account: String,
    pub to_account: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    pub estimated_fee: EstimatedFee,
    pub function_name: String,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,
    // Only read when the wallet is a Safe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_confirmations: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_requires_additional_confirmation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_additional_wallet_type: Option<WalletType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureDetails {
    pub request_from: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FakeWebsiteKind {
    Uniswap,
    OpenSea,
    SendEth,
    Aave,
}

impl FakeWebsiteKind {
    pub fn tagline(self) -> &'static str {
        match self {
            FakeWebsiteKind::Uniswap => "Swap anytime, anywhere.",
            FakeWebsiteKind::OpenSea => "Discover, collect, and sell NFTs.",
            FakeWebsiteKind::SendEth => "Send ETH to any address.",
            FakeWebsiteKind::Aave => "Earn interest, borrow assets.",
        }
    }
}

/// Simulated dapp page shown before the wallet prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FakeWebsite {
    pub site: FakeWebsiteKind,
    #[serde(default = "default_edition")]
    pub edition: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_button_text: Option<String>,
    #[serde(default)]
    pub button_disabled: bool,
}

fn default_edition() -> u32 {
    1
}
