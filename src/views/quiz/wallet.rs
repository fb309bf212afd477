use maud::{html, Markup};

use crate::{
    models::{
        FakeWebsite, SignOrReject, SignatureDetails, TransactionDetails, WalletAction,
        WalletRequest, WalletType,
    },
    names, utils,
};

const WALLET_SLOT_ID: &str = "wallet-slot";

/// The simulated dapp and a slot the wallet prompt is loaded into.
pub fn scenario(question_number: u32, scenario: &SignOrReject) -> Markup {
    let opens_immediately = scenario
        .website_content
        .as_ref()
        .is_none_or(|site| site.button_disabled);

    html! {
        div class="scenario" {
            (browser_window(question_number, scenario))
            div id=(WALLET_SLOT_ID) {
                @if opens_immediately {
                    (wallet_prompt(question_number, scenario))
                }
            }
        }
    }
}

fn browser_window(question_number: u32, scenario: &SignOrReject) -> Markup {
    html! {
        div class="browser" {
            div class="browser-bar" {
                span class="browser-dots" { "● ● ●" }
                @if let Some(url) = &scenario.website_url {
                    span class="browser-url" { (url) }
                }
            }
            div class="browser-page" {
                @if let Some(title) = &scenario.website_title {
                    h4 { (title) }
                }
                @if let Some(site) = &scenario.website_content {
                    (fake_website(question_number, scenario, site))
                }
            }
        }
    }
}

fn fake_website(question_number: u32, scenario: &SignOrReject, site: &FakeWebsite) -> Markup {
    html! {
        div class="fake-site" data-edition=(site.edition) {
            p class="fake-site-name" { (format!("{:?}", site.site)) }
            p class="fake-site-tagline" { (site.site.tagline()) }
            button type="button" class="fake-site-button"
                   hx-get=(names::wallet_url(question_number))
                   hx-target=(format!("#{WALLET_SLOT_ID}"))
                   hx-swap="innerHTML"
                   disabled[site.button_disabled] {
                (scenario.interaction_label())
            }
        }
    }
}

/// Wallet popup asking the user to sign or reject the request.
pub fn wallet_prompt(question_number: u32, scenario: &SignOrReject) -> Markup {
    let wallet = scenario.wallet_type;
    let answer_url = names::answer_url(question_number);

    html! {
        div class=(format!("wallet {}", wallet.css_class())) {
            div class="wallet-header" {
                strong { (wallet.label()) }
                @if let WalletRequest::Transaction(tx) = &scenario.transaction_or_signature_details {
                    @if let Some(network) = &tx.network_name {
                        span class="wallet-network" { (network) }
                    }
                }
            }
            @match &scenario.transaction_or_signature_details {
                WalletRequest::Transaction(tx) => {
                    (transaction_details(wallet, scenario.website_url.as_deref(), tx))
                }
                WalletRequest::Signature(sig) => {
                    (signature_details(sig))
                }
            }
            div class="wallet-actions" {
                button type="button" class="wallet-reject secondary"
                       hx-post=(answer_url)
                       hx-vals=(action_vals(WalletAction::Reject))
                       hx-target="main"
                       hx-swap="innerHTML" {
                    "Reject"
                }
                button type="button" class="wallet-sign"
                       hx-post=(answer_url)
                       hx-vals=(action_vals(WalletAction::Sign))
                       hx-target="main"
                       hx-swap="innerHTML" {
                    @match wallet {
                        WalletType::SafeWallet => { "Sign transaction" }
                        WalletType::Metamask | WalletType::Trezor => { "Confirm" }
                    }
                }
            }
        }
    }
}

fn action_vals(action: WalletAction) -> String {
    serde_json::json!({ "action": action }).to_string()
}

fn transaction_details(wallet: WalletType, origin: Option<&str>, tx: &TransactionDetails) -> Markup {
    html! {
        dl class="wallet-details" {
            @if let Some(origin) = origin {
                dt { "Request from" }
                dd { (origin) }
            }
            dt { "From" }
            dd title=(tx.from_account) { (utils::short_hex(&tx.from_account)) }
            dt { "To" }
            dd title=(tx.to_account) { (utils::short_hex(&tx.to_account)) }
            @if let Some(amount) = &tx.amount {
                dt { "Amount" }
                dd { (amount) }
            }
            dt { "Function" }
            dd { code { (tx.function_name) } }
            dt { "Estimated fee" }
            dd { (tx.estimated_fee.eth) " ETH " span class="muted" { "(" (tx.estimated_fee.usd) ")" } }
        }
        @if wallet == WalletType::SafeWallet {
            (safe_status(tx))
        }
        details class="wallet-data" {
            summary { "Data" }
            pre { (tx.data) }
        }
    }
}

fn safe_status(tx: &TransactionDetails) -> Markup {
    html! {
        div class="safe-status" {
            @if let (Some(confirmations), Some(threshold)) = (tx.safe_confirmations, tx.safe_threshold) {
                p { "Confirmations: " strong { (confirmations) " of " (threshold) } }
            }
            @if tx.safe_requires_additional_confirmation.unwrap_or(false) {
                p class="safe-additional" {
                    "Requires an additional confirmation"
                    @if let Some(other) = tx.safe_additional_wallet_type {
                        " on " (other.label())
                    }
                    "."
                }
            }
        }
    }
}

fn signature_details(sig: &SignatureDetails) -> Markup {
    html! {
        dl class="wallet-details" {
            dt { "Signature request from" }
            dd { (sig.request_from) }
        }
        p class="wallet-message-label" { "Message" }
        pre class="wallet-message" { (sig.message) }
    }
}

pub fn wallet_review(scenario: &SignOrReject, chosen: WalletAction) -> Markup {
    html! {
        div class=(format!("wallet-review {}", scenario.wallet_type.css_class())) {
            p {
                "You chose to " strong { (chosen.as_str()) } " in " (scenario.wallet_type.label()) "."
            }
            @if chosen != scenario.expected_action {
                p { "The safe choice was to " strong { (scenario.expected_action.as_str()) } "." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EstimatedFee, FakeWebsiteKind};

    fn safe_tx() -> SignOrReject {
        SignOrReject {
            expected_action: WalletAction::Reject,
            wallet_type: WalletType::SafeWallet,
            website_url: Some("https://app.safe.global".into()),
            website_title: None,
            website_content: Some(FakeWebsite {
                site: FakeWebsiteKind::Aave,
                edition: 2,
                primary_button_text: Some("Supply".into()),
                button_disabled: false,
            }),
            interaction_button_text: None,
            transaction_or_signature_details: WalletRequest::Transaction(TransactionDetails {
                from_account: "0x71C7656EC7ab88b098defB751B7401B5f6d8976F".into(),
                to_account: "0x000000000022D473030F116dDEE9F6B43aC78BA3".into(),
                amount: None,
                estimated_fee: EstimatedFee { usd: "$2.10".into(), eth: "0.0007".into() },
                function_name: "approve".into(),
                data: "0x095ea7b3".into(),
                network_name: Some("Ethereum".into()),
                safe_threshold: Some(2),
                safe_confirmations: Some(1),
                safe_requires_additional_confirmation: Some(true),
                safe_additional_wallet_type: Some(WalletType::Trezor),
            }),
        }
    }

    #[test]
    fn website_button_loads_wallet_prompt() {
        let out = scenario(5, &safe_tx()).into_string();
        assert!(out.contains(r#"hx-get="/question/5/wallet""#));
        assert!(out.contains(">Supply</button>"));
        assert!(!out.contains("wallet-actions"));
    }

    #[test]
    fn missing_website_shows_prompt_directly() {
        let mut s = safe_tx();
        s.website_content = None;
        let out = scenario(5, &s).into_string();
        assert!(out.contains("wallet-actions"));
    }

    #[test]
    fn safe_prompt_shows_threshold() {
        let out = wallet_prompt(5, &safe_tx()).into_string();
        assert!(out.contains("wallet-safe"));
        assert!(out.contains("1 of 2"));
        assert!(out.contains("Requires an additional confirmation on Trezor."));
        assert!(out.contains("Sign transaction"));
        assert!(out.contains(r#"hx-post="/question/5/answer""#));
        assert!(out.contains("&quot;action&quot;:&quot;reject&quot;"));
    }

    #[test]
    fn signature_prompt_shows_message() {
        let mut s = safe_tx();
        s.wallet_type = WalletType::Metamask;
        s.transaction_or_signature_details = WalletRequest::Signature(SignatureDetails {
            request_from: "opensea.io".into(),
            message: "Welcome to OpenSea!".into(),
        });
        let out = wallet_prompt(1, &s).into_string();
        assert!(out.contains("opensea.io"));
        assert!(out.contains("Welcome to OpenSea!"));
        assert!(!out.contains("safe-status"));
        assert!(out.contains(">Confirm</button>"));
    }

    #[test]
    fn review_names_the_safe_choice() {
        let out = wallet_review(&safe_tx(), WalletAction::Sign).into_string();
        assert!(out.contains("You chose to <strong>sign</strong>"));
        assert!(out.contains("The safe choice was to <strong>reject</strong>"));
    }
}
