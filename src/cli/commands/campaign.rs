//! Campaign command implementations

use crate::cli::commands::{open_session, print_outcome, CommandError, WalletMode};
use crate::config::ConfigOverrides;
use crate::manager::CrowdfundManager;
use crate::view::format::{format_token_amount, short_address};
use crate::view::{CampaignCard, CampaignList, ContributeForm, CreateCampaignForm, StatusFilter};

/// List campaigns, optionally refreshing on every new block
pub async fn list(
    overrides: &ConfigOverrides,
    account: Option<&str>,
    search: String,
    status: StatusFilter,
    watch: bool,
) -> Result<(), CommandError> {
    let manager = open_session(overrides, account, WalletMode::Optional).await?;
    let view = CampaignList::new(search, status);

    let current_block = manager.current_block().await?;
    print_list(&manager, &view, current_block).await;

    if watch {
        watch_list(&manager, &view, current_block).await?;
    }

    Ok(())
}

async fn print_list(manager: &CrowdfundManager, view: &CampaignList, current_block: u64) {
    let campaigns = manager.load_campaigns().await;
    let has_account = manager.connection().selected_account().is_some();
    println!(
        "{}",
        view.render(&campaigns, current_block, has_account, &manager.config().display)
    );
}

/// Re-render on each new block until Ctrl-C
///
/// Failed reloads are logged by the contract client and never end the loop.
async fn watch_list(
    manager: &CrowdfundManager,
    view: &CampaignList,
    shown_block: u64,
) -> Result<(), CommandError> {
    let watcher = manager.block_watcher(shown_block)?;
    let mut blocks = watcher.subscribe();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    println!();
    println!("Watching for new blocks (Ctrl-C to stop)...");

    loop {
        tokio::select! {
            changed = blocks.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = &mut ctrl_c => {
                println!();
                println!("✓ Stopped watching");
                break;
            }
        }

        let current_block = *blocks.borrow_and_update();
        println!();
        println!(
            "── {} · block {} ──",
            chrono::Local::now().format("%H:%M:%S"),
            current_block
        );
        print_list(manager, view, current_block).await;
    }

    Ok(())
}

/// Show one campaign card with the viewer's own contribution
pub async fn show(
    overrides: &ConfigOverrides,
    account: Option<&str>,
    id: u32,
) -> Result<(), CommandError> {
    let manager = open_session(overrides, account, WalletMode::Optional).await?;
    let display = &manager.config().display;

    let campaign = manager.get_campaign(id).await?;
    let current_block = manager.current_block().await?;
    let selected = manager.connection().selected_account();

    let card = CampaignCard::new(&campaign, current_block, selected.is_some());
    println!("{}", card.render(display));

    if let Some(account) = selected {
        match manager.contract().get_contribution(id, account.address).await {
            Ok(amount) if !amount.is_zero() => println!(
                "  Your contribution: {} {}",
                format_token_amount(amount, display.token_decimals, display.display_decimals),
                display.token_symbol
            ),
            Ok(_) => {}
            Err(e) => log::warn!("Failed to get contribution: {}", e),
        }
        if card.can_contribute() {
            println!();
            println!("  Contribute with: crowdfund contribute {} --amount <tokens>", id);
        }
    }

    Ok(())
}

/// Create a campaign from the form fields
pub async fn create(
    overrides: &ConfigOverrides,
    account: Option<&str>,
    form: CreateCampaignForm,
) -> Result<(), CommandError> {
    let mut manager = open_session(overrides, account, WalletMode::Required).await?;

    let outcome = manager.create_campaign(&form).await?;

    println!("✓ Campaign '{}' created", form.title.trim());
    print_outcome(&outcome);

    Ok(())
}

/// Contribute an amount in tokens to a campaign
pub async fn contribute(
    overrides: &ConfigOverrides,
    account: Option<&str>,
    id: u32,
    amount: String,
) -> Result<(), CommandError> {
    let mut manager = open_session(overrides, account, WalletMode::Required).await?;

    let outcome = manager.contribute(id, &ContributeForm::new(amount.as_str())).await?;

    println!(
        "✓ Contributed {} {} to campaign {}",
        amount.trim(),
        manager.config().display.token_symbol,
        id
    );
    print_outcome(&outcome);

    Ok(())
}

pub async fn withdraw(
    overrides: &ConfigOverrides,
    account: Option<&str>,
    id: u32,
) -> Result<(), CommandError> {
    let mut manager = open_session(overrides, account, WalletMode::Required).await?;

    let outcome = manager.withdraw_funds(id).await?;

    println!("✓ Funds withdrawn from campaign {}", id);
    print_outcome(&outcome);

    Ok(())
}

pub async fn refund(
    overrides: &ConfigOverrides,
    account: Option<&str>,
    id: u32,
) -> Result<(), CommandError> {
    let mut manager = open_session(overrides, account, WalletMode::Required).await?;

    let outcome = manager.request_refund(id).await?;

    println!("✓ Refund requested for campaign {}", id);
    print_outcome(&outcome);

    Ok(())
}

pub async fn deactivate(
    overrides: &ConfigOverrides,
    account: Option<&str>,
    id: u32,
) -> Result<(), CommandError> {
    let mut manager = open_session(overrides, account, WalletMode::Required).await?;

    let outcome = manager.deactivate_campaign(id).await?;

    println!("✓ Campaign {} deactivated", id);
    print_outcome(&outcome);

    Ok(())
}

/// List every contributor and amount for a campaign
pub async fn contributors(
    overrides: &ConfigOverrides,
    account: Option<&str>,
    id: u32,
) -> Result<(), CommandError> {
    let manager = open_session(overrides, account, WalletMode::Optional).await?;
    let display = &manager.config().display;

    let contributors = manager.get_contributors(id).await?;

    if contributors.is_empty() {
        println!("No contributions to campaign {} yet", id);
        return Ok(());
    }

    println!("Contributors to campaign {} ({}):", id, contributors.len());
    println!();
    for info in &contributors {
        println!(
            "  {}  {} {}",
            short_address(&info.contributor),
            format_token_amount(info.amount, display.token_decimals, display.display_decimals),
            display.token_symbol
        );
    }

    Ok(())
}
