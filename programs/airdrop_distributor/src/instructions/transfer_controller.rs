use anchor_lang::prelude::*;
use crate::error::*;
use crate::event::*;
use crate::ledger::Authorizable;
use crate::state::*;

/**
 * Account context for handing control of an airdrop to another account
 *
 * Access Control: Only the current controller
 */
#[event_cpi]
#[derive(Accounts)]
pub struct TransferController<'info> {
    #[account(
        mut,
        constraint = airdrop.is_controller(&controller.key()) @ AirdropError::Unauthorized,
    )]
    pub airdrop: Account<'info, Airdrop>,

    pub controller: Signer<'info>,
}

pub fn handle_transfer_controller(
    ctx: Context<TransferController>,
    new_controller: Pubkey,
) -> Result<()> {
    let caller = ctx.accounts.controller.key();
    let airdrop = &mut ctx.accounts.airdrop;
    let previous_controller = airdrop.gate.transfer_control(&caller, new_controller)?;

    emit_cpi!(ControllerTransferred {
        airdrop: airdrop.key(),
        previous_controller,
        new_controller,
    });

    Ok(())
}
