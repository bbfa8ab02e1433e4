//! Raw account management for the listing PDA, which is created by hand at
//! registration and grows by one item slot per listing.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

/// An account at a listing PDA only becomes program-owned through `register_user`.
pub(crate) fn is_listing_account(account: &AccountInfo) -> bool {
    account.owner == &crate::ID && !account.data_is_empty()
}

/// Creates a program-owned PDA of `space` bytes, tolerating lamports that
/// were sent to the address beforehand.
pub(crate) fn create_pda_account<'info>(
    account: &AccountInfo<'info>,
    payer: &Signer<'info>,
    system: &Program<'info, System>,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let rent = Rent::get()?.minimum_balance(space);
    let current_lamports = account.lamports();

    if current_lamports == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system.to_account_info(),
                CreateAccount {
                    from: payer.to_account_info(),
                    to: account.clone(),
                },
                &[signer_seeds],
            ),
            rent,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = rent.saturating_sub(current_lamports);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system.to_account_info(),
                Transfer {
                    from: payer.to_account_info(),
                    to: account.clone(),
                },
            ),
            top_up,
        )?;
    }

    system_program::allocate(
        CpiContext::new_with_signer(
            system.to_account_info(),
            Allocate {
                account_to_allocate: account.clone(),
            },
            &[signer_seeds],
        ),
        space as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            system.to_account_info(),
            Assign {
                account_to_assign: account.clone(),
            },
            &[signer_seeds],
        ),
        &crate::ID,
    )
}

/// Tops up rent from `payer` and resizes `account` to `new_space` bytes.
#[allow(deprecated)]
pub(crate) fn grow_account<'info>(
    account: &AccountInfo<'info>,
    payer: &Signer<'info>,
    system: &Program<'info, System>,
    new_space: usize,
) -> Result<()> {
    let rent_due = Rent::get()?
        .minimum_balance(new_space)
        .saturating_sub(account.lamports());

    if rent_due > 0 {
        system_program::transfer(
            CpiContext::new(
                system.to_account_info(),
                Transfer {
                    from: payer.to_account_info(),
                    to: account.clone(),
                },
            ),
            rent_due,
        )?;
    }

    account.realloc(new_space, false)?;

    Ok(())
}
