//! This module contains all functions related to taking input from the players. They all use the
//! `dialoguer` crate to draw the prompts on the given terminal.
//!
//! None of them validates beyond what the prompt itself needs: names and targets are handed to the
//! session as typed, and the session decides what to keep.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::menu::MenuItem;
use crate::player::Seat;
use crate::session::TargetScore;

/// This function asks for the name of the player in the given seat. An empty answer is allowed,
/// and means the default name stays.
pub(crate) fn take_name(term: &Term, seat: Seat) -> Result<String> {
    let name = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}",
            style(format!("Name for {seat} (Enter keeps the default)")).bold()
        ))
        .allow_empty(true)
        .interact_text_on(term)?;

    Ok(name)
}

/// This function asks for a new target score. The raw text comes back so that a rejected value
/// can be reported the same way as any other invalid target.
pub(crate) fn take_target(term: &Term, current: TargetScore) -> Result<String> {
    let target = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}",
            style(format!("New target score (currently {current})")).bold()
        ))
        .allow_empty(true)
        .interact_text_on(term)?;

    Ok(target)
}

/// This function shows the main menu and returns the entry picked with the return key.
pub(crate) fn take_action(term: &Term) -> Result<MenuItem> {
    let items = MenuItem::list();
    let labels = items.map(MenuItem::repr);

    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Choose an action").bold()))
        .items(&labels)
        .default(0)
        .interact_on(term)?;

    // the selection indexes the same list the labels came from
    Ok(items.get(picked).copied().unwrap_or(MenuItem::Exit))
}

/// This function asks whether to start over once the match has a winner.
pub(crate) fn play_again(term: &Term) -> Result<bool> {
    let again = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Start a new game?").bold()))
        .default(false)
        .interact_on(term)?;

    Ok(again)
}
