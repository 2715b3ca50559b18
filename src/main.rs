//! # dice-duel
//!
//! This crate is a two-player dice game for the terminal. Each round both players throw four dice
//! until the throw scores; quads, pairs and two pairs score, anything else is thrown again. The
//! round goes to the higher throw, and the match to the first player whose running score reaches
//! the target.
//!
//! Set `RUST_LOG=debug` to follow every turn in the log.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use diceduel::init;

fn main() -> Result<()> {
    init()
}
