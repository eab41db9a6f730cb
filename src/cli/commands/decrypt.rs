use classicrypt::{Direction, Result};

use crate::cli::CipherArgs;
use crate::cli::context::Context;

/// Execute the `classicrypt decrypt <cipher>` command.
///
/// Hill decoding needs a key matrix invertible mod 26.
pub fn execute(ctx: &Context, cipher: &CipherArgs) -> Result<()> {
    super::transform_helpers::run(ctx, Direction::Decode, cipher)
}
