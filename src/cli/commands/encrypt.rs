use classicrypt::{Direction, Result};

use crate::cli::CipherArgs;
use crate::cli::context::Context;

/// Execute the `classicrypt encrypt <cipher>` command.
pub fn execute(ctx: &Context, cipher: &CipherArgs) -> Result<()> {
    super::transform_helpers::run(ctx, Direction::Encode, cipher)
}
